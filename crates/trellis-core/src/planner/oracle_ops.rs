//! Oracle-backed workflows for the Planner.
//!
//! Both workflows follow the same two-phase protocol: snapshot,
//! optimistic status transition, oracle call, commit-or-rollback. The
//! oracle call is the only suspension point, and every node touched
//! optimistically is resolved to a stable status before the workflow
//! returns.

use std::collections::HashMap;

use log::debug;

use super::Planner;
use crate::{
    error::{PlanError, Result},
    models::{NodeId, NodeStatus, PlanNode, UpdateNodeRequest},
    oracle::{DecomposeRequest, ExecuteRequest},
    tree,
};

impl Planner {
    /// Decomposes a node into oracle-proposed child sub-plans.
    ///
    /// The node transitions to `Running` for the duration of the call.
    /// On success one pending child is created per sub-plan, in response
    /// order, and the node becomes `Decomposed`; an empty response is
    /// valid and still marks the node `Decomposed`. On oracle failure the
    /// node becomes `Failed` — a terminal report, not a silent revert —
    /// and zero children are added.
    ///
    /// Returns the created children.
    ///
    /// # Errors
    ///
    /// * [`PlanError::NodeNotFound`] — `id` is absent; tree unchanged
    /// * [`PlanError::Oracle`] — the decomposition call failed
    pub async fn decompose_node(&mut self, id: &str) -> Result<Vec<PlanNode>> {
        let node = self
            .tree
            .get(id)
            .ok_or_else(|| PlanError::node_not_found(id))?;
        let request = DecomposeRequest {
            plan_node_content: node.content.clone(),
        };

        debug!("Decomposing node {id}");
        self.tree = tree::update_node(
            &self.tree,
            id,
            &UpdateNodeRequest::status(NodeStatus::Running),
        );

        match self.oracle.decompose(request).await {
            Ok(response) => {
                let mut next = self.tree.clone();
                let mut created = Vec::with_capacity(response.sub_plans.len());
                for sub_plan in response.sub_plans {
                    let child = PlanNode::new(sub_plan, Some(id.to_string()), NodeStatus::Pending);
                    created.push(child.clone());
                    next = tree::add_node(&next, child);
                }
                next = tree::update_node(
                    &next,
                    id,
                    &UpdateNodeRequest::status(NodeStatus::Decomposed),
                );
                self.tree = next;
                debug!("Decomposed node {id} into {} sub-plans", created.len());
                Ok(created)
            }
            Err(source) => {
                self.tree = tree::update_node(
                    &self.tree,
                    id,
                    &UpdateNodeRequest::status(NodeStatus::Failed),
                );
                Err(PlanError::oracle("decomposition", source))
            }
        }
    }

    /// Executes the subtree rooted at `id` through the oracle.
    ///
    /// Every node in the extracted projection transitions to `Running`
    /// before the call. On success each node named in the response takes
    /// the reported status; nodes the response omits keep their
    /// optimistic `Running` status, since the oracle is the source of
    /// truth for which nodes it touched. On oracle failure each touched
    /// node is restored to its exact pre-call status, except nodes that
    /// were already `Running` before the call, which resolve to `Failed`
    /// so nothing stays stuck mid-flight.
    ///
    /// # Errors
    ///
    /// * [`PlanError::EmptyPlan`] — `id` resolves to zero nodes; no
    ///   oracle call is made and no status changes
    /// * [`PlanError::Oracle`] — the execution call failed (after
    ///   rollback)
    pub async fn execute_node(&mut self, id: &str) -> Result<()> {
        let plan = tree::extract_for_execution(&self.tree.nodes, id);
        if plan.is_empty() {
            return Err(PlanError::EmptyPlan { id: id.to_string() });
        }

        let original_statuses: HashMap<NodeId, NodeStatus> = plan
            .values()
            .map(|node| (node.id.clone(), node.status))
            .collect();

        debug!("Executing {} nodes starting from {id}", plan.len());
        let mut running = self.tree.clone();
        for node_id in plan.keys() {
            running = tree::update_node(
                &running,
                node_id,
                &UpdateNodeRequest::status(NodeStatus::Running),
            );
        }
        self.tree = running;

        let request = ExecuteRequest {
            plan,
            start_node_id: id.to_string(),
        };
        match self.oracle.execute(request).await {
            Ok(response) => {
                let mut next = self.tree.clone();
                for (node_id, report) in &response {
                    if next.contains(node_id) {
                        next = tree::update_node(
                            &next,
                            node_id,
                            &UpdateNodeRequest::status(report.status),
                        );
                    }
                }
                self.tree = next;
                debug!("Execution updated {} node statuses", response.len());
                Ok(())
            }
            Err(source) => {
                let mut next = self.tree.clone();
                for (node_id, original) in &original_statuses {
                    if !next.contains(node_id) {
                        continue;
                    }
                    let restored = if *original == NodeStatus::Running {
                        NodeStatus::Failed
                    } else {
                        *original
                    };
                    next =
                        tree::update_node(&next, node_id, &UpdateNodeRequest::status(restored));
                }
                self.tree = next;
                Err(PlanError::oracle("execution", source))
            }
        }
    }
}
