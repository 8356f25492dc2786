//! Subtree extraction for execution requests.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::models::{ExecutionNode, NodeId, PlanNode};

/// Projects the subtree rooted at `start_id` into the minimal view sent
/// to the execution oracle.
///
/// Breadth-first traversal with a visited set; the set guards against
/// cycles since the forest invariant is not otherwise enforced. An
/// unknown `start_id` yields an empty mapping. Each projection carries a
/// snapshot copy of the node's children, not a live reference.
pub fn extract_for_execution(
    nodes: &HashMap<NodeId, PlanNode>,
    start_id: &str,
) -> HashMap<NodeId, ExecutionNode> {
    let mut subtree = HashMap::new();
    let mut queue: VecDeque<NodeId> = VecDeque::from([start_id.to_string()]);
    let mut visited: HashSet<NodeId> = HashSet::new();

    while let Some(current_id) = queue.pop_front() {
        if !visited.insert(current_id.clone()) {
            continue;
        }

        if let Some(node) = nodes.get(&current_id) {
            subtree.insert(current_id, ExecutionNode::from(node));
            for child_id in &node.children_ids {
                if !visited.contains(child_id) {
                    queue.push_back(child_id.clone());
                }
            }
        }
    }
    subtree
}
