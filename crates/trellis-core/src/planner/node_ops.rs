//! Node-level operations for the Planner.

use log::debug;

use super::Planner;
use crate::{
    error::{PlanError, Result},
    import,
    models::{NodeStatus, PlanNode, UpdateNodeRequest},
    snapshot, tree,
};

impl Planner {
    /// Creates a new pending node and inserts it into the tree.
    ///
    /// With a `parent_id` the node is attached under that parent; without
    /// one it becomes a new root. Returns the created node.
    pub fn add_node(&mut self, parent_id: Option<&str>, content: &str) -> PlanNode {
        let node = PlanNode::new(content, parent_id.map(String::from), NodeStatus::Pending);
        let created = node.clone();
        self.tree = tree::add_node(&self.tree, node);
        created
    }

    /// Applies a partial update (content and/or status) to a node.
    ///
    /// Returns the updated node.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::NodeNotFound`] if `id` is absent; the tree is
    /// left unchanged.
    pub fn update_node(&mut self, id: &str, request: &UpdateNodeRequest) -> Result<PlanNode> {
        if !self.tree.contains(id) {
            return Err(PlanError::node_not_found(id));
        }
        self.tree = tree::update_node(&self.tree, id, request);
        self.tree
            .get(id)
            .cloned()
            .ok_or_else(|| PlanError::node_not_found(id))
    }

    /// Deletes a node and its entire subtree.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::NodeNotFound`] if `id` is absent; the tree is
    /// left unchanged.
    pub fn delete_node(&mut self, id: &str) -> Result<()> {
        if !self.tree.contains(id) {
            return Err(PlanError::node_not_found(id));
        }
        self.tree = tree::delete_node(&self.tree, id);
        Ok(())
    }

    /// Exports the current tree as a pretty-printed JSON snapshot.
    pub fn export_snapshot(&self) -> Result<String> {
        snapshot::export_snapshot(&self.tree)
    }

    /// Replaces the whole tree with a parsed native snapshot.
    ///
    /// The payload is parsed completely before the replace, so a failed
    /// import leaves the current tree untouched.
    pub fn import_snapshot(&mut self, data: &str) -> Result<()> {
        let imported = snapshot::parse_snapshot(data)?;
        debug!("Imported snapshot with {} nodes", imported.len());
        self.tree = imported;
        Ok(())
    }

    /// Replaces the whole tree with one built from a foreign task
    /// hierarchy (a JSON array of task records).
    pub fn import_foreign_tasks(&mut self, data: &str) -> Result<()> {
        let tasks = import::parse_foreign(data)?;
        let imported = import::import_foreign(&tasks);
        debug!(
            "Imported {} foreign tasks into {} nodes",
            tasks.len(),
            imported.len()
        );
        self.tree = imported;
        Ok(())
    }
}
