//! Pure transforms over the tree aggregate.
//!
//! Every operation here is a total function `(&TreeData, args) ->
//! TreeData`: the input aggregate is never mutated, and absent identities
//! degrade to no-ops rather than raising errors. Callers that need to
//! report "not found" to a user check existence separately (the
//! [`crate::planner`] surface does exactly that).
//!
//! ## Submodules
//!
//! - [`extract`]: breadth-first subtree projection for the execution
//!   oracle payload

use jiff::Timestamp;

use crate::models::{PlanNode, TreeData, UpdateNodeRequest};

pub mod extract;

#[cfg(test)]
mod tests;

pub use extract::extract_for_execution;

/// Inserts a node into the tree.
///
/// If the node carries a `parent_id` and the parent exists, the node's
/// identity is appended to the parent's children and the parent's
/// `updated_at` is bumped. If the parent does not exist, the node is
/// inserted as an unreachable orphan and no error is raised. Root nodes
/// (no parent) are appended to `root_node_ids`, skipping duplicates.
pub fn add_node(tree: &TreeData, node: PlanNode) -> TreeData {
    let mut next = tree.clone();
    let node_id = node.id.clone();
    let parent_id = node.parent_id.clone();
    next.nodes.insert(node_id.clone(), node);

    match parent_id {
        Some(parent_id) => {
            if let Some(parent) = next.nodes.get_mut(&parent_id) {
                parent.children_ids.push(node_id);
                parent.updated_at = Timestamp::now();
            }
        }
        None => {
            if !next.root_node_ids.contains(&node_id) {
                next.root_node_ids.push(node_id);
            }
        }
    }
    next
}

/// Applies a partial update to a node.
///
/// Returns the input tree unchanged when `id` is absent. A content change
/// appends the *replaced* content to the edit history (the history always
/// trails the current content by one version) and truncates the history
/// from the front past the cap. `updated_at` is refreshed even when the
/// update carries no effective change.
pub fn update_node(tree: &TreeData, id: &str, updates: &UpdateNodeRequest) -> TreeData {
    let Some(existing) = tree.nodes.get(id) else {
        return tree.clone();
    };

    let now = Timestamp::now();
    let mut node = existing.clone();

    if let Some(content) = &updates.content {
        if *content != node.content {
            let replaced = std::mem::replace(&mut node.content, content.clone());
            node.push_history(now, replaced);
        }
    }
    if let Some(status) = updates.status {
        node.status = status;
    }
    node.updated_at = now;

    let mut next = tree.clone();
    next.nodes.insert(id.to_string(), node);
    next
}

/// Removes a node and its entire subtree.
///
/// Returns the input tree unchanged when `id` is absent. The node is
/// detached from `root_node_ids` and from its parent's children (bumping
/// the parent's `updated_at`), then every child is deleted recursively.
/// There is no re-parenting or orphan-preserving mode.
pub fn delete_node(tree: &TreeData, id: &str) -> TreeData {
    let Some(target) = tree.nodes.get(id) else {
        return tree.clone();
    };
    let parent_id = target.parent_id.clone();
    let children = target.children_ids.clone();

    let mut next = tree.clone();
    next.nodes.remove(id);
    next.root_node_ids.retain(|root_id| root_id != id);

    if let Some(parent_id) = parent_id {
        if let Some(parent) = next.nodes.get_mut(&parent_id) {
            parent.children_ids.retain(|child_id| child_id != id);
            parent.updated_at = Timestamp::now();
        }
    }

    for child_id in &children {
        next = delete_node(&next, child_id);
    }
    next
}
