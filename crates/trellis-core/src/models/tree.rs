//! Tree aggregate definition.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{NodeId, PlanNode};

/// The aggregate holding a whole plan forest.
///
/// Invariants (maintained by the [`crate::tree`] transforms, not enforced
/// defensively):
///
/// - every identity in `root_node_ids` exists in `nodes` with
///   `parent_id == None`;
/// - every `children_ids` entry exists in `nodes` and back-references the
///   owning node as its parent;
/// - the node graph is a forest (no cycles, no shared parentage).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TreeData {
    /// Mapping from identity to node
    pub nodes: HashMap<NodeId, PlanNode>,

    /// Ordered root identities
    pub root_node_ids: Vec<NodeId>,
}

impl TreeData {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a node by identity.
    pub fn get(&self, id: &str) -> Option<&PlanNode> {
        self.nodes.get(id)
    }

    /// Returns whether the tree contains the given identity.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
