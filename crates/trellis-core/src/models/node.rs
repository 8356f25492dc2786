//! Plan node model definition and construction.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::NodeStatus;

/// Opaque node identity. UUID text for factory-made nodes; imported trees
/// reuse the foreign `uid` verbatim.
pub type NodeId = String;

/// Maximum number of edit history entries kept per node. Oldest entries
/// are dropped first when the cap is exceeded.
pub const MAX_EDIT_HISTORY: usize = 10;

/// A single content snapshot in a node's edit history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditRecord {
    /// When the snapshot was taken (UTC)
    pub timestamp: Timestamp,

    /// The content at that point in time
    pub content: String,
}

/// The atomic unit of a hierarchical plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanNode {
    /// Unique identifier, assigned at creation, immutable
    pub id: NodeId,

    /// Free-form text; the first line is treated as a title by display
    /// layers, the engine does not parse it
    pub content: String,

    /// Identity of the parent node, or `None` for a root
    pub parent_id: Option<NodeId>,

    /// Ordered child identities; insertion order is meaningful for
    /// display and execution sequencing
    pub children_ids: Vec<NodeId>,

    /// Current status of the node
    pub status: NodeStatus,

    /// Prior-content snapshots, oldest first, capped at
    /// [`MAX_EDIT_HISTORY`] entries; never empty after creation
    pub edit_history: Vec<EditRecord>,

    /// Timestamp when the node was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the node was last modified (UTC)
    pub updated_at: Timestamp,
}

impl PlanNode {
    /// Creates a new node with a fresh identity.
    ///
    /// Seeds the edit history with the initial content and stamps both
    /// timestamps with the current time.
    pub fn new(content: impl Into<String>, parent_id: Option<NodeId>, status: NodeStatus) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), content, parent_id, status)
    }

    /// Creates a new node reusing a caller-supplied identity.
    ///
    /// Used by the foreign-task importer, where identities must already be
    /// globally unique within one import.
    pub fn with_id(
        id: impl Into<NodeId>,
        content: impl Into<String>,
        parent_id: Option<NodeId>,
        status: NodeStatus,
    ) -> Self {
        let content = content.into();
        let now = Timestamp::now();
        Self {
            id: id.into(),
            content: content.clone(),
            parent_id,
            children_ids: Vec::new(),
            status,
            edit_history: vec![EditRecord {
                timestamp: now,
                content,
            }],
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends a prior-content snapshot to the edit history, dropping the
    /// oldest entry once the cap is exceeded.
    pub(crate) fn push_history(&mut self, timestamp: Timestamp, content: String) {
        self.edit_history.push(EditRecord { timestamp, content });
        if self.edit_history.len() > MAX_EDIT_HISTORY {
            self.edit_history.remove(0);
        }
    }
}
