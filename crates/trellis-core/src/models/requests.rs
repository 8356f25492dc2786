//! Request types for updating nodes.

use serde::{Deserialize, Serialize};

use super::NodeStatus;

/// Partial update for a plan node.
///
/// Only `content` and `status` are updatable through this path; identity,
/// parent link, children order, and `created_at` can never be set by a
/// caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct UpdateNodeRequest {
    /// New content for the node. A change of content appends the replaced
    /// content to the node's edit history.
    pub content: Option<String>,

    /// New status for the node
    pub status: Option<NodeStatus>,
}

impl UpdateNodeRequest {
    /// Creates a content-only update.
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            status: None,
        }
    }

    /// Creates a status-only update.
    pub fn status(status: NodeStatus) -> Self {
        Self {
            content: None,
            status: Some(status),
        }
    }
}
