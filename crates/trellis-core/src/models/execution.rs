//! Minimal node projection sent to the execution oracle.

use serde::{Deserialize, Serialize};

use super::{NodeId, NodeStatus, PlanNode};

/// The partial node view crossing the oracle boundary.
///
/// Carries exactly what execution needs: identity, content, status, and
/// structure. Edit history and timestamps are mutation provenance and are
/// deliberately excluded from the payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ExecutionNode {
    /// Node identity
    pub id: NodeId,

    /// Node content, for oracle context
    pub content: String,

    /// Status at extraction time
    pub status: NodeStatus,

    /// Parent identity, or `None` for a root
    pub parent_id: Option<NodeId>,

    /// Snapshot copy of the child identities, in order
    pub children_ids: Vec<NodeId>,
}

impl From<&PlanNode> for ExecutionNode {
    fn from(node: &PlanNode) -> Self {
        Self {
            id: node.id.clone(),
            content: node.content.clone(),
            status: node.status,
            parent_id: node.parent_id.clone(),
            children_ids: node.children_ids.clone(),
        }
    }
}
