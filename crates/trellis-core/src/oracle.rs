//! The external reasoning oracle seam.
//!
//! The engine treats the reasoning service as a black box behind the
//! [`Oracle`] trait: given text it returns either a list of sub-plan
//! strings (decomposition) or a status map (execution). Implementations
//! own transports, prompts, and timeouts; they surface any failure —
//! transport errors, timeouts, malformed payloads — as [`anyhow::Error`],
//! which the orchestrator maps to [`crate::PlanError::Oracle`] at the
//! workflow boundary.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{ExecutionNode, NodeId, NodeStatus};

/// Request payload for the decomposition oracle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct DecomposeRequest {
    /// The content of the plan node to decompose
    pub plan_node_content: String,
}

/// Response payload from the decomposition oracle.
///
/// An empty `sub_plans` list is valid: zero children are created and the
/// node still becomes `Decomposed`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct DecomposeResponse {
    /// Sub-plan contents, in the order children should be created
    pub sub_plans: Vec<String>,
}

/// Request payload for the execution oracle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ExecuteRequest {
    /// Minimal projection of the subtree to execute
    pub plan: HashMap<NodeId, ExecutionNode>,

    /// Identity of the node execution starts from
    pub start_node_id: NodeId,
}

/// Per-node record in an execution response.
///
/// The oracle may return additional fields; only `status` is consumed,
/// so extra fields are ignored on deserialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct NodeReport {
    /// Resolved status for the node
    pub status: NodeStatus,
}

/// Response payload from the execution oracle: a mapping from identity to
/// the resolved status record. Records for identities not present in the
/// request are ignored by the consumer.
pub type ExecuteResponse = HashMap<NodeId, NodeReport>;

/// The external decomposition/execution service.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Decomposes a plan node's content into sub-plan strings.
    async fn decompose(&self, request: DecomposeRequest) -> anyhow::Result<DecomposeResponse>;

    /// Executes a plan projection, resolving a status for each node the
    /// oracle touched.
    async fn execute(&self, request: ExecuteRequest) -> anyhow::Result<ExecuteResponse>;
}
