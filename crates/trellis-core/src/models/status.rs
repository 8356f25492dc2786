//! Status enumeration for plan nodes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of plan node statuses.
///
/// The status state machine permits `Pending -> Running -> {Completed,
/// Failed, Decomposed}`, and any state may re-enter `Running` (re-execution
/// and re-decomposition are allowed). There is no terminal state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    /// Node has not been executed or decomposed yet
    #[default]
    Pending,

    /// Node is mid-flight in an oracle workflow (transitional)
    Running,

    /// Execution resolved the node successfully
    Completed,

    /// Execution or decomposition of the node failed
    Failed,

    /// Node has been expanded into child sub-plans
    Decomposed,
}

impl FromStr for NodeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(NodeStatus::Pending),
            "running" => Ok(NodeStatus::Running),
            "completed" => Ok(NodeStatus::Completed),
            "failed" => Ok(NodeStatus::Failed),
            "decomposed" => Ok(NodeStatus::Decomposed),
            _ => Err(format!("Invalid node status: {s}")),
        }
    }
}

impl NodeStatus {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Pending => "pending",
            NodeStatus::Running => "running",
            NodeStatus::Completed => "completed",
            NodeStatus::Failed => "failed",
            NodeStatus::Decomposed => "decomposed",
        }
    }
}
