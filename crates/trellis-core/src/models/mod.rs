//! Data models for the plan tree.
//!
//! This module contains the core domain types of the engine: the
//! [`PlanNode`] unit, the [`TreeData`] aggregate, the closed
//! [`NodeStatus`] enumeration, and the [`ExecutionNode`] projection that
//! crosses the oracle boundary.
//!
//! All wire-facing types serialize with camelCase field names so the
//! snapshot export/import format and the oracle payloads match the
//! external data contract (`parentId`, `childrenIds`, `rootNodeIds`, ...).
//!
//! Nodes are treated as value types: mutation operations in
//! [`crate::tree`] always produce new node values and a new aggregate
//! value, never aliasing-and-mutating in place.

pub mod execution;
pub mod node;
pub mod requests;
pub mod status;
pub mod tree;


// Re-export all public types at the models level
pub use execution::ExecutionNode;
pub use node::{EditRecord, NodeId, PlanNode, MAX_EDIT_HISTORY};
pub use requests::UpdateNodeRequest;
pub use status::NodeStatus;
pub use tree::TreeData;
