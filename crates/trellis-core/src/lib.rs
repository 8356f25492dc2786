//! Core library for the Trellis plan-tree orchestration engine.
//!
//! This crate provides the in-memory tree data model for hierarchical
//! plans, the pure mutation operations over it, the subtree-extraction
//! algorithm that scopes an execution request, and the
//! optimistic-update/rollback workflows that wrap calls to an external
//! reasoning oracle.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): the [`PlanNode`] unit, the [`TreeData`]
//!   aggregate, and the closed [`NodeStatus`] enumeration
//! - **Tree transforms** ([`tree`]): total pure functions producing new
//!   aggregate values; the aggregate is never mutated in place
//! - **Oracle seam** ([`oracle`]): the async trait and wire types for the
//!   external decomposition/execution service
//! - **Planner** ([`planner`]): the stateful orchestrator owning the tree
//!   and the oracle handle
//! - **Persistence surface** ([`snapshot`], [`import`]): JSON snapshot
//!   export/import and the foreign-task importer
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use trellis_core::oracle::{
//!     DecomposeRequest, DecomposeResponse, ExecuteRequest, ExecuteResponse, Oracle,
//! };
//! use trellis_core::PlannerBuilder;
//!
//! struct FixedOracle;
//!
//! #[async_trait]
//! impl Oracle for FixedOracle {
//!     async fn decompose(&self, _request: DecomposeRequest) -> anyhow::Result<DecomposeResponse> {
//!         Ok(DecomposeResponse {
//!             sub_plans: vec!["Draft the outline".to_string(), "Write the body".to_string()],
//!         })
//!     }
//!
//!     async fn execute(&self, _request: ExecuteRequest) -> anyhow::Result<ExecuteResponse> {
//!         Ok(ExecuteResponse::new())
//!     }
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut planner = PlannerBuilder::new()
//!     .with_oracle(Arc::new(FixedOracle))
//!     .build()?;
//!
//! let root = planner.add_node(None, "Write the quarterly report");
//! let children = planner.decompose_node(&root.id).await?;
//! assert_eq!(children.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod import;
pub mod models;
pub mod oracle;
pub mod planner;
pub mod snapshot;
pub mod tree;

// Re-export commonly used types
pub use error::{PlanError, Result};
pub use import::ForeignTask;
pub use models::{
    EditRecord, ExecutionNode, NodeId, NodeStatus, PlanNode, TreeData, UpdateNodeRequest,
};
pub use oracle::Oracle;
pub use planner::{Planner, PlannerBuilder};
