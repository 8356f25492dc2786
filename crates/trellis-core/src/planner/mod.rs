//! High-level orchestrator for the plan tree.
//!
//! This module provides the main [`Planner`] interface consumed by
//! UI-equivalent callers. The planner owns the tree aggregate and the
//! oracle handle, funnels every mutation through the pure transforms in
//! [`crate::tree`], and implements the two oracle workflows
//! (decomposition and execution) with their optimistic-transition /
//! rollback-on-failure protocol.
//!
//! ## Submodules
//!
//! - [`builder`]: factory for configured [`Planner`] instances
//! - [`node_ops`]: node-level operations (add, update, delete,
//!   snapshot import/export, foreign import)
//! - [`oracle_ops`]: the decomposition and execution workflows
//!
//! ## Concurrency
//!
//! The planner is designed for a single logical owner: every mutating
//! operation takes `&mut self`, so serial mutation is enforced by the
//! borrow checker rather than an internal lock. Callers that need shared
//! access layer their own serialization point (an actor, a mutex, or a
//! command channel) on top and hand out tree snapshots for reads.

use std::sync::Arc;

use crate::models::{PlanNode, TreeData};
use crate::oracle::Oracle;

pub mod builder;
pub mod node_ops;
pub mod oracle_ops;


pub use builder::PlannerBuilder;

/// Main orchestrator interface for managing a plan tree.
pub struct Planner {
    pub(crate) tree: TreeData,
    pub(crate) oracle: Arc<dyn Oracle>,
}

impl Planner {
    /// Creates a new planner over the given tree and oracle handle.
    pub(crate) fn new(oracle: Arc<dyn Oracle>, tree: TreeData) -> Self {
        Self { tree, oracle }
    }

    /// Returns the current tree aggregate.
    pub fn tree(&self) -> &TreeData {
        &self.tree
    }

    /// Looks up a node by identity.
    pub fn get_node(&self, id: &str) -> Option<&PlanNode> {
        self.tree.get(id)
    }
}
