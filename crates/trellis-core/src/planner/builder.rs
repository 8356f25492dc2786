//! Builder for creating and configuring Planner instances.

use std::sync::Arc;

use super::Planner;
use crate::{
    error::{PlanError, Result},
    models::TreeData,
    oracle::Oracle,
};

/// Builder for creating and configuring [`Planner`] instances.
#[derive(Default)]
pub struct PlannerBuilder {
    oracle: Option<Arc<dyn Oracle>>,
    tree: Option<TreeData>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the oracle the planner's workflows will consult (required).
    pub fn with_oracle(mut self, oracle: Arc<dyn Oracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Seeds the planner with an existing tree aggregate.
    ///
    /// If not specified, the planner starts with an empty tree.
    pub fn with_tree(mut self, tree: TreeData) -> Self {
        self.tree = Some(tree);
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Configuration`] if no oracle was provided.
    pub fn build(self) -> Result<Planner> {
        let oracle = self.oracle.ok_or_else(|| PlanError::Configuration {
            message: "an oracle is required to build a planner".to_string(),
        })?;
        Ok(Planner::new(oracle, self.tree.unwrap_or_default()))
    }
}
