//! Error types for the plan-tree engine.

use thiserror::Error;

/// Comprehensive error type for all engine operations.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Node not found for the given ID
    #[error("Node with ID {id} not found")]
    NodeNotFound { id: String },
    /// Execution requested on a subtree that resolves to zero nodes
    #[error("Cannot execute an empty plan (no nodes reachable from {id})")]
    EmptyPlan { id: String },
    /// The decomposition or execution oracle call failed, timed out, or
    /// returned a malformed payload
    #[error("Oracle {operation} failed: {source}")]
    Oracle {
        operation: &'static str,
        #[source]
        source: anyhow::Error,
    },
    /// Snapshot or foreign-task payload could not be parsed
    #[error("Import error: {message}")]
    ImportParse {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
    /// Serialization errors on the export path
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors (builder misuse)
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl PlanError {
    /// Creates a not-found error for a node identity.
    pub fn node_not_found(id: impl Into<String>) -> Self {
        Self::NodeNotFound { id: id.into() }
    }

    /// Creates an oracle failure for the named workflow operation.
    pub fn oracle(operation: &'static str, source: anyhow::Error) -> Self {
        Self::Oracle { operation, source }
    }

    /// Creates an import error with an underlying JSON parse failure.
    pub fn import_parse(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ImportParse {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Creates an import error for a payload that parsed as JSON but does
    /// not match the accepted shape.
    pub fn import_shape(message: impl Into<String>) -> Self {
        Self::ImportParse {
            message: message.into(),
            source: None,
        }
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, PlanError>;
