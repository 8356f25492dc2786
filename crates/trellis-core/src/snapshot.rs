//! Snapshot export and import of the native tree aggregate.
//!
//! Export is the verbatim [`TreeData`] aggregate serialized as
//! human-formatted JSON. Import accepts only that shape; a foreign-task
//! array is rejected with a clear parse error instead of being silently
//! misinterpreted (the foreign variant lives in [`crate::import`]).

use serde_json::Value;

use crate::{
    error::{PlanError, Result},
    models::TreeData,
};

/// Serializes the tree aggregate as pretty-printed JSON.
pub fn export_snapshot(tree: &TreeData) -> Result<String> {
    Ok(serde_json::to_string_pretty(tree)?)
}

/// Parses a native snapshot back into a [`TreeData`] aggregate.
///
/// Parsing is completed before the caller replaces any tree, so a failed
/// import never leaves a partially-replaced aggregate behind.
///
/// # Errors
///
/// Returns [`PlanError::ImportParse`] when the payload is not valid JSON,
/// is a task array (the foreign-task shape), or does not match the
/// snapshot shape.
pub fn parse_snapshot(data: &str) -> Result<TreeData> {
    let value: Value = serde_json::from_str(data)
        .map_err(|e| PlanError::import_parse("snapshot is not valid JSON", e))?;

    if value.is_array() {
        return Err(PlanError::import_shape(
            "expected a tree snapshot object, found an array; use the foreign-task import for task lists",
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| PlanError::import_parse("payload does not match the tree snapshot shape", e))
}
