//! Importer for externally fetched task hierarchies.
//!
//! Maps an arbitrary nested task representation (a list of
//! [`ForeignTask`] records) into the internal node model, translating the
//! foreign status vocabulary and reusing foreign identities verbatim.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{PlanError, Result},
    models::{NodeStatus, PlanNode, TreeData},
    tree::add_node,
};

/// One task record in the foreign hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ForeignTask {
    /// Foreign identity, reused as the internal node identity. Must be
    /// globally unique within one import.
    pub uid: String,

    /// Task title; becomes the first line of the node content
    pub title: String,

    /// Task body, appended below the title when non-empty
    #[serde(default)]
    pub content: String,

    /// Nested sub-tasks, in order
    #[serde(default)]
    pub children: Vec<ForeignTask>,

    /// Foreign status string, translated case-insensitively
    #[serde(default)]
    pub status: Option<String>,
}

/// Parses a foreign-task payload: a JSON array of [`ForeignTask`] records.
///
/// # Errors
///
/// Returns [`PlanError::ImportParse`] when the payload is not valid JSON,
/// is an object (the native snapshot shape), or does not match the task
/// shape.
pub fn parse_foreign(data: &str) -> Result<Vec<ForeignTask>> {
    let value: Value = serde_json::from_str(data)
        .map_err(|e| PlanError::import_parse("task payload is not valid JSON", e))?;

    if value.is_object() {
        return Err(PlanError::import_shape(
            "expected a JSON array of tasks, found an object; use the snapshot import for tree exports",
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| PlanError::import_parse("payload does not match the task array shape", e))
}

/// Builds a full tree from a foreign task hierarchy.
///
/// One root per top-level task, in input order; recursion order is
/// preserved as children order.
pub fn import_foreign(tasks: &[ForeignTask]) -> TreeData {
    let mut tree = TreeData::new();
    for task in tasks {
        tree = import_task(&tree, task, None);
    }
    tree
}

fn import_task(tree: &TreeData, task: &ForeignTask, parent_id: Option<&str>) -> TreeData {
    let node = PlanNode::with_id(
        &task.uid,
        synthesize_content(&task.title, &task.content),
        parent_id.map(String::from),
        translate_status(task.status.as_deref()),
    );
    let mut next = add_node(tree, node);
    for child in &task.children {
        next = import_task(&next, child, Some(&task.uid));
    }
    next
}

/// Joins a task title and trimmed body into node content.
fn synthesize_content(title: &str, content: &str) -> String {
    let body = content.trim();
    if body.is_empty() {
        title.to_string()
    } else {
        format!("{title}\n{body}")
    }
}

/// Translates the foreign status vocabulary, case-insensitively.
///
/// Unrecognized non-empty values fall back to `Pending` with a logged
/// diagnostic; this is never a hard error.
fn translate_status(status: Option<&str>) -> NodeStatus {
    let Some(raw) = status else {
        return NodeStatus::Pending;
    };
    match raw.to_lowercase().as_str() {
        "done" => NodeStatus::Completed,
        "in progress" => NodeStatus::Running,
        "blocked" => NodeStatus::Failed,
        "pending" => NodeStatus::Pending,
        "" => NodeStatus::Pending,
        other => {
            log::warn!("Unrecognized task status {other:?}, defaulting to pending");
            NodeStatus::Pending
        }
    }
}
