use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Priority;
use crate::ids::BusinessId;

/// Task identifier as issued by the backend: a database serial or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// A unit of compliance work.
///
/// Every field is optional on the wire so one odd row cannot sink the list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChecklistTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    #[schemars(with = "Option<String>")]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ChecklistTask {
    /// Badge text shown next to the task, e.g. `open (high)`.
    #[must_use]
    pub fn badge(&self) -> String {
        format!("{} ({})", self.status, self.priority)
    }
}

/// Body of `GET /api/checklist`: a bare array or a `{"tasks": [...]}` envelope.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum TaskList {
    Bare(Vec<ChecklistTask>),
    Envelope { tasks: Vec<ChecklistTask> },
}

impl TaskList {
    #[must_use]
    pub fn into_tasks(self) -> Vec<ChecklistTask> {
        match self {
            Self::Bare(tasks) | Self::Envelope { tasks } => tasks,
        }
    }
}

/// Body of `POST /api/checklist`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChecklistAddRequest {
    pub business_id: BusinessId,
    pub task: String,
}

/// Success body of `POST /api/checklist`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChecklistAddResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<TaskId>,
}
