//! Checklist page behavior.

use serde::{Deserialize, Serialize};

/// When the checklist page reloads its task list after the business id changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefetchPolicy {
    /// Fetch on every change to a non-empty business id, keystrokes included.
    #[default]
    OnChange,
    /// Fetch only when the business id is confirmed (blur or submit).
    OnConfirm,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChecklistConfig {
    #[serde(default)]
    pub refetch: RefetchPolicy,
}
