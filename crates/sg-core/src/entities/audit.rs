use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::BusinessId;

/// Body of `POST /api/audit`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditRequest {
    pub business_id: BusinessId,
    pub url: String,
}

/// Success body of `POST /api/audit`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditResponse {
    #[serde(default)]
    pub message: String,
    /// Findings in backend order. `None` when the backend sent no list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<String>>,
}
