//! Request and response bodies for every backend endpoint.
//!
//! Field names match the JSON on the wire. Response structs are lenient:
//! unknown fields are ignored and optional fields default, so a backend that
//! adds fields never breaks the client.

mod audit;
mod checklist;
mod consent;
mod health;

pub use audit::{AuditRequest, AuditResponse};
pub use checklist::{ChecklistAddRequest, ChecklistAddResponse, ChecklistTask, TaskId, TaskList};
pub use consent::{ConsentRequest, ConsentResponse, ConsentTemplate, DEFAULT_TEMPLATE_TEXT};
pub use health::HealthResponse;
