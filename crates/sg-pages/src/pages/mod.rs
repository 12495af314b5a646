//! Page controllers.
//!
//! Each controller owns its form inputs and splits every operation in two:
//! `begin_*` validates the form, takes a ticket, and yields the wire request;
//! `resolve_*` applies the backend's answer for that ticket. The `async`
//! helpers on each page run both halves back to back against a
//! [`ComplianceApi`](sg_client::ComplianceApi).

pub mod audit;
pub mod checklist;
pub mod consent;

pub use audit::{AUDIT_FAILED, AuditPage, AuditSubmission};
pub use checklist::{ADD_FAILED, AddSubmission, ChecklistPage, FetchSubmission};
pub use consent::{CONSENT_FAILED, ConsentPage, ConsentSubmission};

use sg_core::BusinessId;

use crate::error::FormError;

pub(crate) fn require_business_id(raw: &str) -> Result<BusinessId, FormError> {
    BusinessId::parse(raw).map_err(|_| FormError::MissingField {
        field: "business_id",
    })
}

pub(crate) const fn require_field(value: &str, field: &'static str) -> Result<(), FormError> {
    if value.is_empty() {
        return Err(FormError::MissingField { field });
    }
    Ok(())
}
