//! Cross-cutting error types for Skygate.
//!
//! Transport errors live in `sg-client` and form errors in `sg-pages`. This
//! module only covers failures that can be detected from the data alone.

use thiserror::Error;

/// Errors that can be raised while building or validating core values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required field was left empty.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// Raw text could not be parsed as JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
