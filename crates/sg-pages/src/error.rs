//! Form validation errors.
//!
//! These mirror the browser's `required` / `type="url"` checks: a submit that
//! fails them never reaches the network and leaves the displayed result alone.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// A required input was left empty.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// The URL input does not hold an absolute URL.
    #[error("'{value}' is not a valid URL: {reason}")]
    InvalidUrl { value: String, reason: String },
}
