//! Client error types.

use sg_core::enums::FailureKind;
use thiserror::Error;

/// Errors that can occur when talking to the compliance API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error: connect, timeout, or body read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// The `error` field of the body, or the raw body.
        message: String,
    },

    /// A success body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Collapse into the failure kind pages keep alongside their fixed message.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Http(_) => FailureKind::Network,
            Self::Api { status, .. } => FailureKind::Server { status: *status },
            Self::Decode(_) => FailureKind::Decode,
        }
    }
}
