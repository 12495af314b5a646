//! Shared HTTP response helpers for the endpoint modules.
//!
//! Centralizes the status-code check (non-success → [`ClientError::Api`] with
//! the backend's `{"error": ...}` message) and body decoding so endpoint
//! modules stay focused on request construction.

use serde::de::DeserializeOwned;

use crate::error::ClientError;

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Read the whole body and decode it as `T`.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body).map_or_else(|_| body.trim().to_string(), |b| b.error)
}
