//! `GET /health`.

use sg_core::entities::HealthResponse;

use crate::{
    ApiClient,
    error::ClientError,
    http::{check_response, read_json},
};

impl ApiClient {
    /// Probe the backend's health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a
    /// non-success status, or the body cannot be decoded.
    pub async fn get_health(&self) -> Result<HealthResponse, ClientError> {
        let resp = check_response(self.http.get(self.endpoint("/health")).send().await?).await?;
        read_json(resp).await
    }
}
