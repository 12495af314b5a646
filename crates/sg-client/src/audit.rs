//! `POST /api/audit`.

use sg_core::entities::{AuditRequest, AuditResponse};

use crate::{
    ApiClient,
    error::ClientError,
    http::{check_response, read_json},
};

impl ApiClient {
    /// Request a website audit for a business.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a
    /// non-success status, or the body cannot be decoded.
    pub async fn post_audit(&self, request: &AuditRequest) -> Result<AuditResponse, ClientError> {
        let url = self.endpoint("/api/audit");
        tracing::debug!(business_id = %request.business_id, target_url = %request.url, "requesting audit");
        let resp = check_response(self.http.post(&url).json(request).send().await?).await?;
        read_json(resp).await
    }
}
