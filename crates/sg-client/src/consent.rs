//! `POST /api/consent`.

use sg_core::entities::{ConsentRequest, ConsentResponse};

use crate::{
    ApiClient,
    error::ClientError,
    http::{check_response, read_json},
};

impl ApiClient {
    /// Store a consent template for a business.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a
    /// non-success status, or the body cannot be decoded.
    pub async fn post_consent(
        &self,
        request: &ConsentRequest,
    ) -> Result<ConsentResponse, ClientError> {
        let url = self.endpoint("/api/consent");
        tracing::debug!(business_id = %request.business_id, "saving consent template");
        let resp = check_response(self.http.post(&url).json(request).send().await?).await?;
        read_json(resp).await
    }
}
