//! `GET /api/checklist` and `POST /api/checklist`.

use sg_core::BusinessId;
use sg_core::entities::{ChecklistAddRequest, ChecklistAddResponse, ChecklistTask, TaskList};

use crate::{
    ApiClient,
    error::ClientError,
    http::{check_response, read_json},
};

impl ApiClient {
    /// List the checklist tasks of a business, in backend order.
    ///
    /// Accepts both a bare array and a `{"tasks": [...]}` envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a
    /// non-success status, or the body cannot be decoded.
    pub async fn get_checklist(
        &self,
        business_id: &BusinessId,
    ) -> Result<Vec<ChecklistTask>, ClientError> {
        let url = format!(
            "{}?business_id={}",
            self.endpoint("/api/checklist"),
            urlencoding::encode(business_id.as_str())
        );
        tracing::debug!(%business_id, "fetching checklist");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let list: TaskList = read_json(resp).await?;
        Ok(list.into_tasks())
    }

    /// Add a task to a business's checklist.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a
    /// non-success status, or the body cannot be decoded.
    pub async fn post_checklist(
        &self,
        request: &ChecklistAddRequest,
    ) -> Result<ChecklistAddResponse, ClientError> {
        let url = self.endpoint("/api/checklist");
        tracing::debug!(business_id = %request.business_id, "adding checklist task");
        let resp = check_response(self.http.post(&url).json(request).send().await?).await?;
        read_json(resp).await
    }
}
