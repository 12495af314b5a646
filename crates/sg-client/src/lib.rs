//! # sg-client
//!
//! HTTP client for the Skygate compliance API.
//!
//! Every call is a single request with no retry. Endpoints:
//! - `POST /api/audit`: request a website audit
//! - `POST /api/consent`: store a consent template
//! - `GET /api/checklist?business_id=`: list checklist tasks
//! - `POST /api/checklist`: add a checklist task
//! - `GET /health`: backend liveness
//!
//! Page controllers talk to the backend through the [`ComplianceApi`] trait
//! so they can be driven by an in-memory fake in tests.

pub mod audit;
pub mod checklist;
pub mod consent;
pub mod health;

mod error;
mod http;

use std::future::Future;
use std::time::Duration;

pub use error::ClientError;
pub use reqwest::Url;

use sg_config::ApiConfig;
use sg_core::BusinessId;
use sg_core::entities::{
    AuditRequest, AuditResponse, ChecklistAddRequest, ChecklistAddResponse, ChecklistTask,
    ConsentRequest, ConsentResponse,
};

// ── Trait ──────────────────────────────────────────────────────────

/// The four calls the pages make.
pub trait ComplianceApi {
    fn run_audit(
        &self,
        request: &AuditRequest,
    ) -> impl Future<Output = Result<AuditResponse, ClientError>>;

    fn save_consent(
        &self,
        request: &ConsentRequest,
    ) -> impl Future<Output = Result<ConsentResponse, ClientError>>;

    fn fetch_tasks(
        &self,
        business_id: &BusinessId,
    ) -> impl Future<Output = Result<Vec<ChecklistTask>, ClientError>>;

    fn add_task(
        &self,
        request: &ChecklistAddRequest,
    ) -> impl Future<Output = Result<ChecklistAddResponse, ClientError>>;
}

// ── Client ─────────────────────────────────────────────────────────

/// reqwest-backed client bound to one backend origin.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// No timeout is applied unless `timeout_secs` is set.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url_trimmed().to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl ComplianceApi for ApiClient {
    async fn run_audit(&self, request: &AuditRequest) -> Result<AuditResponse, ClientError> {
        self.post_audit(request).await
    }

    async fn save_consent(&self, request: &ConsentRequest) -> Result<ConsentResponse, ClientError> {
        self.post_consent(request).await
    }

    async fn fetch_tasks(
        &self,
        business_id: &BusinessId,
    ) -> Result<Vec<ChecklistTask>, ClientError> {
        self.get_checklist(business_id).await
    }

    async fn add_task(
        &self,
        request: &ChecklistAddRequest,
    ) -> Result<ChecklistAddResponse, ClientError> {
        self.post_checklist(request).await
    }
}
