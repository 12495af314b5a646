//! Website audit page.

use serde_json::{Value, json};
use sg_client::{ClientError, ComplianceApi, Url};
use sg_core::entities::{AuditRequest, AuditResponse};
use sg_core::enums::Tone;

use super::{require_business_id, require_field};
use crate::error::FormError;
use crate::sequence::{Failure, Phase, Ticket, Tracked};
use crate::view::{Element, View};

/// Shown for every audit failure, whatever the cause.
pub const AUDIT_FAILED: &str = "Audit failed";

/// An audit request ready to send.
#[derive(Debug, Clone)]
pub struct AuditSubmission {
    pub ticket: Ticket,
    pub request: AuditRequest,
}

#[derive(Debug, Default)]
pub struct AuditPage {
    business_id: String,
    url: String,
    result: Tracked<AuditResponse>,
}

impl AuditPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_business_id(&mut self, value: impl Into<String>) {
        self.business_id = value.into();
    }

    pub fn set_url(&mut self, value: impl Into<String>) {
        self.url = value.into();
    }

    #[must_use]
    pub fn business_id(&self) -> &str {
        &self.business_id
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Validate the form and take a ticket for one audit request.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] if the business id is empty or the URL is not
    /// an absolute URL. Nothing is sent and the displayed result is kept.
    pub fn begin_audit(&mut self) -> Result<AuditSubmission, FormError> {
        let business_id = require_business_id(&self.business_id)?;
        require_field(&self.url, "url")?;
        Url::parse(&self.url).map_err(|error| FormError::InvalidUrl {
            value: self.url.clone(),
            reason: error.to_string(),
        })?;

        let ticket = self.result.begin();
        tracing::debug!(?ticket, %business_id, "audit submitted");
        Ok(AuditSubmission {
            ticket,
            request: AuditRequest {
                business_id,
                url: self.url.clone(),
            },
        })
    }

    /// Apply the backend's answer. Returns `false` if a newer audit was
    /// submitted in the meantime and this answer was dropped.
    pub fn resolve_audit(
        &mut self,
        ticket: Ticket,
        response: Result<AuditResponse, ClientError>,
    ) -> bool {
        let outcome = response.map_err(|error| {
            tracing::warn!(%error, "audit request failed");
            Failure::new(error.kind(), AUDIT_FAILED)
        });
        self.result.settle(ticket, outcome)
    }

    /// Submit the form and wait for the answer. One request, no retry.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] if the form does not validate.
    pub async fn run_audit<A: ComplianceApi>(&mut self, api: &A) -> Result<(), FormError> {
        let submission = self.begin_audit()?;
        let response = api.run_audit(&submission.request).await;
        self.resolve_audit(submission.ticket, response);
        Ok(())
    }

    #[must_use]
    pub const fn result(&self) -> Option<&Result<AuditResponse, Failure>> {
        self.result.latest()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.result.phase()
    }

    #[must_use]
    pub fn view(&self) -> View {
        let mut view = View::empty();
        if self.result.is_pending() {
            view.push(Element::text("Submitting...", Tone::Muted));
        }
        match self.result.latest() {
            None => {}
            Some(Err(failure)) => view.push(Element::text(failure.message, Tone::Danger)),
            Some(Ok(response)) => {
                view.push(Element::text(&response.message, Tone::Success));
                if let Some(issues) = &response.issues {
                    view.push(Element::List {
                        items: issues.clone(),
                    });
                }
            }
        }
        view
    }

    #[must_use]
    pub fn snapshot(&self) -> Value {
        json!({
            "business_id": self.business_id,
            "url": self.url,
            "phase": self.phase(),
            "result": self.result.latest_view(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fake::{FakeApi, decode_error, server_error};
    use pretty_assertions::assert_eq;
    use sg_core::enums::FailureKind;

    fn filled() -> AuditPage {
        let mut page = AuditPage::new();
        page.set_business_id("b1");
        page.set_url("https://example.com");
        page
    }

    fn response(message: &str, issues: Option<Vec<&str>>) -> AuditResponse {
        AuditResponse {
            message: message.into(),
            issues: issues.map(|items| items.into_iter().map(String::from).collect()),
        }
    }

    #[test]
    fn initial_state_renders_nothing() {
        let page = AuditPage::new();
        assert!(page.result().is_none());
        assert_eq!(page.phase(), Phase::Idle);
        assert!(page.view().is_empty());
    }

    #[tokio::test]
    async fn success_shows_message_and_issues_in_order() {
        let api = FakeApi::default();
        api.audits
            .lock()
            .unwrap()
            .push_back(Ok(response("Audit complete", Some(vec!["b issue", "a issue"]))));

        let mut page = filled();
        page.run_audit(&api).await.unwrap();

        assert_eq!(api.calls(), vec!["audit b1 https://example.com"]);
        assert_eq!(page.phase(), Phase::Succeeded);
        assert_eq!(
            page.view().elements,
            vec![
                Element::text("Audit complete", Tone::Success),
                Element::List {
                    items: vec!["b issue".into(), "a issue".into()]
                },
            ]
        );
    }

    #[tokio::test]
    async fn missing_issues_renders_no_list() {
        let api = FakeApi::default();
        api.audits
            .lock()
            .unwrap()
            .push_back(Ok(response("Audit triggered successfully", None)));

        let mut page = filled();
        page.run_audit(&api).await.unwrap();
        assert_eq!(
            page.view().elements,
            vec![Element::text("Audit triggered successfully", Tone::Success)]
        );
    }

    #[tokio::test]
    async fn every_failure_collapses_to_one_message() {
        for (error, kind) in [
            (server_error(500), FailureKind::Server { status: 500 }),
            (decode_error(), FailureKind::Decode),
        ] {
            let api = FakeApi::default();
            api.audits.lock().unwrap().push_back(Err(error));

            let mut page = filled();
            page.run_audit(&api).await.unwrap();

            let failure = page.result().unwrap().as_ref().unwrap_err();
            assert_eq!(failure.message, AUDIT_FAILED);
            assert_eq!(failure.kind, kind);
            assert_eq!(
                page.view().elements,
                vec![Element::text("Audit failed", Tone::Danger)]
            );
        }
    }

    #[test]
    fn empty_inputs_are_refused_without_a_ticket() {
        let mut page = AuditPage::new();
        page.set_url("https://example.com");
        assert_eq!(
            page.begin_audit().unwrap_err(),
            FormError::MissingField {
                field: "business_id"
            }
        );

        page.set_business_id("b1");
        page.set_url("");
        assert_eq!(
            page.begin_audit().unwrap_err(),
            FormError::MissingField { field: "url" }
        );
        assert_eq!(page.phase(), Phase::Idle);
    }

    #[test]
    fn relative_url_is_refused() {
        let mut page = filled();
        page.set_url("example.com/privacy");
        assert!(matches!(
            page.begin_audit().unwrap_err(),
            FormError::InvalidUrl { .. }
        ));
    }

    #[test]
    fn latest_submit_wins_over_late_earlier_response() {
        let mut page = filled();
        let first = page.begin_audit().unwrap();
        page.set_url("https://example.org");
        let second = page.begin_audit().unwrap();
        assert_eq!(page.phase(), Phase::Pending);

        assert!(page.resolve_audit(second.ticket, Ok(response("second", None))));
        assert!(!page.resolve_audit(first.ticket, Err(server_error(502))));

        assert_eq!(page.result().unwrap().as_ref().unwrap().message, "second");
        assert_eq!(page.phase(), Phase::Succeeded);
    }

    #[test]
    fn pending_keeps_previous_result_visible() {
        let mut page = filled();
        let first = page.begin_audit().unwrap();
        page.resolve_audit(first.ticket, Ok(response("done", None)));
        let _second = page.begin_audit().unwrap();

        assert_eq!(
            page.view().elements,
            vec![
                Element::text("Submitting...", Tone::Muted),
                Element::text("done", Tone::Success),
            ]
        );
    }

    #[test]
    fn snapshot_reports_failure_cause() {
        let mut page = filled();
        let submission = page.begin_audit().unwrap();
        page.resolve_audit(submission.ticket, Err(server_error(500)));
        assert_eq!(
            page.snapshot(),
            json!({
                "business_id": "b1",
                "url": "https://example.com",
                "phase": "failed",
                "result": {"error": "Audit failed", "cause": {"kind": "server", "status": 500}}
            })
        );
    }
}
