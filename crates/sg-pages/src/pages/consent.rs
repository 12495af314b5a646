//! Consent template page.

use serde_json::{Value, json};
use sg_client::{ClientError, ComplianceApi};
use sg_core::entities::{ConsentRequest, ConsentResponse, ConsentTemplate};
use sg_core::enums::{FailureKind, Tone};

use super::{require_business_id, require_field};
use crate::error::FormError;
use crate::sequence::{Failure, Phase, Ticket, Tracked};
use crate::view::{Element, View};

/// Shown for every consent failure, malformed template text included.
pub const CONSENT_FAILED: &str = "Consent save failed";

#[derive(Debug, Clone)]
pub struct ConsentSubmission {
    pub ticket: Ticket,
    pub request: ConsentRequest,
}

#[derive(Debug, Default)]
pub struct ConsentPage {
    business_id: String,
    template: ConsentTemplate,
    result: Tracked<ConsentResponse>,
}

impl ConsentPage {
    /// A fresh page with the editor prefilled with the example template.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_business_id(&mut self, value: impl Into<String>) {
        self.business_id = value.into();
    }

    pub fn set_template_text(&mut self, text: impl Into<String>) {
        self.template = ConsentTemplate::new(text);
    }

    #[must_use]
    pub fn business_id(&self) -> &str {
        &self.business_id
    }

    #[must_use]
    pub fn template_text(&self) -> &str {
        self.template.text()
    }

    /// Validate the form, parse the template, and take a ticket.
    ///
    /// Malformed template text is not a form error: it settles the page as
    /// failed right away and yields `Ok(None)`, so nothing is sent.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] if the business id or template text is empty.
    pub fn begin_save(&mut self) -> Result<Option<ConsentSubmission>, FormError> {
        let business_id = require_business_id(&self.business_id)?;
        require_field(self.template.text(), "template_json")?;

        let ticket = self.result.begin();
        match self.template.parse() {
            Ok(template_json) => {
                tracing::debug!(?ticket, %business_id, "consent template submitted");
                Ok(Some(ConsentSubmission {
                    ticket,
                    request: ConsentRequest {
                        business_id,
                        template_json,
                    },
                }))
            }
            Err(error) => {
                tracing::warn!(%error, "consent template is not valid JSON");
                self.result.settle(
                    ticket,
                    Err(Failure::new(FailureKind::InvalidInput, CONSENT_FAILED)),
                );
                Ok(None)
            }
        }
    }

    /// Apply the backend's answer. Returns `false` for a stale ticket.
    pub fn resolve_save(
        &mut self,
        ticket: Ticket,
        response: Result<ConsentResponse, ClientError>,
    ) -> bool {
        let outcome = response.map_err(|error| {
            tracing::warn!(%error, "consent request failed");
            Failure::new(error.kind(), CONSENT_FAILED)
        });
        self.result.settle(ticket, outcome)
    }

    /// Submit the form and wait for the answer.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] if the form does not validate.
    pub async fn save_template<A: ComplianceApi>(&mut self, api: &A) -> Result<(), FormError> {
        if let Some(submission) = self.begin_save()? {
            let response = api.save_consent(&submission.request).await;
            self.resolve_save(submission.ticket, response);
        }
        Ok(())
    }

    #[must_use]
    pub const fn result(&self) -> Option<&Result<ConsentResponse, Failure>> {
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
                if let Some(suggestion) = response.suggestion() {
                    let text = serde_json::to_string_pretty(suggestion)
                        .unwrap_or_else(|_| suggestion.to_string());
                    view.push(Element::Preformatted { text });
                }
            }
        }
        view
    }

    #[must_use]
    pub fn snapshot(&self) -> Value {
        json!({
            "business_id": self.business_id,
            "template_json": self.template.text(),
            "phase": self.phase(),
            "result": self.result.latest_view(),
        })
    }
}
