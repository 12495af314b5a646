//! Compliance checklist page.
//!
//! The task list reloads whenever the business id changes to a new non-empty
//! value (or, under [`RefetchPolicy::OnConfirm`], when it is confirmed) and
//! after every successful add. A failed reload silently empties the list.

use serde_json::{Value, json};
use sg_client::{ClientError, ComplianceApi};
use sg_config::RefetchPolicy;
use sg_core::BusinessId;
use sg_core::entities::{ChecklistAddRequest, ChecklistAddResponse, ChecklistTask};
use sg_core::enums::Tone;

use super::{require_business_id, require_field};
use crate::error::FormError;
use crate::sequence::{Failure, Phase, Sequencer, Ticket, Tracked};
use crate::view::{Element, TaskRow, View};

/// Shown for every failed add.
pub const ADD_FAILED: &str = "Task addition failed";

/// A task-list reload ready to send.
#[derive(Debug, Clone)]
pub struct FetchSubmission {
    pub ticket: Ticket,
    pub business_id: BusinessId,
}

/// A task addition ready to send.
#[derive(Debug, Clone)]
pub struct AddSubmission {
    pub ticket: Ticket,
    pub request: ChecklistAddRequest,
}

#[derive(Debug, Default)]
pub struct ChecklistPage {
    business_id: String,
    task: String,
    tasks: Vec<ChecklistTask>,
    fetches: Sequencer,
    last_fetched: Option<String>,
    added: Tracked<ChecklistAddResponse>,
    policy: RefetchPolicy,
}

impl ChecklistPage {
    #[must_use]
    pub fn new(policy: RefetchPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn policy(&self) -> RefetchPolicy {
        self.policy
    }

    #[must_use]
    pub fn business_id(&self) -> &str {
        &self.business_id
    }

    #[must_use]
    pub fn task_input(&self) -> &str {
        &self.task
    }

    #[must_use]
    pub fn tasks(&self) -> &[ChecklistTask] {
        &self.tasks
    }

    pub fn set_task(&mut self, value: impl Into<String>) {
        self.task = value.into();
    }

    /// Update the business id input.
    ///
    /// Under [`RefetchPolicy::OnChange`] a change to a different non-empty
    /// value yields a reload, one per change. Re-entering the same value
    /// yields nothing.
    pub fn set_business_id(&mut self, value: impl Into<String>) -> Option<FetchSubmission> {
        let value = value.into();
        let changed = value != self.business_id;
        self.business_id = value;
        if changed && self.policy == RefetchPolicy::OnChange {
            return self.begin_fetch();
        }
        None
    }

    /// The business id input lost focus.
    ///
    /// Under [`RefetchPolicy::OnConfirm`] this yields a reload if the id
    /// differs from the one last loaded.
    pub fn confirm_business_id(&mut self) -> Option<FetchSubmission> {
        if self.policy != RefetchPolicy::OnConfirm {
            return None;
        }
        if self.last_fetched.as_deref() == Some(self.business_id.as_str()) {
            return None;
        }
        self.begin_fetch()
    }

    /// Take a ticket for a task-list reload. `None` while the business id is
    /// empty.
    pub fn begin_fetch(&mut self) -> Option<FetchSubmission> {
        let business_id = BusinessId::parse(self.business_id.as_str()).ok()?;
        let ticket = self.fetches.issue();
        self.last_fetched = Some(self.business_id.clone());
        tracing::debug!(?ticket, %business_id, "task list reload issued");
        Some(FetchSubmission {
            ticket,
            business_id,
        })
    }

    /// Apply a reload. The list is replaced wholesale; a failure empties it
    /// without surfacing an error. Returns `false` for a stale ticket.
    pub fn resolve_fetch(
        &mut self,
        ticket: Ticket,
        response: Result<Vec<ChecklistTask>, ClientError>,
    ) -> bool {
        if !self.fetches.settle(ticket) {
            tracing::debug!(?ticket, "dropping stale task list");
            return false;
        }
        self.tasks = response.unwrap_or_else(|error| {
            tracing::warn!(%error, kind = %error.kind(), "task list reload failed; showing empty list");
            Vec::new()
        });
        true
    }

    /// Validate the add form and take a ticket.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] if the business id or task text is empty.
    pub fn begin_add(&mut self) -> Result<AddSubmission, FormError> {
        let business_id = require_business_id(&self.business_id)?;
        require_field(&self.task, "task")?;

        let ticket = self.added.begin();
        tracing::debug!(?ticket, %business_id, "task addition submitted");
        Ok(AddSubmission {
            ticket,
            request: ChecklistAddRequest {
                business_id,
                task: self.task.clone(),
            },
        })
    }

    /// Apply the answer to an add.
    ///
    /// Every success yields a reload, since the backend now holds the task
    /// even when a newer add has superseded it on screen. Only a current
    /// success clears the task input. Failures leave the list alone.
    pub fn resolve_add(
        &mut self,
        ticket: Ticket,
        response: Result<ChecklistAddResponse, ClientError>,
    ) -> Option<FetchSubmission> {
        match response {
            Ok(added) => {
                if self.added.settle(ticket, Ok(added)) {
                    self.task.clear();
                }
                self.begin_fetch()
            }
            Err(error) => {
                tracing::warn!(%error, "task addition failed");
                self.added
                    .settle(ticket, Err(Failure::new(error.kind(), ADD_FAILED)));
                None
            }
        }
    }

    /// Reload the task list now, if a business id is set.
    pub async fn fetch_tasks<A: ComplianceApi>(&mut self, api: &A) {
        if let Some(fetch) = self.begin_fetch() {
            self.run_fetch(api, fetch).await;
        }
    }

    /// Update the business id and run any reload it triggers.
    pub async fn change_business_id<A: ComplianceApi>(
        &mut self,
        api: &A,
        value: impl Into<String>,
    ) {
        if let Some(fetch) = self.set_business_id(value) {
            self.run_fetch(api, fetch).await;
        }
    }

    /// Confirm the business id and run any reload it triggers.
    pub async fn confirm<A: ComplianceApi>(&mut self, api: &A) {
        if let Some(fetch) = self.confirm_business_id() {
            self.run_fetch(api, fetch).await;
        }
    }

    /// Submit the add form, then reload on success.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] if the form does not validate.
    pub async fn add_task<A: ComplianceApi>(&mut self, api: &A) -> Result<(), FormError> {
        let submission = self.begin_add()?;
        let response = api.add_task(&submission.request).await;
        if let Some(fetch) = self.resolve_add(submission.ticket, response) {
            self.run_fetch(api, fetch).await;
        }
        Ok(())
    }

    async fn run_fetch<A: ComplianceApi>(&mut self, api: &A, fetch: FetchSubmission) {
        let response = api.fetch_tasks(&fetch.business_id).await;
        self.resolve_fetch(fetch.ticket, response);
    }

    #[must_use]
    pub const fn add_result(&self) -> Option<&Result<ChecklistAddResponse, Failure>> {
        self.added.latest()
    }

    /// Phase of the add operation.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.added.phase()
    }

    #[must_use]
    pub const fn is_refreshing(&self) -> bool {
        self.fetches.is_pending()
    }

    #[must_use]
    pub fn view(&self) -> View {
        let mut view = View::empty();
        if self.added.is_pending() {
            view.push(Element::text("Submitting...", Tone::Muted));
        }
        match self.added.latest() {
            None => {}
            Some(Err(failure)) => view.push(Element::text(failure.message, Tone::Danger)),
            Some(Ok(added)) => view.push(Element::text(
                format!(
                    "{} (Priority: {})",
                    added.message,
                    added.priority.as_deref().unwrap_or_default()
                ),
                Tone::Success,
            )),
        }

        view.push(Element::Heading {
            text: "Tasks".into(),
        });
        if self.fetches.is_pending() {
            view.push(Element::text("Refreshing tasks...", Tone::Muted));
        }
        view.push(Element::Tasks {
            rows: self
                .tasks
                .iter()
                .map(|task| TaskRow {
                    task: task.task.clone(),
                    badge: task.badge(),
                    tone: task.priority.tone(),
                })
                .collect(),
        });
        view
    }

    #[must_use]
    pub fn snapshot(&self) -> Value {
        json!({
            "business_id": self.business_id,
            "task": self.task,
            "phase": self.phase(),
            "result": self.added.latest_view(),
            "tasks": self.tasks,
        })
    }
}
