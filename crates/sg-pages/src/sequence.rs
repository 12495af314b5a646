//! Request sequencing and per-operation result tracking.
//!
//! Every submit takes a [`Ticket`]. Only the response for the newest ticket
//! is applied; a response for an older ticket arrives after the user has
//! already asked again and is dropped. This keeps "the result of the latest
//! action" on screen no matter in which order responses resolve.

use serde::Serialize;
use sg_core::enums::FailureKind;

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Monotonic ticket source for one operation.
#[derive(Debug, Default)]
pub struct Sequencer {
    issued: u64,
    settled: u64,
}

impl Sequencer {
    pub const fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Mark `ticket` settled if it is the newest one. Returns `false` for a
    /// stale ticket, which the caller must then ignore.
    pub const fn settle(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.issued {
            return false;
        }
        self.settled = ticket.0;
        true
    }

    /// The newest request has not been answered yet.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.settled < self.issued
    }
}

/// Lifecycle of a page operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// A failed operation: the one string the user sees, plus why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Failure {
    #[serde(rename = "error")]
    pub message: &'static str,
    #[serde(rename = "cause")]
    pub kind: FailureKind,
}

impl Failure {
    #[must_use]
    pub const fn new(kind: FailureKind, message: &'static str) -> Self {
        Self { message, kind }
    }
}

pub type Outcome<T> = Result<T, Failure>;

/// Serializable view of the last applied outcome.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum OutcomeView<'a, T> {
    Success(&'a T),
    Failure(&'a Failure),
}

/// Sequencer plus the last applied outcome of one operation.
#[derive(Debug)]
pub struct Tracked<T> {
    sequencer: Sequencer,
    latest: Option<Outcome<T>>,
}

impl<T> Default for Tracked<T> {
    fn default() -> Self {
        Self {
            sequencer: Sequencer::default(),
            latest: None,
        }
    }
}

impl<T> Tracked<T> {
    pub const fn begin(&mut self) -> Ticket {
        self.sequencer.issue()
    }

    /// Apply `outcome` if `ticket` is current. Returns whether it was applied.
    pub fn settle(&mut self, ticket: Ticket, outcome: Outcome<T>) -> bool {
        if !self.sequencer.settle(ticket) {
            tracing::debug!(?ticket, "dropping stale response");
            return false;
        }
        self.latest = Some(outcome);
        true
    }

    #[must_use]
    pub const fn latest(&self) -> Option<&Outcome<T>> {
        self.latest.as_ref()
    }

    #[must_use]
    pub fn latest_view(&self) -> Option<OutcomeView<'_, T>> {
        self.latest.as_ref().map(|outcome| match outcome {
            Ok(value) => OutcomeView::Success(value),
            Err(failure) => OutcomeView::Failure(failure),
        })
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.sequencer.is_pending()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.sequencer.is_pending() {
            return Phase::Pending;
        }
        match &self.latest {
            None => Phase::Idle,
            Some(Ok(_)) => Phase::Succeeded,
            Some(Err(_)) => Phase::Failed,
        }
    }
}
