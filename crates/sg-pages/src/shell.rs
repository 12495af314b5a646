//! Root shell: owns the router and the mounted page.
//!
//! Navigation happens in two steps. [`Shell::begin_navigation`] resolves the
//! path and shows the loading placeholder; [`Shell::mount`] replaces the
//! placeholder with the page in its initial state. Mounting a new page drops
//! the previous page's state.

use serde::Serialize;
use serde_json::{Value, json};
use sg_config::RefetchPolicy;
use sg_core::enums::Tone;

use crate::pages::{AuditPage, ChecklistPage, ConsentPage};
use crate::router::Route;
use crate::sequence::Phase;
use crate::view::{Element, View};

/// Placeholder shown while a page is being mounted.
pub const LOADING: &str = "Loading...";

/// The page currently mounted under the shell.
#[derive(Debug)]
pub enum ActivePage {
    Home,
    Audit(AuditPage),
    Consent(ConsentPage),
    Checklist(ChecklistPage),
    Unmatched,
}

impl ActivePage {
    fn mount(route: Route, policy: RefetchPolicy) -> Self {
        match route {
            Route::Home => Self::Home,
            Route::Audit => Self::Audit(AuditPage::new()),
            Route::Consent => Self::Consent(ConsentPage::new()),
            Route::Checklist => Self::Checklist(ChecklistPage::new(policy)),
            Route::Unmatched => Self::Unmatched,
        }
    }

    #[must_use]
    pub const fn route(&self) -> Route {
        match self {
            Self::Home => Route::Home,
            Self::Audit(_) => Route::Audit,
            Self::Consent(_) => Route::Consent,
            Self::Checklist(_) => Route::Checklist,
            Self::Unmatched => Route::Unmatched,
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Audit(_) => "Website Audit",
            Self::Consent(_) => "Consent Template",
            Self::Checklist(_) => "Compliance Checklist",
            Self::Unmatched => "",
        }
    }

    /// Phase of the page's primary operation. Static pages are always idle.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Audit(page) => page.phase(),
            Self::Consent(page) => page.phase(),
            Self::Checklist(page) => page.phase(),
            Self::Home | Self::Unmatched => Phase::Idle,
        }
    }

    #[must_use]
    pub fn view(&self) -> View {
        match self {
            Self::Home => View {
                elements: vec![Element::text("Home", Tone::Plain)],
            },
            Self::Audit(page) => page.view(),
            Self::Consent(page) => page.view(),
            Self::Checklist(page) => page.view(),
            Self::Unmatched => View::empty(),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Value {
        let state = match self {
            Self::Audit(page) => page.snapshot(),
            Self::Consent(page) => page.snapshot(),
            Self::Checklist(page) => page.snapshot(),
            Self::Home | Self::Unmatched => Value::Null,
        };
        json!({ "route": self.route(), "state": state })
    }
}

#[derive(Debug)]
enum Mount {
    Loading(Route),
    Ready(ActivePage),
}

/// What the shell is showing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShellStatus {
    Loading,
    Ready,
}

#[derive(Debug)]
pub struct Shell {
    mount: Mount,
    checklist_policy: RefetchPolicy,
}

impl Shell {
    /// A shell showing the home placeholder.
    #[must_use]
    pub const fn new(checklist_policy: RefetchPolicy) -> Self {
        Self {
            mount: Mount::Ready(ActivePage::Home),
            checklist_policy,
        }
    }

    #[must_use]
    pub const fn status(&self) -> ShellStatus {
        match self.mount {
            Mount::Loading(_) => ShellStatus::Loading,
            Mount::Ready(_) => ShellStatus::Ready,
        }
    }

    #[must_use]
    pub const fn route(&self) -> Route {
        match &self.mount {
            Mount::Loading(route) => *route,
            Mount::Ready(page) => page.route(),
        }
    }

    /// Resolve `path` and show the loading placeholder.
    ///
    /// Returns `false` without changing anything when `path` resolves to the
    /// page already mounted.
    pub fn begin_navigation(&mut self, path: &str) -> bool {
        let route = Route::resolve(path);
        if matches!(&self.mount, Mount::Ready(page) if page.route() == route) {
            return false;
        }
        tracing::debug!(path, ?route, "navigating");
        self.mount = Mount::Loading(route);
        true
    }

    /// Mount the page a pending navigation resolved to.
    pub fn mount(&mut self) {
        if let Mount::Loading(route) = self.mount {
            self.mount = Mount::Ready(ActivePage::mount(route, self.checklist_policy));
        }
    }

    /// Navigate to `path` and mount its page.
    pub fn navigate(&mut self, path: &str) {
        if self.begin_navigation(path) {
            self.mount();
        }
    }

    /// The mounted page, `None` while loading.
    #[must_use]
    pub const fn page(&self) -> Option<&ActivePage> {
        match &self.mount {
            Mount::Ready(page) => Some(page),
            Mount::Loading(_) => None,
        }
    }

    pub const fn page_mut(&mut self) -> Option<&mut ActivePage> {
        match &mut self.mount {
            Mount::Ready(page) => Some(page),
            Mount::Loading(_) => None,
        }
    }

    #[must_use]
    pub fn view(&self) -> View {
        match &self.mount {
            Mount::Loading(_) => View {
                elements: vec![Element::text(LOADING, Tone::Muted)],
            },
            Mount::Ready(page) => page.view(),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Value {
        match &self.mount {
            Mount::Loading(route) => json!({ "route": route, "status": self.status() }),
            Mount::Ready(page) => page.snapshot(),
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(RefetchPolicy::default())
    }
}
