//! Path to page routing.
//!
//! Matching is case-insensitive and ignores a trailing slash, a query
//! string, and a fragment. Anything else is [`Route::Unmatched`].

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Audit,
    Consent,
    Checklist,
    Unmatched,
}

impl Route {
    /// Every routable page, in navigation order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Audit, Self::Consent, Self::Checklist];

    /// Resolve a path to a route.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.strip_suffix('/').unwrap_or(path);

        match trimmed.to_ascii_lowercase().as_str() {
            "" => Self::Home,
            "/audit" => Self::Audit,
            "/consent" => Self::Consent,
            "/checklist" => Self::Checklist,
            _ => Self::Unmatched,
        }
    }

    /// Canonical path, `None` for [`Route::Unmatched`].
    #[must_use]
    pub const fn path(self) -> Option<&'static str> {
        match self {
            Self::Home => Some("/"),
            Self::Audit => Some("/audit"),
            Self::Consent => Some("/consent"),
            Self::Checklist => Some("/checklist"),
            Self::Unmatched => None,
        }
    }
}
