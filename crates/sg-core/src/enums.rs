//! Priority buckets, render tones, and failure kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Tone
// ---------------------------------------------------------------------------

/// Semantic color of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Red.
    Danger,
    /// Yellow.
    Warning,
    /// Green.
    Success,
    /// Dimmed secondary text.
    Muted,
    /// No styling.
    Plain,
}

impl Tone {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Muted => "muted",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Priority bucket of a checklist task.
///
/// Matching is exact and case-sensitive: only `high` and `medium` get their
/// own bucket. Every other value, including a missing one, lands in
/// [`Priority::Other`] and keeps its original text. A number keeps its JSON
/// text; any other non-string reads as empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<serde_json::Value>", into = "String")]
pub enum Priority {
    High,
    Medium,
    Other(String),
}

impl Priority {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Other(raw) => raw,
        }
    }

    /// Badge tone for this bucket: high is red, medium yellow, the rest green.
    #[must_use]
    pub const fn tone(&self) -> Tone {
        match self {
            Self::High => Tone::Danger,
            Self::Medium => Tone::Warning,
            Self::Other(_) => Tone::Success,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<Option<String>> for Priority {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref() {
            Some("high") => Self::High,
            Some("medium") => Self::Medium,
            _ => Self::Other(raw.unwrap_or_default()),
        }
    }
}

impl From<Option<serde_json::Value>> for Priority {
    fn from(raw: Option<serde_json::Value>) -> Self {
        match raw {
            Some(serde_json::Value::String(text)) => Self::from(Some(text)),
            Some(serde_json::Value::Number(number)) => Self::Other(number.to_string()),
            _ => Self::default(),
        }
    }
}

impl From<&str> for Priority {
    fn from(raw: &str) -> Self {
        Self::from(Some(raw.to_string()))
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FailureKind
// ---------------------------------------------------------------------------

/// Why a page operation failed.
///
/// Pages render one fixed string per operation regardless of kind; the kind
/// is kept for logs, tests, and machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureKind {
    /// Connection, timeout, or body read failure.
    Network,
    /// The backend answered with a non-success status.
    Server { status: u16 },
    /// A success body did not have the expected shape.
    Decode,
    /// Client-side validation rejected the input before sending.
    InvalidInput,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => f.write_str("network"),
            Self::Server { status } => write!(f, "server ({status})"),
            Self::Decode => f.write_str("decode"),
            Self::InvalidInput => f.write_str("invalid_input"),
        }
    }
}
