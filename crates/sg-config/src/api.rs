//! Backend API connection settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default backend origin (the Flask app's bind address).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    "skygate/0.1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Origin every `/api/*` path is joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds. Unset means requests may wait forever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Base URL without a trailing slash, ready for `format!("{base}/api/...")`.
    #[must_use]
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Check that the base URL is an absolute http(s) origin and the timeout
    /// is non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rest = self
            .base_url
            .strip_prefix("http://")
            .or_else(|| self.base_url.strip_prefix("https://"))
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{}' must start with http:// or https://", self.base_url),
            })?;

        let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if let Some(problem) = authority_problem(authority) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{}' {problem}", self.base_url),
            });
        }

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

/// Why `authority` (`host[:port]`) cannot be dialled, if it cannot.
fn authority_problem(authority: &str) -> Option<&'static str> {
    if authority.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Some("contains whitespace");
    }

    let (host, port) = if let Some(bracketed) = authority.strip_prefix('[') {
        let Some((host, after)) = bracketed.split_once(']') else {
            return Some("has an unclosed IPv6 host");
        };
        match after {
            "" => (host, None),
            _ => match after.strip_prefix(':') {
                Some(port) => (host, Some(port)),
                None => return Some("has junk after the IPv6 host"),
            },
        }
    } else {
        match authority.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (authority, None),
        }
    };

    if host.is_empty() {
        return Some("has no host");
    }
    if port.is_some_and(|port| port.parse::<u16>().is_err()) {
        return Some("has an invalid port");
    }
    None
}
