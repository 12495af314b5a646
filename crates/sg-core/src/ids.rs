//! Business identifiers.
//!
//! A business id is opaque: the client never interprets it beyond requiring
//! it to be non-empty. Whitespace is kept verbatim.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Caller-supplied key identifying the business a workflow operates on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct BusinessId(String);

impl BusinessId {
    /// Validate raw input as a business id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] if `raw` is empty.
    pub fn parse(raw: impl Into<String>) -> Result<Self, CoreError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(CoreError::MissingField {
                field: "business_id",
            });
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BusinessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BusinessId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_rejected() {
        let err = BusinessId::parse("").unwrap_err();
        assert!(matches!(
            err,
            CoreError::MissingField {
                field: "business_id"
            }
        ));
    }

    #[test]
    fn whitespace_is_kept_verbatim() {
        let id = BusinessId::parse(" b1 ").unwrap();
        assert_eq!(id.as_str(), " b1 ");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = BusinessId::parse("acme").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"acme\"");
    }
}
