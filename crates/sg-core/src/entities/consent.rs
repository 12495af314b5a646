use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoreError;
use crate::ids::BusinessId;

/// Text the consent editor starts with.
pub const DEFAULT_TEMPLATE_TEXT: &str = r#"{"template": "example"}"#;

/// A consent template as edited: raw text that must parse as JSON before
/// it can be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsentTemplate {
    text: String,
}

impl ConsentTemplate {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parse the edited text into a JSON document.
    ///
    /// Any JSON value is accepted, not only objects.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Json`] if the text is not valid JSON.
    pub fn parse(&self) -> Result<Value, CoreError> {
        Ok(serde_json::from_str(&self.text)?)
    }
}

impl Default for ConsentTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE_TEXT)
    }
}

/// Body of `POST /api/consent`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConsentRequest {
    pub business_id: BusinessId,
    pub template_json: Value,
}

/// Success body of `POST /api/consent`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConsentResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_template: Option<Value>,
}

impl ConsentResponse {
    /// The suggested template, if one worth showing was returned.
    ///
    /// JSON `null`, `false`, `0`, and `""` count as absent.
    #[must_use]
    pub fn suggestion(&self) -> Option<&Value> {
        self.suggested_template.as_ref().filter(|value| match value {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
            Value::String(text) => !text.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        })
    }
}
