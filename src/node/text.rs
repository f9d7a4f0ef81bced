use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a localized UI message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiTextType {
    #[default]
    Info,
    Error,
    Success,
    /// Any message kind the service adds later. The raw value is preserved.
    #[serde(untagged)]
    Other(String),
}

/// A piece of already-localized text delivered by the identity service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiText {
    /// Stable message id, useful for custom translations.
    #[serde(default)]
    pub id: i64,
    pub text: String,
    #[serde(default, rename = "type")]
    pub text_type: UiTextType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

impl UiText {
    /// Creates an informational text with the given id.
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            text_type: UiTextType::Info,
            context: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for UiText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
