//! Structured validation findings returned by the validation endpoints

use crate::model::{lenient, Model};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Severity of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks acceptance of the submitted data.
    #[default]
    Error,
    /// Accepted, but should be fixed.
    Warning,
    /// Informational only.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        })
    }
}

/// A single validation finding from the API.
///
/// Immutable after hydration; built from entries of a `messages` array.
/// An unknown or missing `severity` is treated as [`Severity::Error`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationMessage {
    /// Human-readable message text.
    #[serde(deserialize_with = "lenient::or_default")]
    pub message: String,

    /// Severity of the finding.
    #[serde(deserialize_with = "lenient::or_default")]
    pub severity: Severity,

    /// JSON-pointer-like path to the offending field, when known.
    #[serde(deserialize_with = "lenient::opt")]
    pub context_path: Option<String>,

    /// Machine-readable code, when the API provides one.
    #[serde(deserialize_with = "lenient::opt")]
    pub code: Option<String>,

    /// Free-form context data attached to the finding.
    #[serde(deserialize_with = "lenient::or_default")]
    pub context: Map<String, Value>,
}

impl Model for ValidationMessage {}

impl ValidationMessage {
    /// Create a message with the given text and severity.
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            ..Self::default()
        }
    }

    /// Whether this finding blocks acceptance.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Whether this finding is a warning.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    /// Whether this finding is informational.
    #[must_use]
    pub fn is_info(&self) -> bool {
        self.severity == Severity::Info
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.severity.to_string().to_uppercase(),
            self.message
        )?;
        if let Some(path) = &self.context_path {
            write!(f, " (at {path})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hydrates_full_message() {
        let msg = ValidationMessage::from_value(json!({
            "message": "title is required",
            "severity": "warning",
            "contextPath": "/programDescriptions/title",
            "code": "required",
            "context": {"field": "title"}
        }));
        assert_eq!(msg.message, "title is required");
        assert!(msg.is_warning());
        assert_eq!(msg.context_path.as_deref(), Some("/programDescriptions/title"));
        assert_eq!(msg.code.as_deref(), Some("required"));
        assert_eq!(msg.context.get("field"), Some(&json!("title")));
    }

    #[test]
    fn severity_defaults_to_error() {
        let msg = ValidationMessage::from_value(json!({"message": "bad"}));
        assert!(msg.is_error());

        let msg = ValidationMessage::from_value(json!({
            "message": "bad",
            "severity": "catastrophic"
        }));
        assert!(msg.is_error());
    }

    #[test]
    fn display_includes_severity_and_path() {
        let msg = ValidationMessage::from_value(json!({
            "message": "title is required",
            "severity": "error",
            "contextPath": "/title"
        }));
        assert_eq!(msg.to_string(), "[ERROR] title is required (at /title)");

        let bare = ValidationMessage::new("hint", Severity::Info);
        assert_eq!(bare.to_string(), "[INFO] hint");
    }
}
