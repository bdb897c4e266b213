//! Validation result model

use crate::model::{lenient, Model};
use crate::types::ValidationMessage;
use serde::{Deserialize, Serialize};

/// The outcome of a validation request.
///
/// Wraps the ordered `messages` array the validation endpoints return.
/// Validity is decided by error-severity messages only; warnings and
/// informational findings never fail a validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationResult {
    /// All findings, in the order the API reported them.
    #[serde(deserialize_with = "lenient::seq")]
    pub messages: Vec<ValidationMessage>,
}

impl Model for ValidationResult {}

impl ValidationResult {
    /// Whether validation passed (no error-severity findings).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Whether any finding has error severity.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(ValidationMessage::is_error)
    }

    /// Whether any finding has warning severity.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(ValidationMessage::is_warning)
    }

    /// Error-severity findings only.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationMessage> {
        self.messages.iter().filter(|m| m.is_error())
    }

    /// Warning-severity findings only.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationMessage> {
        self.messages.iter().filter(|m| m.is_warning())
    }

    /// Informational findings only.
    pub fn info(&self) -> impl Iterator<Item = &ValidationMessage> {
        self.messages.iter().filter(|m| m.is_info())
    }

    /// Number of error-severity findings.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Number of warning-severity findings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Error message texts, in report order.
    #[must_use]
    pub fn error_messages(&self) -> Vec<&str> {
        self.errors().map(|m| m.message.as_str()).collect()
    }

    /// Warning message texts, in report order.
    #[must_use]
    pub fn warning_messages(&self) -> Vec<&str> {
        self.warnings().map(|m| m.message.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn splits_errors_and_warnings() {
        let result = ValidationResult::from_value(json!({
            "messages": [
                {"message": "bad", "severity": "error"},
                {"message": "hint", "severity": "warning"}
            ]
        }));

        assert!(!result.is_valid());
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 1);
        assert_eq!(result.error_messages(), vec!["bad"]);
        assert_eq!(result.warning_messages(), vec!["hint"]);
    }

    #[test]
    fn warnings_do_not_fail_validation() {
        let result = ValidationResult::from_value(json!({
            "messages": [
                {"message": "hint", "severity": "warning"},
                {"message": "fyi", "severity": "info"}
            ]
        }));

        assert!(result.is_valid());
        assert!(result.has_warnings());
        assert_eq!(result.info().count(), 1);
    }

    #[test]
    fn no_messages_is_valid() {
        let result = ValidationResult::from_value(json!({"messages": []}));
        assert!(result.is_valid());

        let result = ValidationResult::from_value(json!({}));
        assert!(result.is_valid());
    }
}
