//! Webhook model

use crate::model::{lenient, Model};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A webhook subscription for catalog and program change notifications.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Webhook {
    /// Webhook id.
    #[serde(deserialize_with = "lenient::string")]
    pub id: Option<String>,

    /// URL called on matching events.
    #[serde(deserialize_with = "lenient::string")]
    pub url: Option<String>,

    /// Subscribed events, e.g. `catalog`, `program`.
    #[serde(deserialize_with = "lenient::seq")]
    pub events: Vec<String>,

    /// Whether the subscription is active.
    #[serde(deserialize_with = "lenient::boolean")]
    pub active: bool,

    /// When the webhook was last called.
    #[serde(deserialize_with = "lenient::datetime")]
    pub last_called: Option<DateTime<Utc>>,

    /// HTTP status of the last call.
    #[serde(deserialize_with = "lenient::status")]
    pub last_status: Option<u16>,

    /// Response payload of the last call.
    #[serde(deserialize_with = "lenient::opt")]
    pub last_result: Option<Map<String, Value>>,
}

impl Model for Webhook {}

impl Webhook {
    /// Whether the last delivery got a 2xx response.
    #[must_use]
    pub fn was_last_call_successful(&self) -> bool {
        self.last_status
            .is_some_and(|status| (200..300).contains(&status))
    }

    /// Whether the webhook has ever been called.
    #[must_use]
    pub fn has_been_called(&self) -> bool {
        self.last_called.is_some()
    }

    /// Error message from the last failed delivery, when available.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        if self.was_last_call_successful() {
            return None;
        }
        let result = self.last_result.as_ref()?;
        result
            .get("error")
            .or_else(|| result.get("message"))
            .and_then(Value::as_str)
    }

    /// Whether the webhook is subscribed to an event.
    #[must_use]
    pub fn listens_to(&self, event: &str) -> bool {
        self.events.iter().any(|e| e == event)
    }

    /// Whether the webhook is subscribed to catalog events.
    #[must_use]
    pub fn listens_to_catalog(&self) -> bool {
        self.listens_to("catalog")
    }

    /// Whether the webhook is subscribed to program events.
    #[must_use]
    pub fn listens_to_program(&self) -> bool {
        self.listens_to("program")
    }

    /// Whether deliveries are failing: called at least once, last call
    /// unsuccessful.
    #[must_use]
    pub fn is_failing(&self) -> bool {
        self.has_been_called() && !self.was_last_call_successful()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn successful_delivery() {
        let webhook = Webhook::from_value(json!({
            "id": "wh-1",
            "url": "https://example.org/hook",
            "events": ["catalog"],
            "active": true,
            "lastCalled": "2024-05-01T08:00:00Z",
            "lastStatus": 204
        }));

        assert!(webhook.was_last_call_successful());
        assert!(webhook.listens_to_catalog());
        assert!(!webhook.listens_to_program());
        assert!(!webhook.is_failing());
        assert_eq!(webhook.last_error(), None);
    }

    #[test]
    fn failing_delivery_exposes_error() {
        let webhook = Webhook::from_value(json!({
            "id": "wh-1",
            "lastCalled": "2024-05-01T08:00:00Z",
            "lastStatus": 500,
            "lastResult": {"error": "upstream unavailable"}
        }));

        assert!(webhook.is_failing());
        assert_eq!(webhook.last_error(), Some("upstream unavailable"));
    }

    #[test]
    fn never_called_is_not_failing() {
        let webhook = Webhook::from_value(json!({"id": "wh-1"}));
        assert!(!webhook.has_been_called());
        assert!(!webhook.is_failing());
    }
}
