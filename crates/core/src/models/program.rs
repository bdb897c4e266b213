//! Program model

use crate::model::{lenient, Model};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A training program as stored for a supplier/client pair.
///
/// The full program structure lives in `program_data`, an open document
/// whose schema is owned by the EduDex format; only the envelope fields
/// are typed here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Program {
    /// Supplier organization unit id.
    #[serde(deserialize_with = "lenient::string")]
    pub org_unit_id: Option<String>,

    /// Program id, unique per supplier.
    #[serde(deserialize_with = "lenient::string")]
    pub program_id: Option<String>,

    /// Client the program data is published for.
    #[serde(deserialize_with = "lenient::string")]
    pub client_id: Option<String>,

    /// Editor that last touched the data.
    #[serde(deserialize_with = "lenient::string")]
    pub editor: Option<String>,

    /// EduDex format version of the data.
    #[serde(deserialize_with = "lenient::string")]
    pub format: Option<String>,

    /// System that generated the data.
    #[serde(deserialize_with = "lenient::string")]
    pub generator: Option<String>,

    /// When the data was last edited.
    #[serde(deserialize_with = "lenient::datetime")]
    pub last_edited: Option<DateTime<Utc>>,

    /// Full program document.
    #[serde(deserialize_with = "lenient::or_default")]
    pub program_data: Map<String, Value>,
}

impl Model for Program {}

impl Program {
    /// Program title from `programData.programDescriptions.title`.
    ///
    /// Resolves the requested locale, then `nl`, then `en`.
    #[must_use]
    pub fn title(&self, locale: Option<&str>) -> Option<&str> {
        self.description_field("title", locale)
    }

    /// Program description from `programData.programDescriptions.description`.
    #[must_use]
    pub fn description(&self, locale: Option<&str>) -> Option<&str> {
        self.description_field("description", locale)
    }

    fn description_field(&self, field: &str, locale: Option<&str>) -> Option<&str> {
        let texts = self
            .program_data
            .get("programDescriptions")?
            .get(field)?
            .as_object()?;

        locale
            .and_then(|l| texts.get(l))
            .or_else(|| texts.get("nl"))
            .or_else(|| texts.get("en"))
            .and_then(Value::as_str)
    }

    /// Whether the program has ever been edited.
    #[must_use]
    pub fn has_been_edited(&self) -> bool {
        self.last_edited.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn title_and_description_resolve_locales() {
        let program = Program::from_value(json!({
            "orgUnitId": "edu:acme",
            "programId": "course-101",
            "clientId": "client-a",
            "programData": {
                "programDescriptions": {
                    "title": {"nl": "Basiscursus", "en": "Basics"},
                    "description": {"en": "An introduction"}
                }
            }
        }));

        assert_eq!(program.title(Some("en")), Some("Basics"));
        assert_eq!(program.title(None), Some("Basiscursus"));
        assert_eq!(program.description(Some("nl")), Some("An introduction"));
    }

    #[test]
    fn missing_descriptions_resolve_to_none() {
        let program = Program::from_value(json!({"programId": "p"}));
        assert_eq!(program.title(None), None);
        assert!(!program.has_been_edited());
    }

    #[test]
    fn last_edited_round_trips() {
        let program = Program::from_value(json!({
            "programId": "p",
            "lastEdited": "2024-03-01T09:00:00Z"
        }));
        assert!(program.has_been_edited());

        let again = Program::from_value(program.to_value());
        assert_eq!(program.last_edited, again.last_edited);
    }
}
