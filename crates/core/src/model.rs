//! Tolerant hydration and serialization contract shared by all API models
//!
//! Every EduDex entity derives `Serialize`/`Deserialize` with
//! `#[serde(default)]` and routes its fields through the [`lenient`]
//! deserializers, then implements [`Model`] to pick up the shared
//! `from_value`/`to_value` behavior.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Hydration and serialization contract for EduDex API entities.
///
/// Hydration is partial and tolerant: unknown response keys are ignored,
/// missing declared fields keep their defaults, and a malformed field
/// resolves to its default rather than failing the whole record.
pub trait Model: Default + Serialize + DeserializeOwned {
    /// Hydrate an instance from a decoded JSON payload.
    ///
    /// Never fails. A payload that is not an object at all yields the
    /// default instance.
    fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Hydrate an instance from a raw JSON string.
    ///
    /// Unparseable input yields the default instance, mirroring
    /// [`Model::from_value`].
    fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }

    /// Serialize to a JSON value, omitting absent fields.
    ///
    /// Nested models serialize recursively, temporal values render as
    /// ISO-8601 strings, and `null` entries are stripped at every level.
    fn to_value(&self) -> Value {
        let mut value = serde_json::to_value(self).unwrap_or(Value::Null);
        strip_nulls(&mut value);
        value
    }

    /// Serialize to a JSON value keeping `null` entries for absent fields.
    fn to_value_with_nulls(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Recursively remove `null` entries from JSON objects.
pub fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            for v in map.values_mut() {
                strip_nulls(v);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                strip_nulls(item);
            }
        }
        _ => {}
    }
}

/// Field-level deserializers implementing the tolerant casting rules.
///
/// These are the per-entity cast table: each model field that needs
/// coercion from a raw JSON scalar points at one of these with
/// `#[serde(default, deserialize_with = "...")]`. A value that cannot be
/// coerced resolves to the field default instead of erroring, so one bad
/// field never invalidates the rest of the record.
pub mod lenient {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Deserialize into `Option<T>`, resolving mismatches to `None`.
    pub fn opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(None);
        }
        Ok(T::deserialize(value).ok())
    }

    /// Deserialize into `T`, resolving mismatches to `T::default()`.
    pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(T::deserialize(value).unwrap_or_default())
    }

    /// Deserialize a JSON array element-wise, dropping elements that do
    /// not fit. Anything that is not an array yields an empty vec.
    pub fn seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Array(items) => Ok(items
                .into_iter()
                .filter_map(|item| T::deserialize(item).ok())
                .collect()),
            _ => Ok(Vec::new()),
        }
    }

    /// Deserialize an ISO-8601-ish timestamp string.
    ///
    /// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, and bare dates.
    /// Unparseable input resolves to `None`.
    pub fn datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_str().and_then(parse_datetime))
    }

    pub(crate) fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
        if raw.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            return Some(Utc.from_utc_datetime(&naive));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive))
    }

    /// Deserialize an integer from a number or numeric string.
    pub fn int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s.trim().parse().ok(),
            Value::Bool(b) => Some(i64::from(b)),
            _ => None,
        })
    }

    /// Deserialize an HTTP status code from a number or numeric string.
    pub fn status<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
    where
        D: Deserializer<'de>,
    {
        int(deserializer).map(|n| n.and_then(|n| u16::try_from(n).ok()))
    }

    /// Deserialize a boolean with loose truthiness rules.
    ///
    /// Numbers are true when non-zero; strings are true unless empty,
    /// `"0"`, or `"false"`. Anything else is false.
    pub fn boolean<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(truthy(&value))
    }

    pub(crate) fn truthy(value: &Value) -> bool {
        match value {
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty() && s != "0" && !s.eq_ignore_ascii_case("false"),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
            Value::Null => false,
        }
    }

    /// Deserialize a string from a string or number.
    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }
}
