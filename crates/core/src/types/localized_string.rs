//! Localized text handling for multi-language API content

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Default locale used when none is requested.
const DEFAULT_LOCALE: &str = "nl";

/// Multi-locale text value with fallback resolution.
///
/// Wraps the API's localized-set shape (`{"nl": "...", "en": "..."}`).
/// Lookup order for [`get`](Self::get): the requested locale, then the
/// fallback chain (`["nl", "en"]` unless reconfigured), then the first
/// value in insertion order, then `None`.
///
/// The default locale and fallback chain are per-instance; hydrated
/// values start with the standard Dutch-first configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedString {
    values: IndexMap<String, String>,
    default_locale: String,
    fallback_locales: Vec<String>,
}

impl Default for LocalizedString {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalizedString {
    /// Create an empty localized string.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
            default_locale: DEFAULT_LOCALE.to_string(),
            fallback_locales: vec!["nl".to_string(), "en".to_string()],
        }
    }

    /// Create from locale/text pairs, keeping their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut localized = Self::new();
        for (locale, value) in pairs {
            localized.values.insert(locale.into(), value.into());
        }
        localized
    }

    /// Resolve the text for a locale.
    ///
    /// `None` requests the instance's default locale. Resolution falls
    /// back along the configured chain, then to the first available
    /// value, and finally to `None` when the set is empty.
    #[must_use]
    pub fn get(&self, locale: Option<&str>) -> Option<&str> {
        let requested = locale.unwrap_or(&self.default_locale);

        if let Some(value) = self.values.get(requested) {
            return Some(value.as_str());
        }

        for fallback in &self.fallback_locales {
            if let Some(value) = self.values.get(fallback) {
                return Some(value.as_str());
            }
        }

        self.values.values().next().map(String::as_str)
    }

    /// Set the text for a locale.
    pub fn set(&mut self, locale: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(locale.into(), value.into());
        self
    }

    /// Whether a locale has a value.
    #[must_use]
    pub fn has(&self, locale: &str) -> bool {
        self.values.contains_key(locale)
    }

    /// All locale/text pairs in insertion order.
    #[must_use]
    pub fn all(&self) -> &IndexMap<String, String> {
        &self.values
    }

    /// Available locale codes in insertion order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Whether the set holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of locales with a value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Builder-style method to set the default locale.
    #[must_use]
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Builder-style method to set the fallback chain.
    #[must_use]
    pub fn with_fallback_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallback_locales = locales.into_iter().map(Into::into).collect();
        self
    }
}

impl fmt::Display for LocalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get(None).unwrap_or(""))
    }
}

impl Serialize for LocalizedString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LocalizedString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = IndexMap::<String, String>::deserialize(deserializer)?;
        Ok(Self {
            values,
            ..Self::new()
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocalizedString {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_locale_wins() {
        let text = LocalizedString::from_pairs([("nl", "Cursus"), ("en", "Course")]);
        assert_eq!(text.get(Some("en")), Some("Course"));
        assert_eq!(text.get(Some("nl")), Some("Cursus"));
        assert_eq!(text.get(None), Some("Cursus"));
    }

    #[test]
    fn fallback_chain_applies_before_first_available() {
        let text = LocalizedString::from_pairs([("en", "Course")]);
        assert_eq!(text.get(Some("nl")), Some("Course"));
    }

    #[test]
    fn first_available_is_last_resort() {
        let text = LocalizedString::from_pairs([("de", "Kurs"), ("fr", "Cours")]);
        assert_eq!(text.get(Some("nl")), Some("Kurs"));
    }

    #[test]
    fn empty_set_resolves_to_none() {
        let text = LocalizedString::new();
        assert_eq!(text.get(None), None);
        assert!(text.is_empty());
        assert_eq!(text.to_string(), "");
    }

    #[test]
    fn custom_fallback_chain() {
        let text = LocalizedString::from_pairs([("en", "Course"), ("de", "Kurs")])
            .with_default_locale("fr")
            .with_fallback_locales(["de", "en"]);
        assert_eq!(text.get(None), Some("Kurs"));
    }

    #[test]
    fn set_and_has() {
        let mut text = LocalizedString::new();
        text.set("nl", "Cursus");
        assert!(text.has("nl"));
        assert!(!text.has("en"));
        assert_eq!(text.len(), 1);
    }

    #[test]
    fn serializes_as_bare_map() {
        let text = LocalizedString::from_pairs([("nl", "Cursus"), ("en", "Course")]);
        let value = serde_json::to_value(&text).unwrap();
        assert_eq!(value, serde_json::json!({"nl": "Cursus", "en": "Course"}));
    }

    #[test]
    fn deserialization_preserves_insertion_order() {
        let text: LocalizedString =
            serde_json::from_str(r#"{"de": "Kurs", "fr": "Cours"}"#).unwrap();
        assert_eq!(text.locales().collect::<Vec<_>>(), vec!["de", "fr"]);
        assert_eq!(text.get(Some("nl")), Some("Kurs"));
    }
}
