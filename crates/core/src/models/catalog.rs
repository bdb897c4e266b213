//! Static and dynamic catalog models

use crate::model::{lenient, Model};
use serde::{Deserialize, Serialize};

/// A static catalog: a manually curated list of program references.
///
/// `count_total` counts all references including ones whose program has
/// since been removed; `count_active` counts the ones that still exist.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StaticCatalog {
    /// Catalog id (UUID).
    #[serde(deserialize_with = "lenient::string")]
    pub catalog_id: Option<String>,

    /// Owning client id.
    #[serde(deserialize_with = "lenient::string")]
    pub client_id: Option<String>,

    /// Catalog title.
    #[serde(deserialize_with = "lenient::string")]
    pub title: Option<String>,

    /// Number of program references that still resolve.
    #[serde(deserialize_with = "lenient::int")]
    pub count_active: Option<i64>,

    /// Total number of program references.
    #[serde(deserialize_with = "lenient::int")]
    pub count_total: Option<i64>,
}

impl Model for StaticCatalog {}

impl StaticCatalog {
    /// Whether some referenced programs no longer exist.
    #[must_use]
    pub fn has_inactive_programs(&self) -> bool {
        counts::has_inactive(self.count_active, self.count_total)
    }

    /// Number of references whose program was removed.
    #[must_use]
    pub fn inactive_count(&self) -> i64 {
        counts::inactive(self.count_active, self.count_total)
    }

    /// Whether the catalog holds no references at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count_total.unwrap_or(0) == 0
    }

    /// Percentage of references that still resolve, `0.0` for an empty
    /// catalog.
    #[must_use]
    pub fn active_percentage(&self) -> f64 {
        counts::active_percentage(self.count_active, self.count_total)
    }
}

/// A dynamic catalog: programs selected by supplier membership and an
/// optional postal-code region filter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DynamicCatalog {
    /// Catalog id (UUID).
    #[serde(deserialize_with = "lenient::string")]
    pub catalog_id: Option<String>,

    /// Owning client id.
    #[serde(deserialize_with = "lenient::string")]
    pub client_id: Option<String>,

    /// Catalog title.
    #[serde(deserialize_with = "lenient::string")]
    pub title: Option<String>,

    /// Postal-code region filter, e.g. `"1000-1999,2345"`.
    #[serde(deserialize_with = "lenient::string")]
    pub region_filter: Option<String>,

    /// Number of program references that still resolve.
    #[serde(deserialize_with = "lenient::int")]
    pub count_active: Option<i64>,

    /// Total number of program references.
    #[serde(deserialize_with = "lenient::int")]
    pub count_total: Option<i64>,
}

impl Model for DynamicCatalog {}

impl DynamicCatalog {
    /// Whether some referenced programs no longer exist.
    #[must_use]
    pub fn has_inactive_programs(&self) -> bool {
        counts::has_inactive(self.count_active, self.count_total)
    }

    /// Number of references whose program was removed.
    #[must_use]
    pub fn inactive_count(&self) -> i64 {
        counts::inactive(self.count_active, self.count_total)
    }

    /// Whether the catalog holds no references at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count_total.unwrap_or(0) == 0
    }

    /// Percentage of references that still resolve, `0.0` for an empty
    /// catalog.
    #[must_use]
    pub fn active_percentage(&self) -> f64 {
        counts::active_percentage(self.count_active, self.count_total)
    }

    /// Whether a region filter is configured.
    #[must_use]
    pub fn has_region_filter(&self) -> bool {
        self.region_filter.as_ref().is_some_and(|f| !f.is_empty())
    }

    /// Parse the region filter into `(start, end)` postal-code ranges.
    ///
    /// Single codes become degenerate ranges: `"1000-1999,2345"` yields
    /// `[("1000", "1999"), ("2345", "2345")]`.
    #[must_use]
    pub fn postal_code_ranges(&self) -> Vec<(String, String)> {
        let Some(filter) = self.region_filter.as_deref() else {
            return Vec::new();
        };

        filter
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| match part.split_once('-') {
                Some((start, end)) => (start.trim().to_string(), end.trim().to_string()),
                None => (part.to_string(), part.to_string()),
            })
            .collect()
    }
}

mod counts {
    pub(super) fn has_inactive(active: Option<i64>, total: Option<i64>) -> bool {
        total.unwrap_or(0) > active.unwrap_or(0)
    }

    pub(super) fn inactive(active: Option<i64>, total: Option<i64>) -> i64 {
        total.unwrap_or(0) - active.unwrap_or(0)
    }

    #[allow(clippy::cast_precision_loss)]
    pub(super) fn active_percentage(active: Option<i64>, total: Option<i64>) -> f64 {
        let total = total.unwrap_or(0);
        if total == 0 {
            return 0.0;
        }
        (active.unwrap_or(0) as f64 / total as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn static_catalog_counts() {
        let catalog = StaticCatalog::from_value(json!({
            "catalogId": "b1f6",
            "clientId": "client-a",
            "title": "Spring offering",
            "countActive": 7,
            "countTotal": 10
        }));

        assert!(catalog.has_inactive_programs());
        assert_eq!(catalog.inactive_count(), 3);
        assert!(!catalog.is_empty());
        assert!((catalog.active_percentage() - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_catalog_has_zero_percentage() {
        let catalog = DynamicCatalog::from_value(json!({"countTotal": 0}));
        assert!(catalog.is_empty());
        assert!((catalog.active_percentage() - 0.0).abs() < f64::EPSILON);
        assert!(!catalog.has_inactive_programs());
    }

    #[test]
    fn dynamic_catalog_counts() {
        let catalog = DynamicCatalog::from_value(json!({
            "countActive": 7,
            "countTotal": 10
        }));
        assert!(catalog.has_inactive_programs());
        assert_eq!(catalog.inactive_count(), 3);
        assert!((catalog.active_percentage() - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn region_filter_parses_ranges() {
        let catalog = DynamicCatalog::from_value(json!({
            "regionFilter": "1000-1999, 2345"
        }));
        assert!(catalog.has_region_filter());
        assert_eq!(
            catalog.postal_code_ranges(),
            vec![
                ("1000".to_string(), "1999".to_string()),
                ("2345".to_string(), "2345".to_string()),
            ]
        );
    }

    #[test]
    fn absent_region_filter() {
        let catalog = DynamicCatalog::default();
        assert!(!catalog.has_region_filter());
        assert!(catalog.postal_code_ranges().is_empty());
    }

    #[test]
    fn numeric_strings_hydrate_counts() {
        let catalog = StaticCatalog::from_value(json!({
            "countActive": "7",
            "countTotal": "10"
        }));
        assert_eq!(catalog.count_active, Some(7));
        assert_eq!(catalog.count_total, Some(10));
    }
}
