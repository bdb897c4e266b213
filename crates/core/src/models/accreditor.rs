//! Accreditor model

use crate::model::{lenient, Model};
use crate::types::LocalizedString;
use serde::{Deserialize, Serialize};

/// An accrediting organization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Accreditor {
    /// Accreditor organization unit id.
    #[serde(deserialize_with = "lenient::string")]
    pub id: Option<String>,

    /// Localized accreditor name.
    #[serde(deserialize_with = "lenient::opt")]
    pub name: Option<LocalizedString>,
}

impl Model for Accreditor {}

impl Accreditor {
    /// Resolve the accreditor name for a locale.
    #[must_use]
    pub fn localized_name(&self, locale: Option<&str>) -> Option<&str> {
        self.name.as_ref().and_then(|name| name.get(locale))
    }
}
