//! Supplier model

use crate::model::{lenient, Model};
use crate::types::LocalizedString;
use serde::{Deserialize, Serialize};

/// A supplier organization offering programs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Supplier {
    /// Supplier organization unit id.
    #[serde(deserialize_with = "lenient::string")]
    pub id: Option<String>,

    /// Localized supplier name.
    #[serde(deserialize_with = "lenient::opt")]
    pub name: Option<LocalizedString>,
}

impl Model for Supplier {}

impl Supplier {
    /// Resolve the supplier name for a locale.
    #[must_use]
    pub fn localized_name(&self, locale: Option<&str>) -> Option<&str> {
        self.name.as_ref().and_then(|name| name.get(locale))
    }
}
