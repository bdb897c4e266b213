//! Organization model

use crate::model::{lenient, Model};
use crate::types::LocalizedString;
use serde::{Deserialize, Serialize};

/// An organization in the EduDex system.
///
/// Organizations carry one or more roles (`supplier`, `client`,
/// `intermediary`, `accreditor`) and optionally a list of accreditation
/// codes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Organization {
    /// Organization unit id.
    #[serde(deserialize_with = "lenient::string")]
    pub id: Option<String>,

    /// Localized organization name.
    #[serde(deserialize_with = "lenient::opt")]
    pub name: Option<LocalizedString>,

    /// Roles of the organization.
    #[serde(deserialize_with = "lenient::seq")]
    pub roles: Vec<String>,

    /// Whether the organization is VAT exempt.
    #[serde(deserialize_with = "lenient::boolean")]
    pub vat_exempt: bool,

    /// Accreditation codes held by the organization.
    #[serde(deserialize_with = "lenient::seq")]
    pub accreditations: Vec<String>,
}

impl Model for Organization {}

impl Organization {
    /// Whether the organization has the `supplier` role.
    #[must_use]
    pub fn is_supplier(&self) -> bool {
        self.has_role("supplier")
    }

    /// Whether the organization has the `client` role.
    #[must_use]
    pub fn is_client(&self) -> bool {
        self.has_role("client")
    }

    /// Whether the organization has the `intermediary` role.
    #[must_use]
    pub fn is_intermediary(&self) -> bool {
        self.has_role("intermediary")
    }

    /// Whether the organization has the `accreditor` role.
    #[must_use]
    pub fn is_accreditor(&self) -> bool {
        self.has_role("accreditor")
    }

    fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Resolve the organization name for a locale.
    #[must_use]
    pub fn localized_name(&self, locale: Option<&str>) -> Option<&str> {
        self.name.as_ref().and_then(|name| name.get(locale))
    }

    /// Whether the organization holds a specific accreditation code.
    #[must_use]
    pub fn has_accreditation(&self, accreditation: &str) -> bool {
        self.accreditations.iter().any(|a| a == accreditation)
    }
}
