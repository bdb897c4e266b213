//! Accreditation model

use crate::model::{lenient, Model};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An accreditation granted to a supplier for a validity window.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Accreditation {
    /// Accreditation id (UUID).
    #[serde(deserialize_with = "lenient::string")]
    pub accreditation_id: Option<String>,

    /// Supplier organization unit id the accreditation applies to.
    #[serde(deserialize_with = "lenient::string")]
    pub org_unit_id: Option<String>,

    /// Accreditation type, e.g. `CRKBO` or `ISO`.
    #[serde(deserialize_with = "lenient::string")]
    pub accreditation: Option<String>,

    /// Start of the validity window.
    #[serde(deserialize_with = "lenient::datetime")]
    pub valid_from: Option<DateTime<Utc>>,

    /// End of the validity window.
    #[serde(deserialize_with = "lenient::datetime")]
    pub valid_until: Option<DateTime<Utc>>,
}

impl Model for Accreditation {}

impl Accreditation {
    /// Whether the accreditation is valid right now.
    ///
    /// Requires both bounds: `validFrom <= now <= validUntil`. An
    /// accreditation missing either bound is never reported valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let now = Utc::now();
        match (self.valid_from, self.valid_until) {
            (Some(from), Some(until)) => from <= now && now <= until,
            _ => false,
        }
    }

    /// Whether the validity window has passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.valid_until.is_some_and(|until| until < Utc::now())
    }

    /// Whether the validity window has not started yet.
    #[must_use]
    pub fn is_future(&self) -> bool {
        self.valid_from.is_some_and(|from| from > Utc::now())
    }

    /// Days until `validUntil`, negative once expired.
    ///
    /// `None` when the accreditation has no end date.
    #[must_use]
    pub fn days_until_expiry(&self) -> Option<i64> {
        self.valid_until
            .map(|until| until.signed_duration_since(Utc::now()).num_days())
    }
}
