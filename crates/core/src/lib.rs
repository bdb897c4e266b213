//! Domain models for the EduDex Data API
//!
//! This crate provides the value objects shared by every EduDex endpoint:
//! the tolerant JSON hydration contract, localized text handling, and the
//! typed entities the API returns (organizations, suppliers, accreditors,
//! catalogs, programs, webhooks, validation results).
//!
//! # Hydration contract
//!
//! API payloads are hydrated through [`Model::from_value`], which is
//! deliberately forgiving: unknown keys are dropped, missing declared
//! fields keep their defaults, and a field that fails to parse resolves to
//! its default without invalidating the rest of the record. Serialization
//! back out through [`Model::to_value`] omits absent fields and renders
//! temporal values as ISO-8601 strings.
//!
//! # Example
//!
//! ```rust
//! use edudex_core::models::Organization;
//! use edudex_core::Model;
//! use serde_json::json;
//!
//! let org = Organization::from_value(json!({
//!     "id": "edu:kempenhaeghe",
//!     "name": {"nl": "Kempenhaeghe", "en": "Kempenhaeghe Institute"},
//!     "roles": ["supplier"],
//!     "someFutureField": 42
//! }));
//!
//! assert!(org.is_supplier());
//! assert_eq!(org.localized_name(Some("en")), Some("Kempenhaeghe Institute"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod model;
pub mod models;
pub mod types;

pub use model::Model;
pub use types::{LocalizedString, Severity, ValidationMessage};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::model::Model;
    pub use crate::models::{
        Accreditation, Accreditor, DynamicCatalog, Organization, Program, StaticCatalog,
        Supplier, ValidationResult, Webhook,
    };
    pub use crate::types::{LocalizedString, Severity, ValidationMessage};
}
