//! Endpoint groups of the EduDex Data API
//!
//! Each group is a typed interface over one resource family; all of them
//! go through the shared [`crate::HttpClient`] and return hydrated
//! models or typed errors.
//!
//! | Group | Resource paths |
//! |-------|----------------|
//! | [`Organizations`] | `organizations`, catalogs, webhooks |
//! | [`Suppliers`] | `suppliers`, programs, metadata, discounts |
//! | [`Accreditors`] | `accreditors`, accreditations |
//! | [`Programs`] | `programs/bulk` |
//! | [`Validations`] | `validations/...` |

pub mod accreditors;
pub mod organizations;
pub mod programs;
pub mod suppliers;
pub mod validations;

pub use accreditors::Accreditors;
pub use organizations::{CatalogProgramRef, Organizations};
pub use programs::{BulkProgramsResponse, ProgramRef, Programs};
pub use suppliers::Suppliers;
pub use validations::Validations;

use crate::error::{ApiResult, Error};
use edudex_core::Model;
use serde_json::Value;

/// Pull the item array out of a list envelope like
/// `{"organizations": [...]}`. A missing or non-array key yields an
/// empty list.
pub(crate) fn extract_list(mut response: Value, key: &str) -> Vec<Value> {
    match response.get_mut(key).map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

/// Hydrate every item of a list into a model.
pub(crate) fn hydrate_list<T: Model>(items: Vec<Value>) -> Vec<T> {
    items.into_iter().map(T::from_value).collect()
}

/// Guard a required string parameter before any request is issued.
pub(crate) fn require(name: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(Error::missing_parameter(name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use edudex_core::models::Organization;
    use serde_json::json;

    #[test]
    fn extract_list_unwraps_envelope() {
        let response = json!({"organizations": [{"id": "a"}, {"id": "b"}]});
        let items = extract_list(response, "organizations");
        assert_eq!(items.len(), 2);

        let orgs: Vec<Organization> = hydrate_list(items);
        assert_eq!(orgs[0].id.as_deref(), Some("a"));
    }

    #[test]
    fn extract_list_tolerates_missing_key() {
        assert!(extract_list(json!({}), "organizations").is_empty());
        assert!(extract_list(json!({"organizations": "nope"}), "organizations").is_empty());
    }

    #[test]
    fn require_rejects_empty_and_blank() {
        assert!(require("orgUnitId", "edu:acme").is_ok());
        assert!(matches!(
            require("orgUnitId", ""),
            Err(Error::MissingParameter { name }) if name == "orgUnitId"
        ));
        assert!(require("orgUnitId", "   ").is_err());
    }
}
