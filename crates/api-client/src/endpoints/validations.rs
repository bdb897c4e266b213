//! Validations endpoint group: pre-submission document checks

use crate::error::ApiResult;
use crate::http::HttpClient;
use edudex_core::models::ValidationResult;
use edudex_core::Model;
use serde_json::{json, Value};
use std::sync::Arc;

/// Validations API interface.
///
/// Validates EduDex-format documents before submission. The endpoints
/// accept the document wrapped in a `data` key; payloads are wrapped
/// automatically unless the caller already did.
#[derive(Debug, Clone)]
pub struct Validations {
    http: Arc<HttpClient>,
}

impl Validations {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Validate a program document.
    pub async fn validate_program(&self, program_data: Value) -> ApiResult<ValidationResult> {
        self.validate("validations/programs", program_data).await
    }

    /// Validate an institute metadata document.
    pub async fn validate_institute(&self, institute_data: Value) -> ApiResult<ValidationResult> {
        self.validate("validations/institutes", institute_data).await
    }

    /// Validate a discount document.
    pub async fn validate_discounts(&self, discount_data: Value) -> ApiResult<ValidationResult> {
        self.validate("validations/discounts", discount_data).await
    }

    async fn validate(&self, path: &str, data: Value) -> ApiResult<ValidationResult> {
        let response = self.http.post(path, wrap_in_data_key(data)).await?;
        Ok(ValidationResult::from_value(response))
    }
}

/// Wrap a document in a `data` key unless it already is.
fn wrap_in_data_key(data: Value) -> Value {
    if data.get("data").is_some() {
        return data;
    }
    json!({"data": data})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_bare_documents() {
        let wrapped = wrap_in_data_key(json!({"programId": "p"}));
        assert_eq!(wrapped, json!({"data": {"programId": "p"}}));
    }

    #[test]
    fn keeps_already_wrapped_documents() {
        let wrapped = wrap_in_data_key(json!({"data": {"programId": "p"}}));
        assert_eq!(wrapped, json!({"data": {"programId": "p"}}));
    }
}
