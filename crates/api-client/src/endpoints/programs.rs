//! Programs endpoint group: bulk retrieval

use super::require;
use crate::error::{ApiResult, Error};
use crate::http::{HttpClient, RequestOptions};
use edudex_core::models::Program;
use edudex_core::model::lenient;
use edudex_core::Model;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

/// Identifier of a program to fetch in bulk.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramRef {
    /// Supplier organization unit id.
    pub org_unit_id: String,
    /// Program id at that supplier.
    pub program_id: String,
    /// Client the program data is published for.
    pub client_id: String,
}

impl ProgramRef {
    /// Convenience constructor.
    pub fn new(
        org_unit_id: impl Into<String>,
        program_id: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            org_unit_id: org_unit_id.into(),
            program_id: program_id.into(),
            client_id: client_id.into(),
        }
    }
}

/// Response of a bulk program fetch: resolved programs plus the
/// identifiers that could not be served.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BulkProgramsResponse {
    /// Raw program documents that resolved.
    #[serde(deserialize_with = "lenient::seq")]
    pub successful: Vec<Value>,
    /// Failed identifiers, each with an error description.
    #[serde(deserialize_with = "lenient::seq")]
    pub failed: Vec<Value>,
}

impl BulkProgramsResponse {
    /// Hydrate the successful entries into [`Program`] models.
    #[must_use]
    pub fn successful_programs(&self) -> Vec<Program> {
        self.successful
            .iter()
            .cloned()
            .map(Program::from_value)
            .collect()
    }

    /// Whether every requested program resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Programs API interface.
#[derive(Debug, Clone)]
pub struct Programs {
    http: Arc<HttpClient>,
}

impl Programs {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Fetch multiple programs in a single request.
    ///
    /// `viewer_org_unit_id` selects the organization viewing the data;
    /// `view_discounts_for_org_unit_id` additionally resolves that
    /// organization's discounts into the returned programs.
    pub async fn bulk(
        &self,
        programs: &[ProgramRef],
        viewer_org_unit_id: Option<&str>,
        view_discounts_for_org_unit_id: Option<&str>,
    ) -> ApiResult<BulkProgramsResponse> {
        if programs.is_empty() {
            return Err(Error::missing_parameter("programs"));
        }

        let response = self
            .http
            .request(
                Method::POST,
                "programs/bulk",
                RequestOptions::new()
                    .query_opt("viewerOrgUnitId", viewer_org_unit_id)
                    .query_opt("viewDiscountsForOrgUnitId", view_discounts_for_org_unit_id)
                    .json(json!({"programs": programs})),
            )
            .await?;

        Ok(serde_json::from_value(response).unwrap_or_default())
    }

    /// Fetch a single program through the bulk endpoint.
    pub async fn get(
        &self,
        org_unit_id: &str,
        program_id: &str,
        client_id: &str,
    ) -> ApiResult<Option<Program>> {
        require("orgUnitId", org_unit_id)?;
        require("programId", program_id)?;
        require("clientId", client_id)?;

        let response = self
            .bulk(
                &[ProgramRef::new(org_unit_id, program_id, client_id)],
                None,
                None,
            )
            .await?;
        Ok(response.successful_programs().into_iter().next())
    }
}
