//! Suppliers endpoint group: suppliers, programs, metadata, discounts

use super::{extract_list, hydrate_list, require};
use crate::error::ApiResult;
use crate::http::{HttpClient, RequestOptions};
use edudex_core::models::{Program, Supplier};
use edudex_core::Model;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

/// Suppliers API interface.
///
/// Program data, institute metadata, and discount structures are open
/// EduDex-format documents and travel as raw JSON values; only the
/// envelope is typed.
#[derive(Debug, Clone)]
pub struct Suppliers {
    http: Arc<HttpClient>,
}

impl Suppliers {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// List all suppliers visible to the token.
    pub async fn list(&self) -> ApiResult<Vec<Supplier>> {
        let response = self.http.get("suppliers", RequestOptions::new()).await?;
        Ok(hydrate_list(extract_list(response, "suppliers")))
    }

    /// Get a single supplier.
    pub async fn get(&self, org_unit_id: &str) -> ApiResult<Supplier> {
        require("orgUnitId", org_unit_id)?;
        let response = self
            .http
            .get(&format!("suppliers/{org_unit_id}"), RequestOptions::new())
            .await?;
        Ok(Supplier::from_value(response))
    }

    // -------------------------------------------------------------------------
    // Institute metadata
    // -------------------------------------------------------------------------

    /// Get the institute metadata document for a supplier.
    pub async fn metadata(&self, org_unit_id: &str) -> ApiResult<Value> {
        require("orgUnitId", org_unit_id)?;
        self.http
            .get(
                &format!("suppliers/{org_unit_id}/metadata"),
                RequestOptions::new(),
            )
            .await
    }

    /// Replace the institute metadata document for a supplier.
    pub async fn update_metadata(&self, org_unit_id: &str, metadata: Value) -> ApiResult<Value> {
        require("orgUnitId", org_unit_id)?;
        self.http
            .put(&format!("suppliers/{org_unit_id}/metadata"), metadata)
            .await
    }

    // -------------------------------------------------------------------------
    // Programs
    // -------------------------------------------------------------------------

    /// List program identifiers for a supplier, optionally filtered by
    /// client.
    pub async fn list_programs(
        &self,
        org_unit_id: &str,
        client_id: Option<&str>,
    ) -> ApiResult<Vec<Value>> {
        require("orgUnitId", org_unit_id)?;
        let response = self
            .http
            .get(
                &format!("suppliers/{org_unit_id}/programs"),
                RequestOptions::new().query_opt("clientId", client_id),
            )
            .await?;
        Ok(extract_list(response, "programs"))
    }

    /// Get a program as published for a client.
    pub async fn get_program(
        &self,
        org_unit_id: &str,
        program_id: &str,
        client_id: &str,
    ) -> ApiResult<Program> {
        require("orgUnitId", org_unit_id)?;
        require("programId", program_id)?;
        require("clientId", client_id)?;

        let response = self
            .http
            .get(
                &format!("suppliers/{org_unit_id}/programs/{program_id}"),
                RequestOptions::new().query("clientId", client_id),
            )
            .await?;
        Ok(Program::from_value(response))
    }

    /// Create or replace a program for a client.
    pub async fn upsert_program(
        &self,
        org_unit_id: &str,
        program_id: &str,
        client_id: &str,
        program_data: Value,
    ) -> ApiResult<Program> {
        require("orgUnitId", org_unit_id)?;
        require("programId", program_id)?;
        require("clientId", client_id)?;

        let response = self
            .http
            .request(
                Method::PUT,
                &format!("suppliers/{org_unit_id}/programs/{program_id}"),
                RequestOptions::new()
                    .query("clientId", client_id)
                    .json(program_data),
            )
            .await?;
        Ok(Program::from_value(response))
    }

    /// Delete a program for a client.
    pub async fn delete_program(
        &self,
        org_unit_id: &str,
        program_id: &str,
        client_id: &str,
    ) -> ApiResult<()> {
        require("orgUnitId", org_unit_id)?;
        require("programId", program_id)?;
        require("clientId", client_id)?;

        self.http
            .request(
                Method::DELETE,
                &format!("suppliers/{org_unit_id}/programs/{program_id}"),
                RequestOptions::new().query("clientId", client_id),
            )
            .await?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Discounts
    // -------------------------------------------------------------------------

    /// List clients a supplier has discount agreements with.
    pub async fn list_discounts(&self, org_unit_id: &str) -> ApiResult<Vec<Value>> {
        require("orgUnitId", org_unit_id)?;
        let response = self
            .http
            .get(
                &format!("suppliers/{org_unit_id}/discounts"),
                RequestOptions::new(),
            )
            .await?;
        Ok(extract_list(response, "clients"))
    }

    /// Get the discount document for a client.
    pub async fn get_discounts(&self, org_unit_id: &str, client_id: &str) -> ApiResult<Value> {
        require("orgUnitId", org_unit_id)?;
        require("clientId", client_id)?;
        self.http
            .get(
                &format!("suppliers/{org_unit_id}/discounts/{client_id}"),
                RequestOptions::new(),
            )
            .await
    }

    /// Create or replace the discount document for a client.
    pub async fn upsert_discounts(
        &self,
        org_unit_id: &str,
        client_id: &str,
        discounts: Value,
    ) -> ApiResult<Value> {
        require("orgUnitId", org_unit_id)?;
        require("clientId", client_id)?;
        self.http
            .put(
                &format!("suppliers/{org_unit_id}/discounts/{client_id}"),
                discounts,
            )
            .await
    }

    /// Delete the discount document for a client.
    pub async fn delete_discounts(&self, org_unit_id: &str, client_id: &str) -> ApiResult<()> {
        require("orgUnitId", org_unit_id)?;
        require("clientId", client_id)?;
        self.http
            .delete(&format!("suppliers/{org_unit_id}/discounts/{client_id}"))
            .await?;
        Ok(())
    }
}
