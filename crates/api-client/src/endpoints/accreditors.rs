//! Accreditors endpoint group: accreditors and their accreditations

use super::{extract_list, hydrate_list, require};
use crate::error::{ApiResult, Error};
use crate::http::{HttpClient, RequestOptions};
use edudex_core::models::{Accreditation, Accreditor};
use edudex_core::Model;
use serde_json::Value;
use std::sync::Arc;

/// Accreditors API interface.
#[derive(Debug, Clone)]
pub struct Accreditors {
    http: Arc<HttpClient>,
}

impl Accreditors {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// List all accreditors.
    pub async fn list(&self) -> ApiResult<Vec<Accreditor>> {
        let response = self.http.get("accreditors", RequestOptions::new()).await?;
        Ok(hydrate_list(extract_list(response, "accreditors")))
    }

    /// Get a single accreditor.
    pub async fn get(&self, org_unit_id: &str) -> ApiResult<Accreditor> {
        require("orgUnitId", org_unit_id)?;
        let response = self
            .http
            .get(&format!("accreditors/{org_unit_id}"), RequestOptions::new())
            .await?;
        Ok(Accreditor::from_value(response))
    }

    /// List accreditations granted by an accreditor.
    pub async fn list_accreditations(&self, org_unit_id: &str) -> ApiResult<Vec<Accreditation>> {
        require("orgUnitId", org_unit_id)?;
        let response = self
            .http
            .get(
                &format!("accreditors/{org_unit_id}/accreditations"),
                RequestOptions::new(),
            )
            .await?;
        Ok(hydrate_list(extract_list(response, "accreditations")))
    }

    /// Get a specific accreditation.
    pub async fn get_accreditation(
        &self,
        org_unit_id: &str,
        accreditation_id: &str,
    ) -> ApiResult<Accreditation> {
        require("orgUnitId", org_unit_id)?;
        require("accreditationId", accreditation_id)?;
        let response = self
            .http
            .get(
                &format!("accreditors/{org_unit_id}/accreditations/{accreditation_id}"),
                RequestOptions::new(),
            )
            .await?;
        Ok(Accreditation::from_value(response))
    }

    /// Grant an accreditation.
    ///
    /// `data` must carry `orgUnitId` (the supplier), `accreditation`,
    /// `validFrom`, and `validUntil`; missing keys are rejected before
    /// any request is sent.
    pub async fn create_accreditation(
        &self,
        org_unit_id: &str,
        data: Value,
    ) -> ApiResult<Accreditation> {
        require("orgUnitId", org_unit_id)?;
        for key in ["accreditation", "validFrom", "validUntil"] {
            let present = data
                .get(key)
                .and_then(Value::as_str)
                .is_some_and(|v| !v.is_empty());
            if !present {
                return Err(Error::missing_parameter(key));
            }
        }

        let response = self
            .http
            .post(&format!("accreditors/{org_unit_id}/accreditations"), data)
            .await?;
        Ok(Accreditation::from_value(response))
    }

    /// Update an accreditation with a partial document.
    pub async fn update_accreditation(
        &self,
        org_unit_id: &str,
        accreditation_id: &str,
        data: Value,
    ) -> ApiResult<Accreditation> {
        require("orgUnitId", org_unit_id)?;
        require("accreditationId", accreditation_id)?;

        let response = self
            .http
            .patch(
                &format!("accreditors/{org_unit_id}/accreditations/{accreditation_id}"),
                data,
            )
            .await?;
        Ok(Accreditation::from_value(response))
    }

    /// Withdraw an accreditation.
    pub async fn delete_accreditation(
        &self,
        org_unit_id: &str,
        accreditation_id: &str,
    ) -> ApiResult<()> {
        require("orgUnitId", org_unit_id)?;
        require("accreditationId", accreditation_id)?;
        self.http
            .delete(&format!(
                "accreditors/{org_unit_id}/accreditations/{accreditation_id}"
            ))
            .await?;
        Ok(())
    }
}
