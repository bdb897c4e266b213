//! Organizations endpoint group: organizations, catalogs, and webhooks

use super::{extract_list, hydrate_list, require};
use crate::error::ApiResult;
use crate::http::{HttpClient, RequestOptions};
use edudex_core::models::{DynamicCatalog, Organization, StaticCatalog, Webhook};
use edudex_core::Model;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Reference to a program inside a static catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProgramRef {
    /// Supplier the program belongs to.
    pub supplier_id: String,
    /// Program id at that supplier.
    pub program_id: String,
    /// Client the program data is published for.
    pub client_id: String,
}

/// Organizations API interface.
#[derive(Debug, Clone)]
pub struct Organizations {
    http: Arc<HttpClient>,
}

impl Organizations {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// List all organizations visible to the token.
    pub async fn list(&self) -> ApiResult<Vec<Organization>> {
        let response = self.http.get("organizations", RequestOptions::new()).await?;
        Ok(hydrate_list(extract_list(response, "organizations")))
    }

    /// Get a single organization.
    pub async fn get(&self, org_unit_id: &str) -> ApiResult<Organization> {
        require("orgUnitId", org_unit_id)?;
        let response = self
            .http
            .get(&format!("organizations/{org_unit_id}"), RequestOptions::new())
            .await?;
        Ok(Organization::from_value(response))
    }

    // -------------------------------------------------------------------------
    // Catalogs
    // -------------------------------------------------------------------------

    /// List all catalogs (static and dynamic) for an organization, as
    /// raw catalog descriptors.
    pub async fn list_catalogs(&self, org_unit_id: &str) -> ApiResult<Vec<Value>> {
        require("orgUnitId", org_unit_id)?;
        let response = self
            .http
            .get(
                &format!("organizations/{org_unit_id}/catalogs"),
                RequestOptions::new(),
            )
            .await?;
        Ok(extract_list(response, "catalogs"))
    }

    /// List static catalogs for an organization.
    pub async fn list_static_catalogs(&self, org_unit_id: &str) -> ApiResult<Vec<StaticCatalog>> {
        require("orgUnitId", org_unit_id)?;
        let response = self
            .http
            .get(
                &format!("organizations/{org_unit_id}/staticcatalogs"),
                RequestOptions::new(),
            )
            .await?;
        Ok(hydrate_list(extract_list(response, "catalogs")))
    }

    /// Get a static catalog.
    pub async fn get_static_catalog(
        &self,
        org_unit_id: &str,
        catalog_id: &str,
    ) -> ApiResult<StaticCatalog> {
        require("orgUnitId", org_unit_id)?;
        require("catalogId", catalog_id)?;
        let response = self
            .http
            .get(
                &format!("organizations/{org_unit_id}/staticcatalogs/{catalog_id}"),
                RequestOptions::new(),
            )
            .await?;
        Ok(StaticCatalog::from_value(response))
    }

    /// Create a static catalog.
    pub async fn create_static_catalog(
        &self,
        org_unit_id: &str,
        title: &str,
        client_id: &str,
    ) -> ApiResult<StaticCatalog> {
        require("orgUnitId", org_unit_id)?;
        require("title", title)?;
        require("clientId", client_id)?;

        let response = self
            .http
            .post(
                &format!("organizations/{org_unit_id}/staticcatalogs"),
                json!({"title": title, "clientId": client_id}),
            )
            .await?;
        Ok(StaticCatalog::from_value(response))
    }

    /// Rename a static catalog.
    pub async fn update_static_catalog(
        &self,
        org_unit_id: &str,
        catalog_id: &str,
        title: &str,
    ) -> ApiResult<StaticCatalog> {
        require("orgUnitId", org_unit_id)?;
        require("catalogId", catalog_id)?;
        require("title", title)?;

        let response = self
            .http
            .patch(
                &format!("organizations/{org_unit_id}/staticcatalogs/{catalog_id}"),
                json!({"title": title}),
            )
            .await?;
        Ok(StaticCatalog::from_value(response))
    }

    /// Delete a static catalog.
    pub async fn delete_static_catalog(
        &self,
        org_unit_id: &str,
        catalog_id: &str,
    ) -> ApiResult<()> {
        require("orgUnitId", org_unit_id)?;
        require("catalogId", catalog_id)?;
        self.http
            .delete(&format!(
                "organizations/{org_unit_id}/staticcatalogs/{catalog_id}"
            ))
            .await?;
        Ok(())
    }

    /// Bulk-add program references to a static catalog.
    ///
    /// Returns the raw response with per-reference success/failure
    /// counts.
    pub async fn bulk_add_programs(
        &self,
        org_unit_id: &str,
        catalog_id: &str,
        programs: &[CatalogProgramRef],
    ) -> ApiResult<Value> {
        self.bulk_catalog_op(org_unit_id, catalog_id, "bulkadd", programs)
            .await
    }

    /// Bulk-remove program references from a static catalog.
    pub async fn bulk_remove_programs(
        &self,
        org_unit_id: &str,
        catalog_id: &str,
        programs: &[CatalogProgramRef],
    ) -> ApiResult<Value> {
        self.bulk_catalog_op(org_unit_id, catalog_id, "bulkremove", programs)
            .await
    }

    async fn bulk_catalog_op(
        &self,
        org_unit_id: &str,
        catalog_id: &str,
        op: &str,
        programs: &[CatalogProgramRef],
    ) -> ApiResult<Value> {
        require("orgUnitId", org_unit_id)?;
        require("catalogId", catalog_id)?;
        self.http
            .post(
                &format!("organizations/{org_unit_id}/staticcatalogs/{catalog_id}/programs/{op}"),
                json!({"programs": programs}),
            )
            .await
    }

    /// List dynamic catalogs for an organization.
    pub async fn list_dynamic_catalogs(
        &self,
        org_unit_id: &str,
    ) -> ApiResult<Vec<DynamicCatalog>> {
        require("orgUnitId", org_unit_id)?;
        let response = self
            .http
            .get(
                &format!("organizations/{org_unit_id}/dynamiccatalogs"),
                RequestOptions::new(),
            )
            .await?;
        Ok(hydrate_list(extract_list(response, "catalogs")))
    }

    /// Get a dynamic catalog.
    pub async fn get_dynamic_catalog(
        &self,
        org_unit_id: &str,
        catalog_id: &str,
    ) -> ApiResult<DynamicCatalog> {
        require("orgUnitId", org_unit_id)?;
        require("catalogId", catalog_id)?;
        let response = self
            .http
            .get(
                &format!("organizations/{org_unit_id}/dynamiccatalogs/{catalog_id}"),
                RequestOptions::new(),
            )
            .await?;
        Ok(DynamicCatalog::from_value(response))
    }

    /// Create a dynamic catalog, optionally with a postal-code region
    /// filter like `"1000-1999,2345"`.
    pub async fn create_dynamic_catalog(
        &self,
        org_unit_id: &str,
        title: &str,
        client_id: &str,
        region_filter: Option<&str>,
    ) -> ApiResult<DynamicCatalog> {
        require("orgUnitId", org_unit_id)?;
        require("title", title)?;
        require("clientId", client_id)?;

        let mut data = json!({"title": title, "clientId": client_id});
        if let Some(filter) = region_filter {
            data["regionFilter"] = Value::String(filter.to_string());
        }

        let response = self
            .http
            .post(&format!("organizations/{org_unit_id}/dynamiccatalogs"), data)
            .await?;
        Ok(DynamicCatalog::from_value(response))
    }

    /// Update a dynamic catalog. Only the supplied fields change.
    pub async fn update_dynamic_catalog(
        &self,
        org_unit_id: &str,
        catalog_id: &str,
        title: Option<&str>,
        region_filter: Option<&str>,
    ) -> ApiResult<DynamicCatalog> {
        require("orgUnitId", org_unit_id)?;
        require("catalogId", catalog_id)?;

        let mut data = serde_json::Map::new();
        if let Some(title) = title {
            data.insert("title".to_string(), Value::String(title.to_string()));
        }
        if let Some(filter) = region_filter {
            data.insert("regionFilter".to_string(), Value::String(filter.to_string()));
        }

        let response = self
            .http
            .patch(
                &format!("organizations/{org_unit_id}/dynamiccatalogs/{catalog_id}"),
                Value::Object(data),
            )
            .await?;
        Ok(DynamicCatalog::from_value(response))
    }

    /// Delete a dynamic catalog.
    pub async fn delete_dynamic_catalog(
        &self,
        org_unit_id: &str,
        catalog_id: &str,
    ) -> ApiResult<()> {
        require("orgUnitId", org_unit_id)?;
        require("catalogId", catalog_id)?;
        self.http
            .delete(&format!(
                "organizations/{org_unit_id}/dynamiccatalogs/{catalog_id}"
            ))
            .await?;
        Ok(())
    }

    /// Add a supplier to a dynamic catalog.
    pub async fn add_supplier_to_dynamic_catalog(
        &self,
        org_unit_id: &str,
        catalog_id: &str,
        supplier_id: &str,
    ) -> ApiResult<Value> {
        require("orgUnitId", org_unit_id)?;
        require("catalogId", catalog_id)?;
        require("supplierId", supplier_id)?;
        self.http
            .put(
                &format!(
                    "organizations/{org_unit_id}/dynamiccatalogs/{catalog_id}/suppliers/{supplier_id}"
                ),
                json!({}),
            )
            .await
    }

    /// Remove a supplier from a dynamic catalog.
    pub async fn remove_supplier_from_dynamic_catalog(
        &self,
        org_unit_id: &str,
        catalog_id: &str,
        supplier_id: &str,
    ) -> ApiResult<()> {
        require("orgUnitId", org_unit_id)?;
        require("catalogId", catalog_id)?;
        require("supplierId", supplier_id)?;
        self.http
            .delete(&format!(
                "organizations/{org_unit_id}/dynamiccatalogs/{catalog_id}/suppliers/{supplier_id}"
            ))
            .await?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Webhooks
    // -------------------------------------------------------------------------

    /// List webhooks for an organization.
    pub async fn list_webhooks(&self, org_unit_id: &str) -> ApiResult<Vec<Webhook>> {
        require("orgUnitId", org_unit_id)?;
        let response = self
            .http
            .get(
                &format!("organizations/{org_unit_id}/webhooks"),
                RequestOptions::new(),
            )
            .await?;
        Ok(hydrate_list(extract_list(response, "webhooks")))
    }

    /// Get a webhook.
    pub async fn get_webhook(&self, org_unit_id: &str, webhook_id: &str) -> ApiResult<Webhook> {
        require("orgUnitId", org_unit_id)?;
        require("webhookId", webhook_id)?;
        let response = self
            .http
            .get(
                &format!("organizations/{org_unit_id}/webhooks/{webhook_id}"),
                RequestOptions::new(),
            )
            .await?;
        Ok(Webhook::from_value(response))
    }

    /// Create a webhook subscribed to the given events
    /// (e.g. `catalog`, `program`).
    pub async fn create_webhook(
        &self,
        org_unit_id: &str,
        url: &str,
        events: &[&str],
    ) -> ApiResult<Webhook> {
        require("orgUnitId", org_unit_id)?;
        require("url", url)?;
        if events.is_empty() {
            return Err(crate::error::Error::missing_parameter("events"));
        }

        let response = self
            .http
            .post(
                &format!("organizations/{org_unit_id}/webhooks"),
                json!({"url": url, "events": events}),
            )
            .await?;
        Ok(Webhook::from_value(response))
    }

    /// Update a webhook. Only the supplied fields change.
    pub async fn update_webhook(
        &self,
        org_unit_id: &str,
        webhook_id: &str,
        url: Option<&str>,
        events: Option<&[&str]>,
        active: Option<bool>,
    ) -> ApiResult<Webhook> {
        require("orgUnitId", org_unit_id)?;
        require("webhookId", webhook_id)?;

        let mut data = serde_json::Map::new();
        if let Some(url) = url {
            data.insert("url".to_string(), Value::String(url.to_string()));
        }
        if let Some(events) = events {
            data.insert("events".to_string(), json!(events));
        }
        if let Some(active) = active {
            data.insert("active".to_string(), Value::Bool(active));
        }

        let response = self
            .http
            .patch(
                &format!("organizations/{org_unit_id}/webhooks/{webhook_id}"),
                Value::Object(data),
            )
            .await?;
        Ok(Webhook::from_value(response))
    }

    /// Delete a webhook.
    pub async fn delete_webhook(&self, org_unit_id: &str, webhook_id: &str) -> ApiResult<()> {
        require("orgUnitId", org_unit_id)?;
        require("webhookId", webhook_id)?;
        self.http
            .delete(&format!(
                "organizations/{org_unit_id}/webhooks/{webhook_id}"
            ))
            .await?;
        Ok(())
    }

    /// Trigger a test delivery for a webhook; returns the raw test
    /// result.
    pub async fn test_webhook(&self, org_unit_id: &str, webhook_id: &str) -> ApiResult<Value> {
        require("orgUnitId", org_unit_id)?;
        require("webhookId", webhook_id)?;
        self.http
            .post(
                &format!("organizations/{org_unit_id}/webhooks/{webhook_id}/test"),
                json!({}),
            )
            .await
    }
}
