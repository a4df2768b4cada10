//! Tenant lifecycle endpoints.

use std::sync::Arc;

use tracing::info;

use dormhub_core::result::AppResult;
use dormhub_core::types::TenantId;
use dormhub_entity::tenant::{Tenant, TenantInput};

use crate::api::ApiClient;

/// Manages tenant records.
#[derive(Debug, Clone)]
pub struct TenantService {
    api: Arc<ApiClient>,
}

impl TenantService {
    /// Creates a new tenant service.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> AppResult<Vec<Tenant>> {
        self.api.get("/tenants").await
    }

    pub async fn get(&self, id: TenantId) -> AppResult<Tenant> {
        self.api.get(&format!("/tenants/{id}")).await
    }

    pub async fn create(&self, input: &TenantInput) -> AppResult<Tenant> {
        let tenant: Tenant = self.api.post("/tenants", input).await?;
        info!(tenant_id = %tenant.id, "Tenant created");
        Ok(tenant)
    }

    pub async fn update(&self, id: TenantId, input: &TenantInput) -> AppResult<Tenant> {
        self.api.put(&format!("/tenants/{id}"), input).await
    }

    pub async fn delete(&self, id: TenantId) -> AppResult<()> {
        self.api.delete(&format!("/tenants/{id}")).await?;
        info!(tenant_id = %id, "Tenant deleted");
        Ok(())
    }
}
