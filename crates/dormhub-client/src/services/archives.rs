//! Tenant checkout and the resulting archive.

use std::sync::Arc;

use tracing::info;

use dormhub_core::result::AppResult;
use dormhub_core::types::{ArchiveId, TenantId};
use dormhub_entity::archive::{ArchiveRecord, CheckoutRequest};

use crate::api::ApiClient;

/// Manages checkout archives.
#[derive(Debug, Clone)]
pub struct ArchiveService {
    api: Arc<ApiClient>,
}

impl ArchiveService {
    /// Creates a new archive service.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> AppResult<Vec<ArchiveRecord>> {
        self.api.get("/archives").await
    }

    pub async fn get(&self, id: ArchiveId) -> AppResult<ArchiveRecord> {
        self.api.get(&format!("/archives/{id}")).await
    }

    /// Checks a tenant out, frees their room, and archives the record.
    pub async fn checkout_tenant(
        &self,
        tenant_id: TenantId,
        request: &CheckoutRequest,
    ) -> AppResult<ArchiveRecord> {
        let record: ArchiveRecord = self
            .api
            .post(&format!("/tenants/{tenant_id}/checkout"), request)
            .await?;
        info!(tenant_id = %tenant_id, archive_id = %record.id, "Tenant checked out");
        Ok(record)
    }
}
