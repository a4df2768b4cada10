//! Billing endpoints.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use dormhub_core::result::AppResult;
use dormhub_core::types::{PaymentId, TenantId};
use dormhub_entity::payment::{Payment, PaymentInput, PaymentStatus};

use crate::api::ApiClient;

#[derive(Debug, Serialize)]
struct StatusUpdate {
    status: PaymentStatus,
}

/// Manages payments.
#[derive(Debug, Clone)]
pub struct PaymentService {
    api: Arc<ApiClient>,
}

impl PaymentService {
    /// Creates a new payment service.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Lists payments visible to the caller.
    pub async fn list(&self) -> AppResult<Vec<Payment>> {
        self.api.get("/payments").await
    }

    /// Payments of one tenant.
    pub async fn for_tenant(&self, tenant_id: TenantId) -> AppResult<Vec<Payment>> {
        self.api.get(&format!("/payments/tenant/{tenant_id}")).await
    }

    /// Records a new payment.
    pub async fn record(&self, input: &PaymentInput) -> AppResult<Payment> {
        let payment: Payment = self.api.post("/payments", input).await?;
        info!(
            payment_id = %payment.id,
            tenant_id = %payment.tenant_id,
            amount = payment.amount,
            "Payment recorded"
        );
        Ok(payment)
    }

    pub async fn update_status(&self, id: PaymentId, status: PaymentStatus) -> AppResult<Payment> {
        self.api
            .put(&format!("/payments/{id}/status"), &StatusUpdate { status })
            .await
    }
}
