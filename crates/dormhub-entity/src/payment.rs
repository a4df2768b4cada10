//! Billing and payment entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use dormhub_core::types::{PaymentId, TenantId};

/// Settlement state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Settled.
    Paid,
    /// Billed, not yet settled.
    Pending,
    /// Past its due date.
    Overdue,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Overdue => "Overdue",
        };
        write!(f, "{s}")
    }
}

/// A payment recorded against a tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Unique payment identifier.
    pub id: PaymentId,
    /// The paying tenant.
    pub tenant_id: TenantId,
    /// Amount in the dormitory's currency.
    pub amount: f64,
    /// How the payment was made, e.g. `Cash` or `GCash`.
    #[serde(default)]
    pub method: Option<String>,
    /// Settlement state.
    pub status: PaymentStatus,
    /// When the payment was settled.
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    /// Billing period label, e.g. `2026-10`.
    #[serde(default)]
    pub period: Option<String>,
}

/// Body of `POST /payments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInput {
    /// The paying tenant.
    pub tenant_id: TenantId,
    /// Amount paid.
    pub amount: f64,
    /// How the payment was made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Billing period label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

/// Sum of settled payments.
pub fn total_paid(payments: &[Payment]) -> f64 {
    payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Paid)
        .map(|p| p.amount)
        .sum()
}
