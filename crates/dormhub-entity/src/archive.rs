//! Checkout archive records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use dormhub_core::types::{ArchiveId, TenantId};

/// The record left behind when a tenant checks out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveRecord {
    /// Unique archive identifier.
    pub id: ArchiveId,
    /// The tenant who left.
    pub tenant_id: TenantId,
    /// Tenant name at the time of checkout.
    pub tenant_name: String,
    /// Room the tenant vacated.
    #[serde(default)]
    pub room_number: Option<String>,
    /// Move-out date.
    pub check_out_date: NaiveDate,
    /// Free-text reason.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Body of `POST /archives/checkout/:tenantId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// Move-out date; the backend defaults to today.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<NaiveDate>,
    /// Free-text reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
