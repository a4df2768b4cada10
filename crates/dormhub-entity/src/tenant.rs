//! Tenant lifecycle entities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use dormhub_core::types::{AccountId, RoomId, TenantId};

/// Where a tenant is in their stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenantStatus {
    /// Living in the dormitory.
    Active,
    /// Moved out; an archive record exists.
    CheckedOut,
    /// Registered but not yet moved in.
    Pending,
}

/// A tenant record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    /// Unique tenant identifier.
    pub id: TenantId,
    /// Linked login account, if the tenant has one.
    #[serde(default)]
    pub account_id: Option<AccountId>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Assigned room.
    #[serde(default)]
    pub room_id: Option<RoomId>,
    /// Move-in date.
    #[serde(default)]
    pub check_in_date: Option<NaiveDate>,
    /// Lifecycle state.
    pub status: TenantStatus,
}

impl Tenant {
    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body for creating or updating a tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantInput {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Room to assign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<RoomId>,
    /// Move-in date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<NaiveDate>,
}
