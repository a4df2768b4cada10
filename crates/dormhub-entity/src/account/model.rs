//! Account entity model and authentication payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use dormhub_core::types::AccountId;

use super::role::Role;
use super::status::AccountStatus;
use crate::permission::Permission;

/// A registered account as returned by `/accounts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique account identifier.
    pub id: AccountId,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Login email address.
    pub email: String,
    /// Role name, spelled as the backend spells it.
    pub role: String,
    /// Approval status.
    pub status: AccountStatus,
    /// When the account was registered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Display name, falling back to the email when no name is set.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }

    /// The roles this account holds. The backend assigns exactly one.
    pub fn roles(&self) -> Vec<Role> {
        if self.role.is_empty() {
            Vec::new()
        } else {
            vec![Role::new(self.role.clone())]
        }
    }
}

/// Response of `POST /accounts/authenticate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedAccount {
    /// The account that logged in.
    #[serde(flatten)]
    pub account: Account,
    /// Bearer token for subsequent requests.
    #[serde(alias = "jwtToken")]
    pub token: String,
    /// Refresh token, when the backend issues one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Direct permission grants.
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

/// Response of `GET /test-auth`: the account behind a token and its grants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// The account the token belongs to.
    #[serde(alias = "account")]
    pub user: Account,
    /// Direct permission grants.
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

/// Body of `POST /accounts/register`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Given name.
    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 100, message = "Last name is required"))]
    pub last_name: String,
    /// Login email address.
    #[validate(email(message = "Email address is not valid"))]
    pub email: String,
    /// Chosen password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
    /// Must equal `password`. Checked locally, never sent.
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    #[serde(default, skip_serializing)]
    pub confirm_password: String,
    /// Requested role; the backend defaults to `Tenant`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}
