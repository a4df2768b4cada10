//! Account status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Approval status of an account.
///
/// Statuses the client does not know are preserved verbatim in
/// [`AccountStatus::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountStatus {
    /// Approved and allowed to log in.
    Active,
    /// Registered, waiting for an administrator.
    Pending,
    /// Temporarily blocked by an administrator.
    Suspended,
    /// Registration was refused.
    Rejected,
    /// Soft-deleted.
    Deleted,
    /// Any other value sent by the backend.
    Other(String),
}

impl AccountStatus {
    /// Check if an account with this status may hold a session.
    pub fn can_login(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Return the status exactly as the backend spells it.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Suspended => "Suspended",
            Self::Rejected => "Rejected",
            Self::Deleted => "Deleted",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for AccountStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Active" => Self::Active,
            "Pending" => Self::Pending,
            "Suspended" => Self::Suspended,
            "Rejected" => Self::Rejected,
            "Deleted" => Self::Deleted,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for AccountStatus {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<AccountStatus> for String {
    fn from(status: AccountStatus) -> Self {
        match status {
            AccountStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
