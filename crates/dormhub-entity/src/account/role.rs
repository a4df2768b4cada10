//! Role names and role membership.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of role names known to the backend.
///
/// Roles are ordered by trust: HeadAdmin > SuperAdmin > Admin, with
/// Accounting and Tenant as separate, non-administrative tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleName {
    /// Highest trust tier; bypasses every permission check.
    HeadAdmin,
    /// Bypasses every check except admin management.
    SuperAdmin,
    /// Dormitory administrator; sections are toggled per account.
    Admin,
    /// Billing and payment staff.
    Accounting,
    /// A resident.
    Tenant,
}

impl RoleName {
    /// Every role, most privileged first.
    pub const ALL: [RoleName; 5] = [
        Self::HeadAdmin,
        Self::SuperAdmin,
        Self::Admin,
        Self::Accounting,
        Self::Tenant,
    ];

    /// Return the role exactly as the backend spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HeadAdmin => "HeadAdmin",
            Self::SuperAdmin => "SuperAdmin",
            Self::Admin => "Admin",
            Self::Accounting => "Accounting",
            Self::Tenant => "Tenant",
        }
    }
}

impl AsRef<str> for RoleName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoleName {
    type Err = dormhub_core::AppError;

    /// Role names are case-sensitive: `"admin"` is not `Admin`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| {
                dormhub_core::AppError::validation(format!(
                    "Invalid role: '{s}'. Expected one of: HeadAdmin, SuperAdmin, Admin, Accounting, Tenant"
                ))
            })
    }
}

/// A role held by the current user.
///
/// The name is kept as the raw string the backend sent, so comparisons stay
/// exact even for names outside [`RoleName`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Role {
    /// Role name as sent by the backend.
    pub name: String,
}

impl Role {
    /// Create a role from any name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The known role this entry names, if any.
    pub fn known(&self) -> Option<RoleName> {
        self.name.parse().ok()
    }
}

impl From<RoleName> for Role {
    fn from(name: RoleName) -> Self {
        Self::new(name.as_str())
    }
}
