//! The `(resource, action)` permission grant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single grant of `action` on `resource`.
///
/// Serialized as `{"resource": .., "action": ..}`; also accepted from the
/// backend in the compact `"resource:action"` form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "PermissionRepr")]
pub struct Permission {
    /// The guarded resource, e.g. `rooms` or `navigation`.
    pub resource: String,
    /// The action on the resource, e.g. `read` or a navigation slug.
    pub action: String,
}

impl Permission {
    /// Create a new permission grant.
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    /// Whether this grant is exactly `(resource, action)`.
    pub fn matches(&self, resource: &str, action: &str) -> bool {
        self.resource == resource && self.action == action
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource, self.action)
    }
}

impl FromStr for Permission {
    type Err = dormhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((resource, action)) if !resource.is_empty() && !action.is_empty() => {
                Ok(Self::new(resource, action))
            }
            _ => Err(dormhub_core::AppError::validation(format!(
                "Invalid permission '{s}'. Expected 'resource:action'"
            ))),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PermissionRepr {
    Pair { resource: String, action: String },
    Compact(String),
}

impl TryFrom<PermissionRepr> for Permission {
    type Error = dormhub_core::AppError;

    fn try_from(repr: PermissionRepr) -> Result<Self, Self::Error> {
        match repr {
            PermissionRepr::Pair { resource, action } => Ok(Self { resource, action }),
            PermissionRepr::Compact(text) => text.parse(),
        }
    }
}
