//! Navigation catalog entries and per-admin assignments.

use serde::{Deserialize, Serialize};

use dormhub_core::types::{AccountId, NavigationItemId};

/// One dashboard section that can be toggled for an Admin account.
///
/// `name` is the section slug used as the action of a `navigation`
/// permission, e.g. `rooms` for `navigation:rooms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Catalog identifier.
    pub id: NavigationItemId,
    /// Section slug.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
}

/// The navigation items granted to one Admin account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminNavigationPermission {
    /// The Admin account.
    pub account_id: AccountId,
    /// Granted catalog entries.
    #[serde(default)]
    pub navigation_item_ids: Vec<NavigationItemId>,
}
