//! Navigation control: which dashboard sections each Admin account sees.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use dormhub_core::result::AppResult;
use dormhub_core::types::{AccountId, NavigationItemId};
use dormhub_entity::permission::{AdminNavigationPermission, NavigationItem};

use crate::api::ApiClient;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Assignment<'a> {
    navigation_item_ids: &'a [NavigationItemId],
}

/// Reads the navigation catalog and assigns sections to Admin accounts.
#[derive(Debug, Clone)]
pub struct NavigationService {
    api: Arc<ApiClient>,
}

impl NavigationService {
    /// Creates a new navigation service.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// The full catalog of sections.
    pub async fn items(&self) -> AppResult<Vec<NavigationItem>> {
        self.api.get("/navigation/items").await
    }

    /// Sections currently assigned to `account_id`.
    pub async fn admin_permissions(&self, account_id: AccountId) -> AppResult<AdminNavigationPermission> {
        self.api
            .get(&format!("/navigation/admin-permissions/{account_id}"))
            .await
    }

    /// Replaces the sections assigned to `account_id`.
    pub async fn set_admin_permissions(
        &self,
        account_id: AccountId,
        item_ids: &[NavigationItemId],
    ) -> AppResult<AdminNavigationPermission> {
        let updated: AdminNavigationPermission = self
            .api
            .put(
                &format!("/navigation/admin-permissions/{account_id}"),
                &Assignment {
                    navigation_item_ids: item_ids,
                },
            )
            .await?;
        info!(
            account_id = %account_id,
            items = updated.navigation_item_ids.len(),
            "Navigation permissions updated"
        );
        Ok(updated)
    }
}
