//! In-app notification endpoints.

use std::sync::Arc;

use serde::Deserialize;

use dormhub_core::result::AppResult;
use dormhub_core::types::NotificationId;
use dormhub_entity::notification::Notification;

use crate::api::ApiClient;

#[derive(Debug, Deserialize)]
struct UnreadCount {
    count: u64,
}

/// Reads and acknowledges notifications.
#[derive(Debug, Clone)]
pub struct NotificationService {
    api: Arc<ApiClient>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> AppResult<Vec<Notification>> {
        self.api.get("/notifications").await
    }

    pub async fn unread_count(&self) -> AppResult<u64> {
        let body: UnreadCount = self.api.get("/notifications/unread-count").await?;
        Ok(body.count)
    }

    pub async fn mark_read(&self, id: NotificationId) -> AppResult<()> {
        self.api
            .put_no_content(&format!("/notifications/{id}/read"), &serde_json::json!({}))
            .await
    }

    pub async fn mark_all_read(&self) -> AppResult<()> {
        self.api
            .put_no_content("/notifications/read-all", &serde_json::json!({}))
            .await
    }
}
