//! In-app notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dormhub_core::types::NotificationId;

/// A notification addressed to the current account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// Short heading.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Whether the recipient has seen it.
    #[serde(default)]
    pub is_read: bool,
    /// When it was created.
    pub created_at: DateTime<Utc>,
}

/// Number of unread notifications in a list.
pub fn unread(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}
