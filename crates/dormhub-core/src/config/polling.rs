//! Background polling configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Intervals for the dashboard pollers.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PollingConfig {
    /// Seconds between notification polls.
    #[serde(default = "default_notification_interval")]
    #[validate(range(min = 1, max = 3600))]
    pub notification_interval_seconds: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            notification_interval_seconds: default_notification_interval(),
        }
    }
}

fn default_notification_interval() -> u64 {
    30
}
