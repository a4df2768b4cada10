//! Widget payloads rendered inside dashboard sections.

use serde::{Deserialize, Serialize};

use dormhub_entity::account::Account;
use dormhub_entity::archive::ArchiveRecord;
use dormhub_entity::notification::Notification;
use dormhub_entity::payment::Payment;
use dormhub_entity::permission::NavigationItem;
use dormhub_entity::room::Room;
use dormhub_entity::tenant::Tenant;

/// A labelled figure on an overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

impl Stat {
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
        }
    }
}

/// Loaded content of one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Widget {
    Overview(Vec<Stat>),
    Rooms(Vec<Room>),
    Tenants(Vec<Tenant>),
    Payments(Vec<Payment>),
    Archives(Vec<ArchiveRecord>),
    Accounts(Vec<Account>),
    Navigation(Vec<NavigationItem>),
    Notifications(Vec<Notification>),
}

impl Widget {
    /// Number of rows the widget would render.
    pub fn len(&self) -> usize {
        match self {
            Self::Overview(v) => v.len(),
            Self::Rooms(v) => v.len(),
            Self::Tenants(v) => v.len(),
            Self::Payments(v) => v.len(),
            Self::Archives(v) => v.len(),
            Self::Accounts(v) => v.len(),
            Self::Navigation(v) => v.len(),
            Self::Notifications(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
