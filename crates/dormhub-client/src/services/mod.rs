//! Domain services, one per backend resource.

pub mod accounts;
pub mod archives;
pub mod navigation;
pub mod notifications;
pub mod payments;
pub mod rooms;
pub mod tenants;

use std::sync::Arc;

pub use accounts::AccountService;
pub use archives::ArchiveService;
pub use navigation::NavigationService;
pub use notifications::NotificationService;
pub use payments::PaymentService;
pub use rooms::RoomService;
pub use tenants::TenantService;

use crate::api::ApiClient;

/// Every domain service over one shared client.
#[derive(Debug, Clone)]
pub struct Services {
    pub accounts: AccountService,
    pub rooms: RoomService,
    pub tenants: TenantService,
    pub payments: PaymentService,
    pub archives: ArchiveService,
    pub notifications: NotificationService,
    pub navigation: NavigationService,
}

impl Services {
    /// Creates all services over `api`.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            accounts: AccountService::new(Arc::clone(&api)),
            rooms: RoomService::new(Arc::clone(&api)),
            tenants: TenantService::new(Arc::clone(&api)),
            payments: PaymentService::new(Arc::clone(&api)),
            archives: ArchiveService::new(Arc::clone(&api)),
            notifications: NotificationService::new(Arc::clone(&api)),
            navigation: NavigationService::new(api),
        }
    }
}
