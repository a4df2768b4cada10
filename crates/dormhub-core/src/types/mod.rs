//! Shared types: typed identifiers and the backend error body.

pub mod id;
pub mod response;

pub use id::{AccountId, ArchiveId, NavigationItemId, NotificationId, PaymentId, RoomId, TenantId};
pub use response::ApiErrorResponse;
