//! # dormhub-client
//!
//! Typed access to the DormHub backend.
//!
//! ## Modules
//!
//! - `api`: reqwest client with bearer auth and the 401 interceptor
//! - `services`: thin REST wrappers per domain
//! - `backend`: `AuthBackend` implementation over the account endpoints
//! - `poller`: interval-driven notification polling
//! - `dashboard`: per-role dashboard shells and concurrent widget loading
//! - `routing`: hash routes and the server-side hash redirect
//! - `notice`: user-facing error notices

pub mod api;
pub mod backend;
pub mod dashboard;
pub mod notice;
pub mod poller;
pub mod routing;
pub mod services;

pub use api::ApiClient;
pub use backend::RestAuthBackend;
pub use dashboard::{Dashboard, DashboardKind, DashboardSnapshot, Panel, Section, Widget};
pub use notice::ErrorNotice;
pub use poller::{NotificationPoller, NotificationSnapshot};
pub use routing::{Route, hash_redirect};
pub use services::Services;
