//! Login, logout, refresh, and boot-time token validation.

pub mod backend;
pub mod classify;
pub mod service;

pub use backend::AuthBackend;
pub use classify::{FailureKind, LoginFailure, LoginOutcome};
pub use service::Authenticator;
