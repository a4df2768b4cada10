//! The backend calls the authenticator depends on.

use async_trait::async_trait;

use dormhub_core::result::AppResult;
use dormhub_entity::account::{Account, AuthenticatedAccount, Profile, RegisterRequest};

/// Authentication endpoints of the backend.
///
/// Implemented over HTTP by the client crate and by in-memory fakes in tests.
#[async_trait]
pub trait AuthBackend: Send + Sync + std::fmt::Debug {
    /// Exchange credentials for a token and account (`POST /accounts/authenticate`).
    async fn authenticate(&self, email: &str, password: &str) -> AppResult<AuthenticatedAccount>;

    /// Resolve the account and grants behind `token` (`GET /test-auth`).
    async fn profile(&self, token: &str) -> AppResult<Profile>;

    /// Create a new account (`POST /accounts/register`).
    async fn register(&self, request: &RegisterRequest) -> AppResult<Account>;
}
