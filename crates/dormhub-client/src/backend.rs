//! HTTP implementation of the authenticator's backend.

use async_trait::async_trait;

use dormhub_auth::authenticator::AuthBackend;
use dormhub_core::result::AppResult;
use dormhub_entity::account::{Account, AuthenticatedAccount, Profile, RegisterRequest};

use crate::services::AccountService;

/// [`AuthBackend`] over the account endpoints.
#[derive(Debug, Clone)]
pub struct RestAuthBackend {
    accounts: AccountService,
}

impl RestAuthBackend {
    pub fn new(accounts: AccountService) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl AuthBackend for RestAuthBackend {
    async fn authenticate(&self, email: &str, password: &str) -> AppResult<AuthenticatedAccount> {
        self.accounts.authenticate(email, password).await
    }

    async fn profile(&self, token: &str) -> AppResult<Profile> {
        self.accounts.test_auth(token).await
    }

    async fn register(&self, request: &RegisterRequest) -> AppResult<Account> {
        self.accounts.register(request).await
    }
}
