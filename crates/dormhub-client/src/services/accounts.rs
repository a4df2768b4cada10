//! Account endpoints: authentication, registration, and approval.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use dormhub_core::result::AppResult;
use dormhub_core::types::AccountId;
use dormhub_entity::account::{
    Account, AccountStatus, AuthenticatedAccount, Profile, RegisterRequest,
};

use crate::api::ApiClient;

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct StatusUpdate<'a> {
    status: &'a AccountStatus,
}

/// Manages accounts.
#[derive(Debug, Clone)]
pub struct AccountService {
    api: Arc<ApiClient>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Exchanges credentials for a token and the account.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<AuthenticatedAccount> {
        self.api
            .post("/accounts/authenticate", &Credentials { email, password })
            .await
    }

    /// Submits a registration. The new account starts `Pending`.
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<Account> {
        self.api.post("/accounts/register", request).await
    }

    /// Lists every account.
    pub async fn list(&self) -> AppResult<Vec<Account>> {
        self.api.get("/accounts").await
    }

    /// Accounts waiting for approval.
    pub async fn pending(&self) -> AppResult<Vec<Account>> {
        let accounts = self.list().await?;
        Ok(accounts
            .into_iter()
            .filter(|a| a.status == AccountStatus::Pending)
            .collect())
    }

    /// Gets an account by ID.
    pub async fn get(&self, id: AccountId) -> AppResult<Account> {
        self.api.get(&format!("/accounts/{id}")).await
    }

    /// Approves, suspends, or rejects an account.
    pub async fn update_status(&self, id: AccountId, status: AccountStatus) -> AppResult<Account> {
        let account: Account = self
            .api
            .put(&format!("/accounts/{id}/status"), &StatusUpdate { status: &status })
            .await?;
        info!(account_id = %id, status = %status, "Account status updated");
        Ok(account)
    }

    /// Deletes an account.
    pub async fn delete(&self, id: AccountId) -> AppResult<()> {
        self.api.delete(&format!("/accounts/{id}")).await?;
        info!(account_id = %id, "Account deleted");
        Ok(())
    }

    /// Resolves the account and grants behind `token`.
    pub async fn test_auth(&self, token: &str) -> AppResult<Profile> {
        self.api.get_with_token("/test-auth", token).await
    }
}
