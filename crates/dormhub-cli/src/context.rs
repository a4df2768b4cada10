//! Wiring shared by every command: client, services, authenticator.

use std::sync::Arc;

use tracing::debug;

use dormhub_auth::guard::{Access, Guard};
use dormhub_auth::session::{
    CredentialStorage, MemoryCredentialStorage, MemorySessionStore, Session, SessionStore,
    StorageKey,
};
use dormhub_auth::{Authenticator, LoginOutcome};
use dormhub_client::{ApiClient, Dashboard, RestAuthBackend, Services};
use dormhub_core::config::AppConfig;
use dormhub_core::error::AppError;
use dormhub_core::result::AppResult;

/// How the process should obtain a session.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
}

/// Everything a command needs, built once per process.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub api: Arc<ApiClient>,
    pub services: Services,
    pub auth: Authenticator,
    sessions: Arc<dyn SessionStore>,
}

impl AppContext {
    /// Build the context over fresh in-memory stores.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let storage: Arc<dyn CredentialStorage> = Arc::new(MemoryCredentialStorage::new());
        let sessions: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());

        let api = Arc::new(ApiClient::new(
            &config.api,
            Arc::clone(&storage),
            Arc::clone(&sessions),
        )?);
        let services = Services::new(Arc::clone(&api));
        let backend = Arc::new(RestAuthBackend::new(services.accounts.clone()));
        let auth = Authenticator::with_epochs(backend, Arc::clone(&sessions), storage, api.epochs());

        Ok(Self {
            config,
            api,
            services,
            auth,
            sessions,
        })
    }

    /// Current session snapshot.
    pub fn session(&self) -> Arc<Session> {
        self.sessions.get_session()
    }

    /// Access predicates over the current session.
    pub fn access(&self) -> Access {
        Access::from_store(self.sessions.as_ref())
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(self.services.clone())
    }

    /// Establish a session from a stored token or email and password.
    ///
    /// A token takes precedence. A missing password is prompted for.
    pub async fn sign_in(&self, credentials: &Credentials) -> AppResult<Arc<Session>> {
        if let Some(token) = &credentials.token {
            self.auth.storage().set(StorageKey::Token, token.clone());
            if self.auth.initialize().await {
                return Ok(self.session());
            }
            return Err(AppError::authentication(
                "The provided token was rejected. Please log in again.",
            ));
        }

        let email = match &credentials.email {
            Some(e) => e.clone(),
            None => dialoguer::Input::new()
                .with_prompt("Email")
                .interact_text()
                .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
        };

        let password = match &credentials.password {
            Some(p) => p.clone(),
            None => dialoguer::Password::new()
                .with_prompt("Password")
                .interact()
                .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
        };

        debug!(email = %email, "Signing in");

        match self.auth.login(&email, &password).await {
            LoginOutcome::Success { .. } => Ok(self.session()),
            LoginOutcome::Failure(failure) => {
                let mut err = AppError::authentication(failure.error);
                if let Some(details) = failure.details {
                    err = err.with_details(details);
                }
                Err(err)
            }
        }
    }

    /// Fail with an authorization error unless `guard` passes.
    pub fn require(&self, guard: &Guard, action: &str) -> AppResult<()> {
        if guard.allows(self.access().resolver()) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Your account is not allowed to {}",
                action
            )))
        }
    }
}
