//! The login flow. Apart from the 401 hook, this is the only writer of the session store.

use std::sync::Arc;

use tracing::{debug, info, warn};
use validator::Validate;

use dormhub_core::error::AppError;
use dormhub_core::result::AppResult;
use dormhub_entity::account::{Account, Profile, RegisterRequest};

use crate::epoch::EpochCounter;
use crate::session::{CredentialStorage, Session, SessionStore, StorageKey};

use super::backend::AuthBackend;
use super::classify::{LoginFailure, LoginOutcome};

/// Drives the session lifecycle against the backend.
///
/// Every async operation takes an epoch before its request; `logout` and
/// later operations advance the epoch so a late response cannot overwrite
/// newer state. Share the counter with anything else that ends the session
/// (see [`Authenticator::with_epochs`]).
#[derive(Debug, Clone)]
pub struct Authenticator {
    /// Backend authentication endpoints.
    backend: Arc<dyn AuthBackend>,
    /// Current session.
    sessions: Arc<dyn SessionStore>,
    /// Persisted credentials.
    storage: Arc<dyn CredentialStorage>,
    /// Request generations.
    epochs: Arc<EpochCounter>,
}

impl Authenticator {
    /// Creates a new authenticator over the injected stores.
    pub fn new(
        backend: Arc<dyn AuthBackend>,
        sessions: Arc<dyn SessionStore>,
        storage: Arc<dyn CredentialStorage>,
    ) -> Self {
        Self {
            backend,
            sessions,
            storage,
            epochs: Arc::new(EpochCounter::new()),
        }
    }

    /// Creates an authenticator whose in-flight operations are also
    /// invalidated by whoever else advances `epochs`.
    pub fn with_epochs(
        backend: Arc<dyn AuthBackend>,
        sessions: Arc<dyn SessionStore>,
        storage: Arc<dyn CredentialStorage>,
        epochs: Arc<EpochCounter>,
    ) -> Self {
        Self {
            backend,
            sessions,
            storage,
            epochs,
        }
    }

    /// The session store this authenticator writes to.
    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    /// The credential storage this authenticator writes to.
    pub fn storage(&self) -> &Arc<dyn CredentialStorage> {
        &self.storage
    }

    /// Validates a stored token at startup.
    ///
    /// Returns whether the session is authenticated afterwards. A rejected
    /// token is dropped silently; no error reaches the caller.
    pub async fn initialize(&self) -> bool {
        let Some(token) = self.storage.token() else {
            debug!("No stored token; starting logged out");
            return false;
        };

        let epoch = self.epochs.advance();
        let result = self.backend.profile(&token).await;

        if !self.epochs.is_current(epoch) {
            debug!(epoch = epoch.value(), "Discarding stale token validation");
            return self.sessions.get_session().is_authenticated;
        }

        match result {
            Ok(profile) if profile.user.status.can_login() => {
                info!(account_id = %profile.user.id, "Stored token accepted");
                self.apply_profile(profile)
            }
            Ok(profile) => {
                debug!(status = %profile.user.status, "Stored token belongs to an inactive account");
                self.clear_local();
                false
            }
            Err(e) => {
                debug!(error = %e, "Stored token rejected");
                self.clear_local();
                false
            }
        }
    }

    /// Logs in with email and password.
    ///
    /// Credentials are persisted only when the account is `Active`.
    pub async fn login(&self, email: &str, password: &str) -> LoginOutcome {
        let epoch = self.epochs.advance();
        let result = self.backend.authenticate(email, password).await;

        // A refused login writes nothing, so it is reported even when stale.
        let auth = match result {
            Ok(auth) => auth,
            Err(e) => {
                let failure = LoginFailure::from_error(&e);
                warn!(kind = %failure.kind, error = %e, "Login failed");
                return LoginOutcome::Failure(failure);
            }
        };

        if !self.epochs.is_current(epoch) {
            debug!(epoch = epoch.value(), "Discarding superseded login");
            return LoginOutcome::Failure(LoginFailure::cancelled());
        }

        if !auth.account.status.can_login() {
            info!(
                account_id = %auth.account.id,
                status = %auth.account.status,
                "Login refused for inactive account"
            );
            return LoginOutcome::Failure(LoginFailure::for_status(auth.account.status));
        }

        self.storage.set(StorageKey::Token, auth.token);
        match auth.refresh_token {
            Some(refresh) => self.storage.set(StorageKey::RefreshToken, refresh),
            None => self.storage.remove(StorageKey::RefreshToken),
        }
        self.store_user(&auth.account);
        self.sessions
            .replace_session(Session::authenticated(auth.account.clone(), auth.permissions));

        info!(account_id = %auth.account.id, role = %auth.account.role, "Logged in");

        LoginOutcome::Success { user: auth.account }
    }

    /// Clears the session and stored credentials. Safe to call repeatedly.
    pub fn logout(&self) {
        self.epochs.advance();
        self.clear_local();
        info!("Logged out");
    }

    /// Re-fetches the user and grants; any failure forces a logout.
    pub async fn refresh_auth(&self) -> AppResult<Arc<Session>> {
        let epoch = self.epochs.advance();

        let Some(token) = self.storage.token() else {
            self.clear_local();
            return Err(AppError::session("No stored token"));
        };

        let result = self.backend.profile(&token).await;

        if !self.epochs.is_current(epoch) {
            debug!(epoch = epoch.value(), "Discarding superseded session refresh");
            return Err(result.err().unwrap_or_else(superseded));
        }

        match result {
            Ok(profile) if profile.user.status.can_login() => {
                if self.apply_profile(profile) {
                    Ok(self.sessions.get_session())
                } else {
                    Err(AppError::session("Session ended during refresh"))
                }
            }
            Ok(profile) => {
                warn!(status = %profile.user.status, "Account no longer active; logging out");
                self.clear_local();
                Err(AppError::authentication(format!(
                    "Account is no longer active (status: {})",
                    profile.user.status
                )))
            }
            Err(e) => {
                warn!(error = %e, "Session refresh failed; logging out");
                self.clear_local();
                Err(e)
            }
        }
    }

    /// Re-fetches the grants; a failure leaves the session untouched.
    pub async fn refresh_permissions(&self) -> AppResult<Arc<Session>> {
        let token = self
            .storage
            .token()
            .ok_or_else(|| AppError::session("No stored token"))?;

        let epoch = self.epochs.advance();
        let profile = self.backend.profile(&token).await.map_err(|e| {
            warn!(error = %e, "Permission refresh failed; keeping current session");
            e
        })?;

        if !self.epochs.is_current(epoch) {
            debug!(epoch = epoch.value(), "Discarding superseded permission refresh");
            return Err(superseded());
        }

        if !profile.user.status.can_login() {
            warn!(status = %profile.user.status, "Account no longer active; keeping current session");
            return Err(AppError::authentication(format!(
                "Account is no longer active (status: {})",
                profile.user.status
            )));
        }

        if !self.apply_profile(profile) {
            return Err(AppError::session("Session ended during refresh"));
        }
        Ok(self.sessions.get_session())
    }

    /// Validates and submits a registration.
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<Account> {
        request.validate()?;
        let account = self.backend.register(request).await?;
        info!(account_id = %account.id, status = %account.status, "Registered account");
        Ok(account)
    }

    /// Installs `profile` as the session. Refused once the token is gone.
    fn apply_profile(&self, profile: Profile) -> bool {
        if self.storage.token().is_none() {
            debug!(account_id = %profile.user.id, "Token cleared while in flight; not restoring session");
            return false;
        }
        self.store_user(&profile.user);
        self.sessions
            .replace_session(Session::authenticated(profile.user, profile.permissions));
        true
    }

    fn store_user(&self, account: &Account) {
        match serde_json::to_string(account) {
            Ok(json) => self.storage.set(StorageKey::User, json),
            Err(e) => warn!(error = %e, "Failed to encode user for storage"),
        }
    }

    fn clear_local(&self) {
        self.storage.clear();
        self.sessions.clear_session();
    }
}

fn superseded() -> AppError {
    AppError::session("Refresh superseded by a newer request")
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;

    use dormhub_core::types::AccountId;
    use dormhub_entity::account::{AccountStatus, AuthenticatedAccount};
    use dormhub_entity::permission::Permission;

    use crate::authenticator::FailureKind;
    use crate::session::{MemoryCredentialStorage, MemorySessionStore};

    #[derive(Debug, Default)]
    struct FakeBackend {
        login: Mutex<Option<AppResult<AuthenticatedAccount>>>,
        profile: Mutex<Option<AppResult<Profile>>>,
        /// Advanced while a profile request is in flight.
        advance_on_profile: Mutex<Option<Arc<EpochCounter>>>,
        /// Wiped while a profile request is in flight.
        wipe_on_profile: Mutex<Option<(Arc<MemoryCredentialStorage>, Arc<MemorySessionStore>)>>,
    }

    impl FakeBackend {
        fn with_login(result: AppResult<AuthenticatedAccount>) -> Self {
            Self {
                login: Mutex::new(Some(result)),
                ..Self::default()
            }
        }

        fn set_profile(&self, result: AppResult<Profile>) {
            *self.profile.lock().unwrap() = Some(result);
        }
    }

    #[async_trait]
    impl AuthBackend for FakeBackend {
        async fn authenticate(&self, _: &str, _: &str) -> AppResult<AuthenticatedAccount> {
            self.login
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(AppError::internal("unexpected login")))
        }

        async fn profile(&self, _: &str) -> AppResult<Profile> {
            if let Some(epochs) = self.advance_on_profile.lock().unwrap().as_ref() {
                epochs.advance();
            }
            if let Some((storage, sessions)) = self.wipe_on_profile.lock().unwrap().as_ref() {
                storage.clear();
                sessions.clear_session();
            }
            self.profile
                .lock()
                .unwrap()
                .clone()
                .unwrap_or_else(|| Err(AppError::internal("unexpected profile")))
        }

        async fn register(&self, request: &RegisterRequest) -> AppResult<Account> {
            Ok(account(&request.email, "Tenant", AccountStatus::Pending))
        }
    }

    fn account(email: &str, role: &str, status: AccountStatus) -> Account {
        Account {
            id: AccountId(5),
            first_name: "Test".into(),
            last_name: "User".into(),
            email: email.into(),
            role: role.into(),
            status,
            created_at: None,
        }
    }

    fn authenticated(status: AccountStatus) -> AuthenticatedAccount {
        AuthenticatedAccount {
            account: account("t@dorm.test", "Admin", status),
            token: "tok-1".into(),
            refresh_token: Some("ref-1".into()),
            permissions: vec![Permission::new("navigation", "rooms")],
        }
    }

    fn setup(
        backend: FakeBackend,
    ) -> (
        Authenticator,
        Arc<FakeBackend>,
        Arc<MemorySessionStore>,
        Arc<MemoryCredentialStorage>,
    ) {
        let backend = Arc::new(backend);
        let sessions = Arc::new(MemorySessionStore::new());
        let storage = Arc::new(MemoryCredentialStorage::new());
        let auth = Authenticator::new(backend.clone(), sessions.clone(), storage.clone());
        (auth, backend, sessions, storage)
    }

    #[tokio::test]
    async fn test_active_login_persists_token() {
        let (auth, _, sessions, storage) =
            setup(FakeBackend::with_login(Ok(authenticated(AccountStatus::Active))));

        let outcome = auth.login("t@dorm.test", "pw").await;

        assert!(outcome.is_success());
        assert_eq!(outcome.user().unwrap().email, "t@dorm.test");
        assert_eq!(storage.token().as_deref(), Some("tok-1"));
        assert_eq!(storage.get(StorageKey::RefreshToken).as_deref(), Some("ref-1"));
        assert!(storage.get(StorageKey::User).is_some());

        let session = sessions.get_session();
        assert!(session.is_authenticated);
        assert_eq!(session.permission_count(), 1);
        assert_eq!(session.roles[0].name, "Admin");
    }

    #[tokio::test]
    async fn test_pending_login_does_not_persist_token() {
        let (auth, _, sessions, storage) =
            setup(FakeBackend::with_login(Ok(authenticated(AccountStatus::Pending))));

        let outcome = auth.login("t@dorm.test", "pw").await;

        let failure = outcome.failure().expect("login should fail");
        assert_eq!(failure.status, Some(AccountStatus::Pending));
        assert!(failure.error.contains("pending approval"));
        assert!(storage.is_empty());
        assert!(!sessions.get_session().is_authenticated);
    }

    #[tokio::test]
    async fn test_backend_error_is_classified() {
        let (auth, _, _, storage) = setup(FakeBackend::with_login(Err(
            AppError::from_response(404, "Account not found", None),
        )));

        let outcome = auth.login("nobody@dorm.test", "pw").await;

        assert_eq!(outcome.failure().unwrap().kind, FailureKind::NotFound);
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_logout_clears_everything_and_is_idempotent() {
        let (auth, _, sessions, storage) =
            setup(FakeBackend::with_login(Ok(authenticated(AccountStatus::Active))));
        auth.login("t@dorm.test", "pw").await;

        auth.logout();
        assert!(storage.is_empty());
        assert_eq!(*sessions.get_session(), Session::anonymous());

        auth.logout();
        assert!(storage.is_empty());
        assert_eq!(*sessions.get_session(), Session::anonymous());
    }

    #[tokio::test]
    async fn test_initialize_without_token_stays_logged_out() {
        let (auth, _, sessions, _) = setup(FakeBackend::default());
        assert!(!auth.initialize().await);
        assert!(!sessions.get_session().is_authenticated);
    }

    #[tokio::test]
    async fn test_initialize_with_rejected_token_clears_silently() {
        let (auth, backend, sessions, storage) = setup(FakeBackend::default());
        storage.set(StorageKey::Token, "stale".into());
        backend.set_profile(Err(AppError::from_response(401, "Invalid token", None)));

        assert!(!auth.initialize().await);
        assert!(storage.token().is_none());
        assert!(!sessions.get_session().is_authenticated);
    }

    #[tokio::test]
    async fn test_initialize_with_valid_token() {
        let (auth, backend, sessions, storage) = setup(FakeBackend::default());
        storage.set(StorageKey::Token, "good".into());
        backend.set_profile(Ok(Profile {
            user: account("t@dorm.test", "Tenant", AccountStatus::Active),
            permissions: Vec::new(),
        }));

        assert!(auth.initialize().await);
        let session = sessions.get_session();
        assert!(session.is_authenticated);
        assert!(session.permissions.is_some());
    }

    #[tokio::test]
    async fn test_refresh_auth_failure_forces_logout() {
        let (auth, backend, sessions, storage) =
            setup(FakeBackend::with_login(Ok(authenticated(AccountStatus::Active))));
        auth.login("t@dorm.test", "pw").await;
        backend.set_profile(Err(AppError::service_unavailable("connection refused")));

        assert!(auth.refresh_auth().await.is_err());
        assert!(storage.is_empty());
        assert!(!sessions.get_session().is_authenticated);
    }

    #[tokio::test]
    async fn test_refresh_permissions_failure_keeps_session() {
        let (auth, backend, sessions, storage) =
            setup(FakeBackend::with_login(Ok(authenticated(AccountStatus::Active))));
        auth.login("t@dorm.test", "pw").await;
        let before = sessions.get_session();
        backend.set_profile(Err(AppError::service_unavailable("connection refused")));

        assert!(auth.refresh_permissions().await.is_err());
        assert_eq!(sessions.get_session(), before);
        assert_eq!(storage.token().as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn test_refresh_permissions_replaces_grants_wholesale() {
        let (auth, backend, sessions, _) =
            setup(FakeBackend::with_login(Ok(authenticated(AccountStatus::Active))));
        auth.login("t@dorm.test", "pw").await;
        backend.set_profile(Ok(Profile {
            user: account("t@dorm.test", "Admin", AccountStatus::Active),
            permissions: vec![
                Permission::new("navigation", "tenants"),
                Permission::new("navigation", "archives"),
            ],
        }));

        let session = auth.refresh_permissions().await.unwrap();
        let grants = session.permissions.as_ref().unwrap();
        assert_eq!(grants.len(), 2);
        assert!(!grants.contains(&Permission::new("navigation", "rooms")));
        assert_eq!(sessions.get_session(), session);
    }

    #[tokio::test]
    async fn test_register_validates_before_sending() {
        let (auth, _, _, _) = setup(FakeBackend::default());
        let mut request = RegisterRequest {
            first_name: "New".into(),
            last_name: "Tenant".into(),
            email: "bad-email".into(),
            password: "longenough".into(),
            confirm_password: "longenough".into(),
            role: None,
        };
        let err = auth.register(&request).await.unwrap_err();
        assert_eq!(err.kind, dormhub_core::ErrorKind::Validation);

        request.email = "new@dorm.test".into();
        let account = auth.register(&request).await.unwrap();
        assert_eq!(account.status, AccountStatus::Pending);
    }

    #[tokio::test]
    async fn test_refresh_permissions_refuses_inactive_account() {
        let (auth, backend, sessions, _) =
            setup(FakeBackend::with_login(Ok(authenticated(AccountStatus::Active))));
        auth.login("t@dorm.test", "pw").await;
        let before = sessions.get_session();
        backend.set_profile(Ok(Profile {
            user: account("t@dorm.test", "Admin", AccountStatus::Suspended),
            permissions: vec![Permission::new("navigation", "archives")],
        }));

        let err = auth.refresh_permissions().await.unwrap_err();

        assert_eq!(err.kind, dormhub_core::ErrorKind::Authentication);
        assert!(err.message.contains("Suspended"));
        assert_eq!(sessions.get_session(), before);
    }

    #[tokio::test]
    async fn test_shared_epoch_advance_discards_in_flight_refresh() {
        let epochs = Arc::new(EpochCounter::new());
        let backend = Arc::new(FakeBackend::with_login(Ok(authenticated(AccountStatus::Active))));
        let sessions = Arc::new(MemorySessionStore::new());
        let storage = Arc::new(MemoryCredentialStorage::new());
        let auth = Authenticator::with_epochs(
            backend.clone(),
            sessions.clone(),
            storage.clone(),
            epochs.clone(),
        );
        auth.login("t@dorm.test", "pw").await;
        let before = sessions.get_session();

        backend.set_profile(Ok(Profile {
            user: account("t@dorm.test", "Admin", AccountStatus::Active),
            permissions: vec![Permission::new("navigation", "archives")],
        }));
        *backend.advance_on_profile.lock().unwrap() = Some(epochs);

        assert!(auth.refresh_permissions().await.is_err());
        assert_eq!(sessions.get_session(), before);

        assert!(auth.refresh_auth().await.is_err());
        assert_eq!(sessions.get_session(), before);
        assert_eq!(storage.token().as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn test_refresh_does_not_restore_session_once_token_is_gone() {
        let (auth, backend, sessions, storage) =
            setup(FakeBackend::with_login(Ok(authenticated(AccountStatus::Active))));
        auth.login("t@dorm.test", "pw").await;
        backend.set_profile(Ok(Profile {
            user: account("t@dorm.test", "Admin", AccountStatus::Active),
            permissions: Vec::new(),
        }));
        *backend.wipe_on_profile.lock().unwrap() = Some((storage.clone(), sessions.clone()));

        let err = auth.refresh_permissions().await.unwrap_err();
        assert_eq!(err.kind, dormhub_core::ErrorKind::Session);
        assert!(!sessions.get_session().is_authenticated);
        assert!(storage.is_empty());

        storage.set(StorageKey::Token, "tok-1".into());
        assert!(!auth.initialize().await);
        assert!(!sessions.get_session().is_authenticated);
    }
}
