//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dormhub_auth::Authenticator;
use dormhub_auth::guard::Access;
use dormhub_auth::session::{MemoryCredentialStorage, MemorySessionStore};
use dormhub_client::{ApiClient, RestAuthBackend, Services};
use dormhub_core::config::ApiConfig;

/// A client wired to a fresh mock backend
pub struct TestApp {
    /// The mock backend
    pub server: MockServer,
    /// Shared transport
    pub api: Arc<ApiClient>,
    /// Domain services
    pub services: Services,
    /// Login flow
    pub auth: Authenticator,
    /// Credential storage behind the client
    pub storage: Arc<MemoryCredentialStorage>,
    /// Session store behind the client
    pub sessions: Arc<MemorySessionStore>,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let server = MockServer::start().await;

        let config = ApiConfig {
            base_url: server.uri(),
            timeout_seconds: 5,
            ..ApiConfig::default()
        };

        let storage = Arc::new(MemoryCredentialStorage::new());
        let sessions = Arc::new(MemorySessionStore::new());
        let api = Arc::new(
            ApiClient::new(&config, storage.clone(), sessions.clone())
                .expect("Failed to build client"),
        );
        let services = Services::new(api.clone());
        let backend = Arc::new(RestAuthBackend::new(services.accounts.clone()));
        let auth = Authenticator::with_epochs(backend, sessions.clone(), storage.clone(), api.epochs());

        Self {
            server,
            api,
            services,
            auth,
            storage,
            sessions,
        }
    }

    /// Access predicates over the current session
    pub fn access(&self) -> Access {
        Access::from_store(self.sessions.as_ref())
    }

    /// Respond to `verb path` with `status` and a JSON body
    pub async fn mock_json(&self, verb: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(format!("/api{route}")))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Like [`TestApp::mock_json`], but the response is held back for `delay`
    pub async fn mock_json_delayed(
        &self,
        verb: &str,
        route: &str,
        status: u16,
        body: Value,
        delay: Duration,
    ) {
        Mock::given(method(verb))
            .and(path(format!("/api{route}")))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_json(body)
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Make the authenticate endpoint accept any credentials for this account
    pub async fn mock_login(&self, role: &str, status: &str, permissions: Value) {
        let mut body = account_json(1, role, status);
        body["token"] = json!("tok-1");
        body["refreshToken"] = json!("ref-1");
        body["permissions"] = permissions;
        self.mock_json("POST", "/accounts/authenticate", 200, body).await;
    }

    /// Log in as an active account with the given role and grants
    pub async fn login_as(&self, role: &str, permissions: Value) {
        self.mock_login(role, "Active", permissions).await;
        let outcome = self.auth.login("user@dorm.test", "password123").await;
        assert!(outcome.is_success(), "login failed: {:?}", outcome.failure());
    }
}

/// JSON for an account
pub fn account_json(id: i64, role: &str, status: &str) -> Value {
    json!({
        "id": id,
        "firstName": "Test",
        "lastName": role,
        "email": "user@dorm.test",
        "role": role,
        "status": status,
        "createdAt": "2026-09-01T08:00:00Z"
    })
}

/// JSON for a room
pub fn room_json(id: i64, number: &str, status: &str) -> Value {
    json!({
        "id": id,
        "roomNumber": number,
        "floor": 1,
        "capacity": 2,
        "occupied": 1,
        "monthlyRent": 150.0,
        "status": status
    })
}

/// JSON for a tenant
pub fn tenant_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "firstName": "Ana",
        "lastName": "Cruz",
        "email": format!("tenant{id}@dorm.test"),
        "roomId": 1,
        "checkInDate": "2026-08-15",
        "status": status
    })
}

/// JSON for a payment
pub fn payment_json(id: i64, amount: f64, status: &str) -> Value {
    json!({
        "id": id,
        "tenantId": 1,
        "amount": amount,
        "method": "cash",
        "status": status,
        "period": "2026-10"
    })
}

/// JSON for a notification
pub fn notification_json(id: i64, is_read: bool) -> Value {
    json!({
        "id": id,
        "title": format!("Notice {id}"),
        "message": "Water maintenance on Friday",
        "isRead": is_read,
        "createdAt": "2026-10-01T09:30:00Z"
    })
}
