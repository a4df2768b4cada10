//! Integration tests for the login flow and the 401 interceptor.

use std::time::Duration;

use serde_json::json;
use tokio::time::sleep;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use dormhub_auth::FailureKind;
use dormhub_auth::session::{CredentialStorage, Session, SessionStore, StorageKey};
use dormhub_client::Route;
use dormhub_core::ErrorKind;
use dormhub_entity::account::AccountStatus;

use crate::helpers::{self, TestApp};

#[tokio::test]
async fn test_login_active_persists_token_and_authorizes_requests() {
    let app = TestApp::new().await;
    app.login_as("Admin", json!([{"resource": "navigation", "action": "rooms"}]))
        .await;

    assert_eq!(app.storage.token().as_deref(), Some("tok-1"));
    assert_eq!(app.storage.get(StorageKey::RefreshToken).as_deref(), Some("ref-1"));
    assert!(app.access().is_admin());
    assert!(app.access().resolver().has_permission("navigation", "rooms"));

    Mock::given(method("GET"))
        .and(path("/api/rooms"))
        .and(header("Authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&app.server)
        .await;

    let rooms = app.services.rooms.list().await.unwrap();
    assert!(rooms.is_empty());
}

#[tokio::test]
async fn test_login_pending_is_refused_without_persisting() {
    let app = TestApp::new().await;
    app.mock_login("Tenant", "Pending", json!([])).await;

    let outcome = app.auth.login("new@dorm.test", "password123").await;

    let failure = outcome.failure().expect("pending login must fail");
    assert_eq!(failure.status, Some(AccountStatus::Pending));
    assert!(failure.error.contains("pending approval"));
    assert!(app.storage.is_empty());
    assert!(!app.sessions.get_session().is_authenticated);
}

#[tokio::test]
async fn test_login_wrong_password_is_classified() {
    let app = TestApp::new().await;
    app.mock_json(
        "POST",
        "/accounts/authenticate",
        401,
        json!({"message": "Email or password is incorrect"}),
    )
    .await;

    let outcome = app.auth.login("user@dorm.test", "nope").await;

    let failure = outcome.failure().unwrap();
    assert_eq!(failure.kind, FailureKind::WrongCredentials);
    assert!(failure.details.as_deref().unwrap().contains("incorrect"));
    assert!(app.storage.is_empty());
}

#[tokio::test]
async fn test_login_unknown_email_is_classified() {
    let app = TestApp::new().await;
    app.mock_json(
        "POST",
        "/accounts/authenticate",
        404,
        json!({"error": "Account not found"}),
    )
    .await;

    let outcome = app.auth.login("ghost@dorm.test", "password123").await;
    assert_eq!(outcome.failure().unwrap().kind, FailureKind::NotFound);
}

#[tokio::test]
async fn test_unauthorized_response_clears_session_and_redirects() {
    let app = TestApp::new().await;
    app.login_as("Accounting", json!([])).await;
    let mut redirects = app.api.redirects();

    app.mock_json("GET", "/payments", 401, json!({"message": "Token expired"}))
        .await;

    let err = app.services.payments.list().await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Authentication);
    assert!(err.is_unauthorized());
    assert_eq!(err.message, "Token expired");
    assert!(app.storage.is_empty());
    assert_eq!(*app.sessions.get_session(), Session::anonymous());

    redirects.changed().await.unwrap();
    assert_eq!(*redirects.borrow(), Some(Route::Login));
}

#[tokio::test]
async fn test_initialize_validates_stored_token() {
    let app = TestApp::new().await;
    app.storage.set(StorageKey::Token, "stored".into());

    Mock::given(method("GET"))
        .and(path("/api/test-auth"))
        .and(header("Authorization", "Bearer stored"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": helpers::account_json(7, "Tenant", "Active"),
            "permissions": []
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    assert!(app.auth.initialize().await);
    assert!(app.access().is_tenant());
    assert!(app.storage.get(StorageKey::User).is_some());
}

#[tokio::test]
async fn test_initialize_with_rejected_token_clears_it() {
    let app = TestApp::new().await;
    app.storage.set(StorageKey::Token, "expired".into());
    app.mock_json("GET", "/test-auth", 401, json!({"message": "Invalid token"}))
        .await;

    assert!(!app.auth.initialize().await);
    assert!(app.storage.token().is_none());
    assert!(!app.sessions.get_session().is_authenticated);
}

#[tokio::test]
async fn test_refresh_permissions_failure_keeps_session() {
    let app = TestApp::new().await;
    app.login_as("Admin", json!([{"resource": "navigation", "action": "tenants"}]))
        .await;
    let before = app.sessions.get_session();

    app.mock_json("GET", "/test-auth", 500, json!({"message": "Database unavailable"}))
        .await;

    let err = app.auth.refresh_permissions().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExternalService);
    assert_eq!(app.sessions.get_session(), before);
    assert_eq!(app.storage.token().as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn test_refresh_auth_replaces_grants() {
    let app = TestApp::new().await;
    app.login_as("Admin", json!([{"resource": "navigation", "action": "rooms"}]))
        .await;

    app.mock_json(
        "GET",
        "/test-auth",
        200,
        json!({
            "user": helpers::account_json(1, "Admin", "Active"),
            "permissions": [{"resource": "navigation", "action": "archives"}]
        }),
    )
    .await;

    app.auth.refresh_auth().await.unwrap();

    let resolver = app.access();
    assert!(resolver.resolver().has_permission("navigation", "archives"));
    assert!(!resolver.resolver().has_permission("navigation", "rooms"));
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let app = TestApp::new().await;
    app.login_as("Tenant", json!([])).await;

    app.auth.logout();
    app.auth.logout();

    assert!(app.storage.is_empty());
    assert_eq!(*app.sessions.get_session(), Session::anonymous());
}

#[tokio::test]
async fn test_logout_during_login_cancels_it() {
    let app = TestApp::new().await;
    let mut body = helpers::account_json(1, "Admin", "Active");
    body["token"] = json!("tok-1");
    body["permissions"] = json!([]);
    app.mock_json_delayed(
        "POST",
        "/accounts/authenticate",
        200,
        body,
        Duration::from_millis(300),
    )
    .await;

    let (outcome, ()) = tokio::join!(app.auth.login("user@dorm.test", "password123"), async {
        sleep(Duration::from_millis(50)).await;
        app.auth.logout();
    });

    let failure = outcome.failure().expect("login should be cancelled");
    assert_eq!(failure.kind, FailureKind::Cancelled);
    assert!(app.storage.is_empty());
    assert!(!app.sessions.get_session().is_authenticated);
}

#[tokio::test]
async fn test_logout_during_refresh_auth_discards_result() {
    let app = TestApp::new().await;
    app.login_as("Admin", json!([])).await;
    app.mock_json_delayed(
        "GET",
        "/test-auth",
        200,
        json!({
            "user": helpers::account_json(1, "Admin", "Active"),
            "permissions": [{"resource": "navigation", "action": "rooms"}]
        }),
        Duration::from_millis(300),
    )
    .await;

    let (refreshed, ()) = tokio::join!(app.auth.refresh_auth(), async {
        sleep(Duration::from_millis(50)).await;
        app.auth.logout();
    });

    assert!(refreshed.is_err());
    assert!(app.storage.is_empty());
    assert_eq!(*app.sessions.get_session(), Session::anonymous());
}

#[tokio::test]
async fn test_newer_refresh_supersedes_older_one() {
    let app = TestApp::new().await;
    app.login_as("Admin", json!([])).await;

    Mock::given(method("GET"))
        .and(path("/api/test-auth"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "user": helpers::account_json(1, "Admin", "Active"),
                    "permissions": [{"resource": "navigation", "action": "rooms"}]
                }))
                .set_delay(Duration::from_millis(300)),
        )
        .up_to_n_times(1)
        .mount(&app.server)
        .await;
    app.mock_json(
        "GET",
        "/test-auth",
        200,
        json!({
            "user": helpers::account_json(1, "Admin", "Active"),
            "permissions": [{"resource": "navigation", "action": "archives"}]
        }),
    )
    .await;

    let (older, newer) = tokio::join!(app.auth.refresh_permissions(), async {
        sleep(Duration::from_millis(50)).await;
        app.auth.refresh_permissions().await
    });

    let err = older.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Session);
    assert!(newer.is_ok());
    let access = app.access();
    assert!(access.resolver().has_permission("navigation", "archives"));
    assert!(!access.resolver().has_permission("navigation", "rooms"));
}

#[tokio::test]
async fn test_unauthorized_response_discards_in_flight_refresh() {
    let app = TestApp::new().await;
    app.login_as("Admin", json!([])).await;
    let mut redirects = app.api.redirects();

    app.mock_json_delayed(
        "GET",
        "/test-auth",
        200,
        json!({
            "user": helpers::account_json(1, "Admin", "Active"),
            "permissions": []
        }),
        Duration::from_millis(300),
    )
    .await;
    app.mock_json_delayed(
        "GET",
        "/rooms",
        401,
        json!({"message": "Token expired"}),
        Duration::from_millis(50),
    )
    .await;

    let (refreshed, listed) =
        tokio::join!(app.auth.refresh_permissions(), app.services.rooms.list());

    assert!(listed.unwrap_err().is_unauthorized());
    assert!(refreshed.is_err());
    assert!(app.storage.token().is_none());
    assert!(!app.sessions.get_session().is_authenticated);

    redirects.changed().await.unwrap();
    assert_eq!(*redirects.borrow(), Some(Route::Login));
}

#[tokio::test]
async fn test_refresh_permissions_refuses_suspended_account() {
    let app = TestApp::new().await;
    app.login_as("Admin", json!([{"resource": "navigation", "action": "rooms"}]))
        .await;
    let before = app.sessions.get_session();

    app.mock_json(
        "GET",
        "/test-auth",
        200,
        json!({
            "user": helpers::account_json(1, "Admin", "Suspended"),
            "permissions": []
        }),
    )
    .await;

    let err = app.auth.refresh_permissions().await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Authentication);
    assert_eq!(app.sessions.get_session(), before);
    assert_eq!(app.storage.token().as_deref(), Some("tok-1"));
}
