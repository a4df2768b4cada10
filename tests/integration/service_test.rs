//! Integration tests for the REST services.

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use dormhub_auth::session::CredentialStorage;
use dormhub_core::ErrorKind;
use dormhub_core::types::{AccountId, NavigationItemId, RoomId, TenantId};
use dormhub_entity::account::AccountStatus;
use dormhub_entity::archive::CheckoutRequest;
use dormhub_entity::room::{RoomInput, RoomStatus};

use crate::helpers::{self, TestApp};

#[tokio::test]
async fn test_rooms_list_decodes() {
    let app = TestApp::new().await;
    app.login_as("Admin", json!([])).await;
    app.mock_json(
        "GET",
        "/rooms",
        200,
        json!([
            helpers::room_json(1, "A-101", "Available"),
            helpers::room_json(2, "A-102", "Maintenance")
        ]),
    )
    .await;

    let rooms = app.services.rooms.list().await.unwrap();

    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].room_number, "A-101");
    assert_eq!(rooms[1].status, RoomStatus::Maintenance);
    assert_eq!(rooms[0].vacancies(), 1);
}

#[tokio::test]
async fn test_room_create_sends_camel_case_body() {
    let app = TestApp::new().await;
    app.login_as("Admin", json!([])).await;

    Mock::given(method("POST"))
        .and(path("/api/rooms"))
        .and(body_partial_json(json!({"roomNumber": "B-201", "capacity": 3})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(helpers::room_json(9, "B-201", "Available")),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let input = RoomInput {
        room_number: "B-201".into(),
        floor: Some(2),
        capacity: 3,
        monthly_rent: 120.0,
        status: None,
    };
    let room = app.services.rooms.create(&input).await.unwrap();
    assert_eq!(room.id, RoomId(9));
}

#[tokio::test]
async fn test_not_found_carries_backend_message() {
    let app = TestApp::new().await;
    app.login_as("Admin", json!([])).await;
    app.mock_json("GET", "/rooms/42", 404, json!({"message": "Room not found"}))
        .await;

    let err = app.services.rooms.get(RoomId(42)).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.message, "Room not found");
    assert_eq!(err.status, Some(404));
    assert!(app.storage.token().is_some());
}

#[tokio::test]
async fn test_server_error_keeps_raw_body() {
    let app = TestApp::new().await;
    app.login_as("Admin", json!([])).await;
    Mock::given(method("GET"))
        .and(path("/api/tenants"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream timed out"))
        .mount(&app.server)
        .await;

    let err = app.services.tenants.list().await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::ExternalService);
    assert_eq!(err.message, "Bad Gateway");
    assert_eq!(err.details.as_deref(), Some("upstream timed out"));
}

#[tokio::test]
async fn test_malformed_body_is_serialization_error() {
    let app = TestApp::new().await;
    app.login_as("Admin", json!([])).await;
    app.mock_json("GET", "/archives", 200, json!({"unexpected": true}))
        .await;

    let err = app.services.archives.list().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Serialization);
}

#[tokio::test]
async fn test_account_status_update() {
    let app = TestApp::new().await;
    app.login_as("SuperAdmin", json!([])).await;

    Mock::given(method("PUT"))
        .and(path("/api/accounts/5/status"))
        .and(body_json(json!({"status": "Active"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(helpers::account_json(5, "Tenant", "Active")),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let account = app
        .services
        .accounts
        .update_status(AccountId(5), AccountStatus::Active)
        .await
        .unwrap();
    assert_eq!(account.status, AccountStatus::Active);
}

#[tokio::test]
async fn test_pending_accounts_filtered() {
    let app = TestApp::new().await;
    app.login_as("HeadAdmin", json!([])).await;
    app.mock_json(
        "GET",
        "/accounts",
        200,
        json!([
            helpers::account_json(2, "Tenant", "Pending"),
            helpers::account_json(3, "Admin", "Active"),
            helpers::account_json(4, "Accounting", "Pending")
        ]),
    )
    .await;

    let pending = app.services.accounts.pending().await.unwrap();
    let ids: Vec<_> = pending.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![AccountId(2), AccountId(4)]);
}

#[tokio::test]
async fn test_navigation_assignment_body() {
    let app = TestApp::new().await;
    app.login_as("SuperAdmin", json!([])).await;

    Mock::given(method("PUT"))
        .and(path("/api/navigation/admin-permissions/5"))
        .and(body_json(json!({"navigationItemIds": [1, 3]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accountId": 5,
            "navigationItemIds": [1, 3]
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let updated = app
        .services
        .navigation
        .set_admin_permissions(AccountId(5), &[NavigationItemId(1), NavigationItemId(3)])
        .await
        .unwrap();
    assert_eq!(updated.account_id, AccountId(5));
    assert_eq!(updated.navigation_item_ids.len(), 2);
}

#[tokio::test]
async fn test_unread_count_and_mark_all_read() {
    let app = TestApp::new().await;
    app.login_as("Tenant", json!([])).await;
    app.mock_json("GET", "/notifications/unread-count", 200, json!({"count": 4}))
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/notifications/read-all"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&app.server)
        .await;

    assert_eq!(app.services.notifications.unread_count().await.unwrap(), 4);
    app.services.notifications.mark_all_read().await.unwrap();
}

#[tokio::test]
async fn test_checkout_returns_archive_record() {
    let app = TestApp::new().await;
    app.login_as("Admin", json!([{"resource": "archives", "action": "write"}]))
        .await;

    Mock::given(method("POST"))
        .and(path("/api/tenants/4/checkout"))
        .and(body_json(json!({"reason": "Graduated"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 11,
            "tenantId": 4,
            "tenantName": "Ana Cruz",
            "roomNumber": "A-101",
            "checkOutDate": "2026-10-17",
            "reason": "Graduated"
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let request = CheckoutRequest {
        check_out_date: None,
        reason: Some("Graduated".into()),
    };
    let record = app
        .services
        .archives
        .checkout_tenant(TenantId(4), &request)
        .await
        .unwrap();

    assert_eq!(record.tenant_id, TenantId(4));
    assert_eq!(
        record.check_out_date,
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    );
}
