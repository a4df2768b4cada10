//! Integration tests for per-role dashboard loading.

use serde_json::json;

use dormhub_client::{Dashboard, DashboardKind, Section, Widget};
use dormhub_core::ErrorKind;

use crate::helpers::{self, TestApp};

#[tokio::test]
async fn test_admin_sees_only_granted_sections() {
    let app = TestApp::new().await;
    app.login_as("Admin", json!([{"resource": "navigation", "action": "rooms"}]))
        .await;
    app.mock_json(
        "GET",
        "/rooms",
        200,
        json!([
            helpers::room_json(1, "A-101", "Available"),
            helpers::room_json(2, "A-102", "Occupied")
        ]),
    )
    .await;
    app.mock_json("GET", "/tenants", 200, json!([helpers::tenant_json(1, "Active")]))
        .await;

    let dashboard = Dashboard::new(app.services.clone());
    let snapshot = dashboard.load(&app.access()).await.unwrap();

    assert_eq!(snapshot.kind, DashboardKind::Admin);
    let sections: Vec<_> = snapshot.panels.iter().map(|p| p.section).collect();
    assert_eq!(sections, vec![Section::Overview, Section::Rooms]);
    assert_eq!(snapshot.failures().count(), 0);

    match &snapshot.panel(Section::Overview).unwrap().content {
        Ok(Widget::Overview(stats)) => {
            let active = stats.iter().find(|s| s.label == "Active tenants").unwrap();
            assert_eq!(active.value, "1");
        }
        other => panic!("unexpected overview: {other:?}"),
    }
}

#[tokio::test]
async fn test_failing_widget_does_not_fail_dashboard() {
    let app = TestApp::new().await;
    app.login_as("SuperAdmin", json!([])).await;
    app.mock_json(
        "GET",
        "/rooms",
        200,
        json!([helpers::room_json(1, "A-101", "Maintenance")]),
    )
    .await;
    app.mock_json("GET", "/tenants", 500, json!({"message": "Database unavailable"}))
        .await;
    app.mock_json("GET", "/archives", 200, json!([])).await;
    app.mock_json("GET", "/notifications", 200, json!([helpers::notification_json(1, false)]))
        .await;
    app.mock_json("GET", "/accounts", 200, json!([helpers::account_json(1, "SuperAdmin", "Active")]))
        .await;
    app.mock_json("GET", "/navigation/items", 200, json!([{"id": 1, "name": "rooms"}]))
        .await;

    let dashboard = Dashboard::new(app.services.clone());
    let snapshot = dashboard.load(&app.access()).await.unwrap();

    assert_eq!(snapshot.panels.len(), 8);

    let failed: Vec<_> = snapshot.failures().map(|(s, _)| *s).collect();
    assert_eq!(failed, vec![Section::Overview, Section::Tenants]);

    let (_, notice) = snapshot.failures().next().unwrap();
    assert_eq!(notice.title, "Server Error");
    assert_eq!(notice.message, "Database unavailable");

    match &snapshot.panel(Section::Maintenance).unwrap().content {
        Ok(widget) => assert_eq!(widget.len(), 1),
        Err(e) => panic!("maintenance failed: {e}"),
    }
    assert!(snapshot.panel(Section::NavigationControl).unwrap().is_loaded());
}

#[tokio::test]
async fn test_tenant_dashboard_overview() {
    let app = TestApp::new().await;
    app.login_as("Tenant", json!([])).await;
    app.mock_json(
        "GET",
        "/payments",
        200,
        json!([
            helpers::payment_json(1, 150.0, "Paid"),
            helpers::payment_json(2, 150.0, "Overdue")
        ]),
    )
    .await;
    app.mock_json(
        "GET",
        "/notifications",
        200,
        json!([
            helpers::notification_json(1, false),
            helpers::notification_json(2, true)
        ]),
    )
    .await;

    let dashboard = Dashboard::new(app.services.clone());
    let snapshot = dashboard.load(&app.access()).await.unwrap();

    assert_eq!(snapshot.kind, DashboardKind::Tenant);
    let sections: Vec<_> = snapshot.panels.iter().map(|p| p.section).collect();
    assert_eq!(
        sections,
        vec![Section::Overview, Section::Payments, Section::Notifications]
    );

    let Ok(Widget::Overview(stats)) = &snapshot.panel(Section::Overview).unwrap().content else {
        panic!("overview did not load");
    };
    let value = |label: &str| {
        stats
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.value.clone())
            .unwrap()
    };
    assert_eq!(value("Paid to date"), "150.00");
    assert_eq!(value("Outstanding payments"), "1");
    assert_eq!(value("Unread notifications"), "1");
}

#[tokio::test]
async fn test_logged_out_has_no_dashboard() {
    let app = TestApp::new().await;

    let dashboard = Dashboard::new(app.services.clone());
    let err = dashboard.load(&app.access()).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Authorization);
}
