//! Integration tests for notification polling.

use std::time::Duration;

use serde_json::json;
use tokio::time::{sleep, timeout};

use dormhub_client::NotificationPoller;

use crate::helpers::{self, TestApp};

#[tokio::test]
async fn test_first_poll_is_published() {
    let app = TestApp::new().await;
    app.login_as("Tenant", json!([])).await;
    app.mock_json(
        "GET",
        "/notifications",
        200,
        json!([
            helpers::notification_json(1, false),
            helpers::notification_json(2, false),
            helpers::notification_json(3, true)
        ]),
    )
    .await;

    let poller = NotificationPoller::spawn(
        app.services.notifications.clone(),
        Duration::from_secs(3600),
    );
    let mut updates = poller.subscribe();

    timeout(Duration::from_secs(5), updates.changed())
        .await
        .expect("no snapshot published")
        .unwrap();

    let snapshot = poller.latest().unwrap();
    assert_eq!(snapshot.notifications.len(), 3);
    assert_eq!(snapshot.unread, 2);
    assert!(poller.is_running());
}

#[tokio::test]
async fn test_failed_poll_publishes_nothing() {
    let app = TestApp::new().await;
    app.login_as("Tenant", json!([])).await;
    app.mock_json("GET", "/notifications", 500, json!({"message": "boom"}))
        .await;

    let poller = NotificationPoller::spawn(
        app.services.notifications.clone(),
        Duration::from_secs(3600),
    );
    let mut updates = poller.subscribe();

    let waited = timeout(Duration::from_millis(500), updates.changed()).await;

    assert!(waited.is_err());
    assert!(poller.latest().is_none());
    assert!(poller.is_running());
}

#[tokio::test]
async fn test_invalidate_drops_in_flight_poll() {
    let app = TestApp::new().await;
    app.login_as("Tenant", json!([])).await;
    app.mock_json_delayed(
        "GET",
        "/notifications",
        200,
        json!([helpers::notification_json(1, false)]),
        Duration::from_millis(300),
    )
    .await;

    let poller = NotificationPoller::spawn(
        app.services.notifications.clone(),
        Duration::from_secs(3600),
    );
    let mut updates = poller.subscribe();

    sleep(Duration::from_millis(100)).await;
    poller.invalidate();

    let waited = timeout(Duration::from_millis(800), updates.changed()).await;

    assert!(waited.is_err());
    assert!(poller.latest().is_none());
    let requests = app.server.received_requests().await.unwrap();
    let polls = requests
        .iter()
        .filter(|r| r.url.path() == "/api/notifications")
        .count();
    assert_eq!(polls, 1);
}

#[tokio::test]
async fn test_dropping_poller_stops_task() {
    let app = TestApp::new().await;
    app.login_as("Tenant", json!([])).await;
    app.mock_json_delayed(
        "GET",
        "/notifications",
        200,
        json!([helpers::notification_json(1, false)]),
        Duration::from_millis(500),
    )
    .await;

    let poller = NotificationPoller::spawn(
        app.services.notifications.clone(),
        Duration::from_millis(100),
    );
    let mut updates = poller.subscribe();
    drop(poller);

    let closed = timeout(Duration::from_secs(1), updates.changed())
        .await
        .expect("poller task still alive");

    assert!(closed.is_err());
    assert!(updates.borrow().is_none());
}

#[tokio::test]
async fn test_poller_fires_again_on_interval() {
    let app = TestApp::new().await;
    app.login_as("Tenant", json!([])).await;
    app.mock_json(
        "GET",
        "/notifications",
        200,
        json!([helpers::notification_json(1, false)]),
    )
    .await;

    let poller = NotificationPoller::spawn(
        app.services.notifications.clone(),
        Duration::from_millis(200),
    );
    let mut updates = poller.subscribe();

    timeout(Duration::from_secs(5), updates.changed())
        .await
        .expect("no first snapshot")
        .unwrap();
    let first = poller.latest().unwrap();

    timeout(Duration::from_secs(5), updates.changed())
        .await
        .expect("no second snapshot")
        .unwrap();
    let second = poller.latest().unwrap();

    assert!(second.epoch.value() > first.epoch.value());
    assert!(second.fetched_at >= first.fetched_at);
    assert_eq!(second.unread, 1);

    let requests = app.server.received_requests().await.unwrap();
    let polls = requests
        .iter()
        .filter(|r| r.url.path() == "/api/notifications")
        .count();
    assert!(polls >= 2);
}
