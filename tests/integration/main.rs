//! Integration tests against a mock DormHub backend.

mod helpers;

mod auth_test;
mod dashboard_test;
mod poller_test;
mod service_test;
