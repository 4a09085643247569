//! Test helper utilities for dashboard API tests

#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;

use dashboard::{AppState, Dashboard, StaticMetricsSource};
use shared::{DashboardConfig, DashboardSettings, WaitlistData};
use waitlist::{JsonFixtureSource, WaitlistState};

pub type TestDashboard = Dashboard<JsonFixtureSource, StaticMetricsSource>;
pub type TestState = AppState<JsonFixtureSource, StaticMetricsSource>;

/// Unloaded state whose record source waits `latency` on every call
pub fn create_test_state(data: WaitlistData, latency: Duration) -> TestState {
    AppState::new(
        WaitlistState::new(JsonFixtureSource::new(data, latency)),
        StaticMetricsSource::new(Duration::ZERO),
        DashboardConfig::default(),
    )
}

/// Dashboard over `data` with the store already loaded
pub async fn create_test_dashboard(data: WaitlistData) -> TestDashboard {
    create_test_dashboard_with(data, DashboardSettings::default()).await
}

pub async fn create_test_dashboard_with(data: WaitlistData, settings: DashboardSettings) -> TestDashboard {
    let state = create_test_state(data, Duration::ZERO);
    assert!(state.load_waitlist().await.is_ready());
    Dashboard::new(state, settings)
}

/// Send one request through the router and decode the JSON body
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Method::GET, uri, None).await
}

pub async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, Method::POST, uri, Some(body)).await
}

pub async fn put(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, Method::PUT, uri, Some(body)).await
}

/// Record ids of the rows in a page response
pub fn row_ids(page: &Value) -> Vec<String> {
    page["rows"]
        .as_array()
        .map(|rows| {
            rows.iter()
                .filter_map(|row| row["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
