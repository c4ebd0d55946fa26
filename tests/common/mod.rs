#![allow(dead_code)]

use axum_test::TestServer;
use chrono::Utc;
use serde_json::{Value, json};
use shorturls::prelude::*;
use shorturls::routes::router;
use std::sync::Arc;

pub const BASE_URL: &str = "http://localhost:8080/";

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(LinkRegistry::default()), BASE_URL)
}

pub fn create_test_state_with_clock() -> (AppState, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(Utc::now()));
    let registry = LinkRegistry::with_clock(RegistrySettings::default(), clock.clone());
    (AppState::new(Arc::new(registry), BASE_URL), clock)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

pub async fn create_link(server: &TestServer, url: &str, code: &str) -> Value {
    let response = server
        .post("/shorturls")
        .json(&json!({ "url": url, "shortcode": code }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}
