mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Duration, Utc};
use serde_json::{Value, json};
use shorturls::prelude::Clock;
use shorturls::routes::app_router;
use tower::ServiceExt;

#[tokio::test]
async fn test_stats_never_resolved() {
    let server = common::test_server(common::create_test_state());
    common::create_link(&server, "https://example.com", "fresh").await;

    let response = server.get("/shorturls/fresh").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["totalClicks"], 0);
    assert_eq!(json["clicks"], json!([]));
    assert_eq!(json["originalURL"], "https://example.com");
}

#[tokio::test]
async fn test_stats_after_one_resolve() {
    let (state, clock) = common::create_test_state_with_clock();
    let server = common::test_server(state);

    server
        .post("/shorturls")
        .json(&json!({
            "url": "https://example.com",
            "validity": 1,
            "shortcode": "abc123"
        }))
        .await
        .assert_status(StatusCode::CREATED);
    server.get("/abc123").await.assert_status(StatusCode::FOUND);

    let json = server.get("/shorturls/abc123").await.json::<Value>();

    assert_eq!(json["totalClicks"], 1);
    assert_eq!(json["clicks"].as_array().unwrap().len(), 1);

    let created: DateTime<Utc> = json["createdAt"].as_str().unwrap().parse().unwrap();
    let expiry: DateTime<Utc> = json["expiry"].as_str().unwrap().parse().unwrap();
    assert_eq!(created.timestamp(), clock.now().timestamp());
    assert_eq!(expiry - created, Duration::minutes(1));
}

#[tokio::test]
async fn test_stats_counts_sequential_clicks() {
    let server = common::test_server(common::create_test_state());
    common::create_link(&server, "https://example.com", "many").await;

    for i in 0..5 {
        server
            .get("/many")
            .add_header("Referer", format!("https://ref{i}.example"))
            .await
            .assert_status(StatusCode::FOUND);
    }

    let json = server.get("/shorturls/many").await.json::<Value>();
    assert_eq!(json["totalClicks"], 5);

    let referrers: Vec<&str> = json["clicks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["referrer"].as_str().unwrap())
        .collect();
    assert_eq!(
        referrers,
        [
            "https://ref0.example",
            "https://ref1.example",
            "https://ref2.example",
            "https://ref3.example",
            "https://ref4.example",
        ]
    );
}

#[tokio::test]
async fn test_stats_available_after_expiry() {
    let (state, clock) = common::create_test_state_with_clock();
    let server = common::test_server(state);
    common::create_link(&server, "https://example.com", "expired").await;
    server.get("/expired").await.assert_status(StatusCode::FOUND);

    clock.advance(Duration::days(1));
    server.get("/expired").await.assert_status(StatusCode::GONE);

    let response = server.get("/shorturls/expired").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["totalClicks"], 1);
}

#[tokio::test]
async fn test_stats_not_found() {
    let server = common::test_server(common::create_test_state());

    let response = server.get("/shorturls/notfound").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Shortcode not found" })
    );
}

#[tokio::test]
async fn test_stats_invalid_path() {
    let server = common::test_server(common::create_test_state());
    common::create_link(&server, "https://example.com", "abc").await;

    let response = server.get("/shorturls/abc/extra").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>(), json!({ "error": "Invalid path" }));
}

#[tokio::test]
async fn test_stats_trailing_slash_is_trimmed() {
    let state = common::create_test_state();
    state
        .registry
        .create(shorturls::prelude::NewLink::new("https://example.com").with_code("slash"))
        .unwrap();

    let response = app_router(state)
        .oneshot(
            Request::builder()
                .uri("/shorturls/slash/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_stats_empty_code_not_found() {
    let response = app_router(common::create_test_state())
        .oneshot(
            Request::builder()
                .uri("/shorturls/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, json!({ "error": "Shortcode not found" }));
}

#[tokio::test]
async fn test_create_route_still_rejects_get_when_served() {
    let response = app_router(common::create_test_state())
        .oneshot(
            Request::builder()
                .uri("/shorturls")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
