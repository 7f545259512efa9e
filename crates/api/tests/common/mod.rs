// Shared helpers for API integration tests. Not every test binary uses
// every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use innkeeper_api::config::ServerConfig;
use innkeeper_api::router::build_app_router;
use innkeeper_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Issue an anonymous GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a GET request with forwarded identity headers.
pub async fn get_as(app: Router, uri: &str, user_id: i64, role: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header("x-user-id", user_id.to_string())
            .header("x-user-role", role)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body and forwarded identity headers.
pub async fn post_json_as(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    user_id: i64,
    role: &str,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .header("x-user-id", user_id.to_string())
            .header("x-user-role", role)
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue an empty-bodied POST request with forwarded identity headers.
pub async fn post_as(app: Router, uri: &str, user_id: i64, role: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("x-user-id", user_id.to_string())
            .header("x-user-role", role)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a PUT request with a JSON body and forwarded identity headers.
pub async fn put_json_as(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    user_id: i64,
    role: &str,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json")
            .header("x-user-id", user_id.to_string())
            .header("x-user-role", role)
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into a JSON value.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a room through the staff API and return its id.
pub async fn seed_room(app: &Router, number: &str) -> i64 {
    let response = post_json_as(
        app.clone(),
        "/api/v1/rooms",
        serde_json::json!({
            "name": format!("Room {number}"),
            "room_number": number,
            "price_per_night": "100.00",
            "capacity_adults": 2,
            "capacity_children": 1,
        }),
        1,
        "admin",
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}
