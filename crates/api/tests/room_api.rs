//! Integration tests for the room catalog endpoints and the advisory
//! availability check.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, get, post_json_as, put_json_as, seed_room};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
async fn create_room_requires_staff_role(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json_as(
        app.clone(),
        "/api/v1/rooms",
        json!({
            "name": "Room 101",
            "room_number": "101",
            "price_per_night": "100.00",
            "capacity_adults": 2,
            "capacity_children": 1,
        }),
        7,
        "guest",
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_room_rejects_negative_rate(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json_as(
        app.clone(),
        "/api/v1/rooms",
        json!({
            "name": "Room 101",
            "room_number": "101",
            "price_per_night": "-1.00",
            "capacity_adults": 2,
            "capacity_children": 1,
        }),
        1,
        "admin",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../migrations")]
async fn duplicate_room_number_maps_to_conflict(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed_room(&app, "101").await;

    let response = post_json_as(
        app.clone(),
        "/api/v1/rooms",
        json!({
            "name": "Other",
            "room_number": "101",
            "price_per_night": "90.00",
            "capacity_adults": 2,
            "capacity_children": 0,
        }),
        1,
        "admin",
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_rooms_returns_only_active(pool: PgPool) {
    let app = common::build_test_app(pool);
    let room_id = seed_room(&app, "101").await;
    seed_room(&app, "102").await;

    let response = put_json_as(
        app.clone(),
        &format!("/api/v1/rooms/{room_id}"),
        json!({ "is_active": false }),
        1,
        "admin",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app.clone(), "/api/v1/rooms").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let rooms = json["data"].as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["room_number"], "102");
}

#[sqlx::test(migrations = "../../migrations")]
async fn get_unknown_room_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/rooms/9999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../migrations")]
async fn availability_reflects_existing_bookings(pool: PgPool) {
    let app = common::build_test_app(pool);
    let room_id = seed_room(&app, "101").await;

    let check_in = Utc::now().date_naive() + Duration::days(10);
    let check_out = check_in + Duration::days(4);

    let response = get(
        app.clone(),
        &format!("/api/v1/rooms/{room_id}/availability?check_in={check_in}&check_out={check_out}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["available"], true);
    assert_eq!(json["data"]["message"], "Available");

    let response = post_json_as(
        app.clone(),
        &format!("/api/v1/rooms/{room_id}/bookings"),
        json!({
            "check_in": check_in,
            "check_out": check_out,
            "adults": 2,
            "children": 0,
        }),
        7,
        "guest",
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(
        app.clone(),
        &format!("/api/v1/rooms/{room_id}/availability?check_in={check_in}&check_out={check_out}"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["available"], false);
    assert_eq!(json["data"]["message"], "Not available for selected dates");
}

#[sqlx::test(migrations = "../../migrations")]
async fn availability_with_reversed_dates_is_unavailable_with_reason(pool: PgPool) {
    let app = common::build_test_app(pool);
    let room_id = seed_room(&app, "101").await;

    let response = get(
        app,
        &format!(
            "/api/v1/rooms/{room_id}/availability?check_in=2024-05-10&check_out=2024-05-10"
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["available"], false);
    assert_eq!(
        json["data"]["message"],
        "Check-out date must be after check-in date"
    );
}
