//! Handlers for the room catalog and the advisory availability check.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use innkeeper_core::error::CoreError;
use innkeeper_core::types::DbId;
use innkeeper_db::models::room::{CreateRoom, UpdateRoom};
use innkeeper_db::repositories::{BookingRepo, RoomRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/rooms
///
/// List all active (bookable) rooms. Public.
pub async fn list_rooms(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rooms = RoomRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: rooms }))
}

/// GET /api/v1/rooms/{room_id}
///
/// Room detail. Public.
pub async fn get_room(
    State(state): State<AppState>,
    Path(room_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let room = RoomRepo::find_by_id(&state.pool, room_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id: room_id,
        }))?;
    Ok(Json(DataResponse { data: room }))
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
    pub message: String,
}

/// GET /api/v1/rooms/{room_id}/availability?check_in=...&check_out=...
///
/// Advisory availability check for display purposes. Lock-free and possibly
/// stale by the time a booking is attempted; the authoritative check runs
/// inside the create transaction.
pub async fn check_availability(
    State(state): State<AppState>,
    Path(room_id): Path<DbId>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<impl IntoResponse> {
    RoomRepo::find_by_id(&state.pool, room_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id: room_id,
        }))?;

    if query.check_in >= query.check_out {
        return Ok(Json(DataResponse {
            data: AvailabilityResponse {
                available: false,
                message: "Check-out date must be after check-in date".to_string(),
            },
        }));
    }

    let available = BookingRepo::is_available(
        &state.pool,
        room_id,
        query.check_in,
        query.check_out,
        None,
    )
    .await?;

    let message = if available {
        "Available".to_string()
    } else {
        "Not available for selected dates".to_string()
    };

    Ok(Json(DataResponse {
        data: AvailabilityResponse { available, message },
    }))
}

/// POST /api/v1/rooms
///
/// Create a room. Staff-only catalog management.
pub async fn create_room(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateRoom>,
) -> AppResult<impl IntoResponse> {
    if input.price_per_night < Decimal::ZERO {
        return Err(AppError::Core(CoreError::validation(
            "price_per_night",
            "Nightly rate must not be negative",
        )));
    }
    if input.capacity_adults < 1 {
        return Err(AppError::Core(CoreError::validation(
            "capacity_adults",
            "A room must sleep at least one adult",
        )));
    }
    if input.capacity_children < 0 {
        return Err(AppError::Core(CoreError::validation(
            "capacity_children",
            "Child capacity must not be negative",
        )));
    }

    let room = RoomRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = user.user_id,
        room_id = room.id,
        room_number = %room.room_number,
        "Room created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: room })))
}

/// PUT /api/v1/rooms/{room_id}
///
/// Update a room. Staff-only catalog management.
pub async fn update_room(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(room_id): Path<DbId>,
    Json(input): Json<UpdateRoom>,
) -> AppResult<impl IntoResponse> {
    if matches!(input.price_per_night, Some(rate) if rate < Decimal::ZERO) {
        return Err(AppError::Core(CoreError::validation(
            "price_per_night",
            "Nightly rate must not be negative",
        )));
    }

    let room = RoomRepo::update(&state.pool, room_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id: room_id,
        }))?;

    tracing::info!(user_id = user.user_id, room_id = room.id, "Room updated");

    Ok(Json(DataResponse { data: room }))
}
