//! Handlers for the booking lifecycle: create, list, detail, cancel,
//! confirm, complete.
//!
//! The create path follows validate -> price -> atomic availability+insert:
//! structural and capacity rules are checked against the room snapshot
//! before any transaction is opened, and the authoritative overlap check
//! runs inside `BookingRepo::create` under the room's row lock.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use validator::Validate;

use innkeeper_core::booking::{self, STATUS_CANCELLED, STATUS_COMPLETED, STATUS_CONFIRMED};
use innkeeper_core::error::CoreError;
use innkeeper_core::types::DbId;
use innkeeper_core::{pricing, roles};
use innkeeper_db::models::booking::CreateBooking;
use innkeeper_db::repositories::{BookingRepo, RoomRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for booking creation. `total_price` is never accepted from
/// the client; it is derived from the room's nightly rate.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[validate(range(min = 1, message = "At least one adult is required"))]
    pub adults: i32,
    #[validate(range(min = 0, message = "Child count must not be negative"))]
    pub children: i32,
    #[serde(default)]
    pub special_requests: String,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// POST /api/v1/rooms/{room_id}/bookings
///
/// Create a booking for the authenticated requester. Returns 409 when the
/// room is taken for an overlapping interval at commit time.
pub async fn create_booking(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(room_id): Path<DbId>,
    Json(input): Json<CreateBookingRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let room = RoomRepo::find_by_id(&state.pool, room_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id: room_id,
        }))?;

    if !room.is_active {
        return Err(AppError::Core(CoreError::validation(
            "room_id",
            "Room is not currently bookable",
        )));
    }

    booking::validate_request(
        input.check_in,
        input.check_out,
        input.adults,
        input.children,
        room.capacity(),
        today(),
    )?;

    let total_price = pricing::total_price(room.price_per_night, input.check_in, input.check_out)?;

    let create = CreateBooking {
        room_id,
        user_id: auth.user_id,
        check_in: input.check_in,
        check_out: input.check_out,
        adults: input.adults,
        children: input.children,
        total_price,
        special_requests: input.special_requests,
    };

    let booking = BookingRepo::create(&state.pool, &create)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Room is not available for the selected dates".to_string(),
            ))
        })?;

    tracing::info!(
        user_id = auth.user_id,
        booking_id = booking.id,
        room_id = room_id,
        check_in = %booking.check_in,
        check_out = %booking.check_out,
        total_price = %booking.total_price,
        "Booking created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: booking })))
}

/// GET /api/v1/bookings
///
/// Role-scoped listing: staff see every booking, front-desk `team` members
/// see today's check-ins, everyone else sees their own bookings.
pub async fn list_bookings(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let bookings = if roles::is_staff(&auth.role) {
        BookingRepo::list_all(&state.pool).await?
    } else if auth.role == roles::ROLE_TEAM {
        BookingRepo::list_checking_in_on(&state.pool, today()).await?
    } else {
        BookingRepo::list_for_user(&state.pool, auth.user_id).await?
    };
    Ok(Json(DataResponse { data: bookings }))
}

/// GET /api/v1/bookings/{booking_id}
///
/// Booking detail, visible to the owner and to staff/team roles.
pub async fn get_booking(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(booking_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let booking = BookingRepo::find_by_id(&state.pool, booking_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id: booking_id,
        }))?;

    if !roles::can_view(auth.user_id, &auth.role, booking.user_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not allowed to view this booking".into(),
        )));
    }

    Ok(Json(DataResponse { data: booking }))
}

/// POST /api/v1/bookings/{booking_id}/cancel
///
/// Cancel a booking while it is still active and its check-in has not
/// arrived. Owners may cancel their own bookings; staff may cancel any.
/// Cancellation is a status change, never a row deletion.
pub async fn cancel_booking(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(booking_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let booking = BookingRepo::find_by_id(&state.pool, booking_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id: booking_id,
        }))?;

    if !roles::can_cancel(auth.user_id, &auth.role, booking.user_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not allowed to cancel this booking".into(),
        )));
    }

    let today = today();
    if !booking::can_be_cancelled(&booking.status, booking.check_in, today) {
        return Err(AppError::Core(CoreError::InvalidTransition {
            from: booking.status,
            to: STATUS_CANCELLED,
        }));
    }

    // The CAS update is the authoritative guard; the check above only
    // exists to produce a precise error without racing.
    let cancelled = BookingRepo::cancel(&state.pool, booking_id, today)
        .await?
        .ok_or(AppError::Core(CoreError::InvalidTransition {
            from: booking.status,
            to: STATUS_CANCELLED,
        }))?;

    tracing::info!(
        user_id = auth.user_id,
        booking_id = booking_id,
        "Booking cancelled"
    );

    Ok(Json(DataResponse { data: cancelled }))
}

/// POST /api/v1/bookings/{booking_id}/confirm
///
/// Staff approval: transitions a pending booking to confirmed.
pub async fn confirm_booking(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(booking_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let booking = BookingRepo::find_by_id(&state.pool, booking_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id: booking_id,
        }))?;

    booking::validate_transition(&booking.status, STATUS_CONFIRMED)?;

    let confirmed = BookingRepo::confirm(&state.pool, booking_id)
        .await?
        .ok_or(AppError::Core(CoreError::InvalidTransition {
            from: booking.status,
            to: STATUS_CONFIRMED,
        }))?;

    tracing::info!(
        user_id = user.user_id,
        booking_id = booking_id,
        "Booking confirmed"
    );

    Ok(Json(DataResponse { data: confirmed }))
}

/// POST /api/v1/bookings/{booking_id}/complete
///
/// Invoked by the externally-scheduled completion sweep (or staff):
/// transitions a confirmed booking to completed once its check-out has
/// passed. Idempotent over terminal states.
pub async fn complete_booking(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(booking_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let booking = BookingRepo::find_by_id(&state.pool, booking_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id: booking_id,
        }))?;

    // The sweep retries, so a booking it already completed (or one that
    // was cancelled meanwhile) is a no-op, not an error.
    if booking::is_terminal(&booking.status) {
        return Ok(Json(DataResponse { data: booking }));
    }

    let today = today();
    if booking.status != STATUS_CONFIRMED || booking.check_out > today {
        return Err(AppError::Core(CoreError::InvalidTransition {
            from: booking.status,
            to: STATUS_COMPLETED,
        }));
    }

    let completed = BookingRepo::mark_completed(&state.pool, booking_id, today)
        .await?
        .ok_or(AppError::Core(CoreError::InvalidTransition {
            from: booking.status,
            to: STATUS_COMPLETED,
        }))?;

    tracing::info!(
        user_id = user.user_id,
        booking_id = booking_id,
        "Booking completed"
    );

    Ok(Json(DataResponse { data: completed }))
}
