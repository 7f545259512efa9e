//! Route definitions for the booking lifecycle, merged under `/bookings`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::bookings;
use crate::state::AppState;

/// ```text
/// GET    /                          list_bookings       (role-scoped)
/// GET    /{booking_id}              get_booking
/// POST   /{booking_id}/cancel       cancel_booking
/// POST   /{booking_id}/confirm      confirm_booking     (staff)
/// POST   /{booking_id}/complete     complete_booking    (staff/sweep)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(bookings::list_bookings))
        .route("/{booking_id}", get(bookings::get_booking))
        .route("/{booking_id}/cancel", post(bookings::cancel_booking))
        .route("/{booking_id}/confirm", post(bookings::confirm_booking))
        .route("/{booking_id}/complete", post(bookings::complete_booking))
}
