//! Route definitions for the room catalog, merged under `/rooms`.
//!
//! Booking creation is nested under the room it targets, matching the
//! resource it allocates.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{bookings, rooms};
use crate::state::AppState;

/// ```text
/// GET    /                           list_rooms
/// POST   /                           create_room          (staff)
/// GET    /{room_id}                  get_room
/// PUT    /{room_id}                  update_room          (staff)
/// GET    /{room_id}/availability     check_availability
/// POST   /{room_id}/bookings         create_booking
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(rooms::list_rooms).post(rooms::create_room))
        .route("/{room_id}", get(rooms::get_room).put(rooms::update_room))
        .route("/{room_id}/availability", get(rooms::check_availability))
        .route("/{room_id}/bookings", post(bookings::create_booking))
}
