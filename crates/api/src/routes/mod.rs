//! Route definitions, grouped by area and merged under `/api/v1`.

pub mod bookings;
pub mod health;
pub mod rooms;

use axum::Router;

use crate::state::AppState;

/// All `/api/v1` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/rooms", rooms::router())
        .nest("/bookings", bookings::router())
}
