//! Health check handler.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
///
/// Liveness probe: reports service version and database reachability.
/// Always returns 200; a broken database is reported in the body so load
/// balancers and humans can tell the two failure modes apart.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let db_healthy = innkeeper_db::health_check(&state.pool).await.is_ok();

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "db_healthy": db_healthy,
    }))
}
