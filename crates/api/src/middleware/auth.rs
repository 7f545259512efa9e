//! Identity extractor for Axum handlers.
//!
//! Authentication itself is owned by an upstream collaborator (gateway or
//! session service) which verifies the caller and forwards the resolved
//! principal as `x-user-id` / `x-user-role` headers. This service treats
//! both values as opaque inputs.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use innkeeper_core::error::CoreError;
use innkeeper_core::roles::ROLE_GUEST;
use innkeeper_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated requester extracted from the forwarded identity headers.
///
/// Use this as an extractor parameter in any handler that requires an
/// identified caller:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The requester's principal id, as assigned by the auth collaborator.
    pub user_id: DbId,
    /// The requester's role name (e.g. `"admin"`, `"manager"`, `"team"`, `"guest"`).
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<DbId>().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing or malformed x-user-id header".into(),
                ))
            })?;

        let role = parts
            .headers
            .get("x-user-role")
            .and_then(|v| v.to_str().ok())
            .unwrap_or(ROLE_GUEST)
            .to_string();

        Ok(AuthUser { user_id, role })
    }
}
