//! Role-based access control extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does
//! not meet the minimum requirement. Use these in route handlers to enforce
//! authorization at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use innkeeper_core::error::CoreError;
use innkeeper_core::roles;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires a staff role (`admin` or `manager`). Rejects with 403 otherwise.
///
/// ```ignore
/// async fn staff_only(RequireStaff(user): RequireStaff) -> AppResult<Json<()>> {
///     // user is guaranteed to be staff here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireStaff(pub AuthUser);

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !roles::is_staff(&user.role) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Staff role required".into(),
            )));
        }
        Ok(RequireStaff(user))
    }
}
