//! `Authorized` extractor — runs the authorization guard against the
//! request's bearer token and requested permission entry.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tracing::debug;

use authgate_core::error::AppError;

use crate::state::AppState;

/// Header naming the permission entry a guarded request targets.
pub const PERMISSION_ENTRY_HEADER: &str = "x-permission-entry";

/// Proof that the request passed the authorization guard.
///
/// Extraction reads the bearer token from `Authorization` and the numeric
/// target entry from `X-Permission-Entry`, then delegates the decision to
/// [`authgate_auth::guard::AccessGuard`]. Every failure — missing headers
/// included — produces the same uniform denial as the guard itself.
#[derive(Debug, Clone)]
pub struct Authorized {
    /// The permission entry id the request was authorized for.
    pub entry: i32,
}

/// The uniform denial for malformed or missing authorization inputs.
fn denied() -> AppError {
    AppError::authorization("Unauthorized")
}

impl FromRequestParts<AppState> for Authorized {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                debug!("Missing Authorization header");
                denied()
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            debug!("Authorization header is not a bearer token");
            denied()
        })?;

        let entry = parts
            .headers
            .get(PERMISSION_ENTRY_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<i32>().ok())
            .ok_or_else(|| {
                debug!("Missing or non-numeric permission entry header");
                denied()
            })?;

        state.guard.authorize(token, entry).await?;

        Ok(Authorized { entry })
    }
}
