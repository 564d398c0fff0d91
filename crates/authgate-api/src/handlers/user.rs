//! User handlers — permission grants.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use authgate_core::error::AppError;

use crate::dto::request::GrantPermissionRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::state::AppState;

/// POST /api/users/permissions
pub async fn grant_permission(
    State(state): State<AppState>,
    Json(req): Json<GrantPermissionRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .user_service
        .grant(&req.username, req.permission)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Permission added successfully".to_string(),
    })))
}
