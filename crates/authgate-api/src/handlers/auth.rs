//! Auth handlers — signup and login.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use authgate_core::error::AppError;

use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse};
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MessageResponse>>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .user_service
        .register(&req.username, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(MessageResponse {
            message: "User created successfully".to_string(),
        })),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state
        .auth_service
        .login(&req.username, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        token: outcome.token,
        expires_at: outcome.expires_at,
    })))
}
