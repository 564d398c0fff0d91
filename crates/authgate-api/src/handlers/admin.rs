//! Guarded admin handlers.

use axum::Json;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::Authorized;

/// POST /api/admin/ping
///
/// The guard runs in the `Authorized` extractor; reaching the handler body
/// means the caller's token resolved to a permission set granting the
/// requested entry.
pub async fn ping(auth: Authorized) -> Json<ApiResponse<MessageResponse>> {
    Json(ApiResponse::ok(MessageResponse {
        message: format!("Authorized for entry {}", auth.entry),
    }))
}
