//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use authgate_entity::permission::PermissionEntry;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Permission grant request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GrantPermissionRequest {
    /// Target username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// The permission entry to grant.
    pub permission: PermissionEntry,
}
