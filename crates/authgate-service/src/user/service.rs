//! User lifecycle operations — signup and permission grants.

use std::sync::Arc;

use tracing::info;

use authgate_auth::password::PasswordHasher;
use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use authgate_database::store::UserStore;
use authgate_entity::permission::PermissionEntry;
use authgate_entity::user::{NewUser, User};

/// Handles user creation and permission grants.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User record store.
    store: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// Registers a new user with an empty permission set.
    ///
    /// The password is hashed before any insert is attempted, so no user
    /// record can ever exist without a completed hash.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::validation("Username is required"));
        }
        if password.is_empty() {
            return Err(AppError::validation("Password is required"));
        }

        if self.store.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Username '{username}' already exists"
            )));
        }

        let password_hash = self.hasher.hash(password)?;
        let user = self
            .store
            .create(&NewUser {
                username: username.to_string(),
                password_hash,
            })
            .await?;

        info!(username = %user.username, user_id = %user.id, "User created");
        Ok(user)
    }

    /// Grants one permission entry to a user.
    ///
    /// Entry ids are unique within a set; granting an id the user already
    /// holds is a conflict and leaves the set unchanged.
    pub async fn grant(&self, username: &str, entry: PermissionEntry) -> AppResult<()> {
        let user = self
            .store
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))?;

        if user.permission(entry.entry).is_some() {
            return Err(AppError::conflict(format!(
                "Permission entry {} already granted",
                entry.entry
            )));
        }

        self.store.append_permission(username, entry).await?;

        info!(username = %user.username, entry = entry.entry, "Permission granted");
        Ok(())
    }
}
