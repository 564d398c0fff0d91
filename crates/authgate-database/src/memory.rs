//! In-memory user store implementation using dashmap.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use authgate_entity::permission::PermissionEntry;
use authgate_entity::user::{NewUser, User};

use crate::store::UserStore;

/// In-process user store keyed by lowercase username.
///
/// Used by the `memory` provider and by the integration test suite, which
/// runs the full HTTP stack without external services.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: DashMap<String, User>,
}

impl MemoryUserStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .get(&username.to_lowercase())
            .map(|r| r.value().clone()))
    }

    async fn create(&self, data: &NewUser) -> AppResult<User> {
        match self.users.entry(data.username.to_lowercase()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Username '{}' already exists",
                data.username
            ))),
            Entry::Vacant(slot) => {
                let user = User {
                    id: Uuid::new_v4(),
                    username: data.username.clone(),
                    password_hash: data.password_hash.clone(),
                    permissions: Vec::new(),
                    created_at: Utc::now(),
                };
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }

    async fn append_permission(&self, username: &str, entry: PermissionEntry) -> AppResult<()> {
        match self.users.get_mut(&username.to_lowercase()) {
            Some(mut user) => {
                user.permissions.push(entry);
                Ok(())
            }
            None => Err(AppError::not_found(format!("User '{username}' not found"))),
        }
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
