//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::permission::PermissionEntry;

/// A registered user in the Authgate system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login name. Lookups are case-insensitive.
    pub username: String,
    /// Argon2id password hash, created at signup and never mutated.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// The user's permission set, ordered by grant time. Created empty at
    /// signup; grown by append only.
    pub permissions: Vec<PermissionEntry>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Look up a permission entry by its capability id.
    pub fn permission(&self, entry: i32) -> Option<&PermissionEntry> {
        self.permissions.iter().find(|p| p.entry == entry)
    }
}

/// Data required to create a new user.
///
/// The permission set starts empty; the store assigns the id and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Desired username.
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
}
