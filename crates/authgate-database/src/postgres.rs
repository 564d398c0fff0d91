//! PostgreSQL user store implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use authgate_core::error::{AppError, ErrorKind};
use authgate_core::result::AppResult;
use authgate_entity::permission::PermissionEntry;
use authgate_entity::user::{NewUser, User};

use crate::store::UserStore;

/// PostgreSQL-backed user store.
///
/// The permission set is stored as a JSONB array in grant order, so append
/// is a single `||` concatenation and the serialized shape matches the
/// cached snapshot format.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

/// Row mapping for the `users` table.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    password_hash: String,
    permissions: Json<Vec<PermissionEntry>>,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
            permissions: row.permissions.0,
            created_at: row.created_at,
        }
    }
}

impl PgUserStore {
    /// Create a new PostgreSQL user store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash, permissions, created_at \
             FROM users WHERE LOWER(username) = LOWER($1)",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
        })?;

        Ok(row.map(User::from))
    }

    async fn create(&self, data: &NewUser) -> AppResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (id, username, password_hash, permissions) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, username, password_hash, permissions, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(&data.username)
        .bind(&data.password_hash)
        .bind(Json(Vec::<PermissionEntry>::new()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_username_lower_key") =>
            {
                AppError::conflict(format!("Username '{}' already exists", data.username))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })?;

        Ok(User::from(row))
    }

    async fn append_permission(&self, username: &str, entry: PermissionEntry) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE users SET permissions = permissions || $2 \
             WHERE LOWER(username) = LOWER($1)",
        )
        .bind(username)
        .bind(Json(entry))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to append permission", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User '{username}' not found")));
        }
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}
