//! The user store trait and the provider dispatch.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use authgate_core::config::DatabaseConfig;
use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use authgate_entity::permission::PermissionEntry;
use authgate_entity::user::{NewUser, User};

/// Trait for user record stores.
///
/// The core only ever queries by username. Permission-entry uniqueness is
/// enforced by the service layer at grant time; `append_permission` appends
/// blindly.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by username (case-insensitive). Returns `None` if no
    /// such user exists.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Create a new user with an empty permission set. Fails with a
    /// conflict error if the username is already taken.
    async fn create(&self, data: &NewUser) -> AppResult<User>;

    /// Append one permission entry to a user's set. Fails with a not-found
    /// error if the user does not exist.
    async fn append_permission(&self, username: &str, entry: PermissionEntry) -> AppResult<()>;

    /// Check that the store backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Dispatch that constructs the configured user store provider.
pub struct UserStoreManager;

impl UserStoreManager {
    /// Connect to the configured store provider.
    ///
    /// For the `postgres` provider this creates the connection pool and
    /// runs pending migrations before handing the store out.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Arc<dyn UserStore>> {
        match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL user store");
                let pool = crate::connection::create_pool(config).await?;
                crate::migration::run_migrations(&pool).await?;
                Ok(Arc::new(crate::postgres::PgUserStore::new(pool)))
            }
            "memory" => {
                info!("Initializing in-memory user store");
                Ok(Arc::new(crate::memory::MemoryUserStore::new()))
            }
            other => Err(AppError::configuration(format!(
                "Unknown user store provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }
}
