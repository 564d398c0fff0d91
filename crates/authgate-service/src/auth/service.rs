//! The login flow: verify credentials, fingerprint the permission set,
//! populate the cache, issue a token.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use authgate_auth::fingerprint;
use authgate_auth::password::PasswordHasher;
use authgate_auth::token::encoder::TokenEncoder;
use authgate_cache::{CacheManager, keys};
use authgate_core::config::auth::AuthConfig;
use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use authgate_core::traits::cache::CacheProvider;
use authgate_database::store::UserStore;

/// Result of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginOutcome {
    /// The signed access token.
    pub token: String,
    /// Absolute expiry of the token (and of the cached snapshot).
    pub expires_at: DateTime<Utc>,
}

/// Handles credential verification and token issuance.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User record store.
    store: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Cache holding permission snapshots keyed by fingerprint.
    cache: Arc<CacheManager>,
    /// Token encoder.
    encoder: Arc<TokenEncoder>,
    /// TTL applied to the cached snapshot, equal to the token TTL so both
    /// expire together.
    snapshot_ttl: Duration,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        cache: Arc<CacheManager>,
        encoder: Arc<TokenEncoder>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            store,
            hasher,
            cache,
            encoder,
            snapshot_ttl: Duration::from_secs(config.token_ttl_minutes * 60),
        }
    }

    /// Verifies credentials and issues an access token.
    ///
    /// The permission set is serialized once; the same bytes feed the
    /// fingerprint and the cached snapshot. The cache write completes
    /// before the token is returned — a cache error fails the whole login,
    /// so the client can never hold a token whose fingerprint has no
    /// chance of resolving. A refused write (`set_nx` returning false)
    /// means an identical snapshot is already cached from a concurrent or
    /// earlier login; its TTL countdown is left untouched.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        let user = self
            .store
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))?;

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(AppError::authentication("Invalid username or password"));
        }

        let snapshot = serde_json::to_string(&user.permissions)?;
        let fp = fingerprint(snapshot.as_bytes());

        let written = self
            .cache
            .set_nx(&keys::permission_set(&fp), &snapshot, self.snapshot_ttl)
            .await
            .map_err(|e| {
                AppError::internal(format!("Failed to cache permission snapshot: {e}"))
            })?;

        if !written {
            debug!(fingerprint = %fp, "Permission snapshot already cached");
        }

        let issued = self.encoder.issue(&fp)?;

        info!(username = %user.username, expires_at = %issued.expires_at, "Login succeeded");

        Ok(LoginOutcome {
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }
}
