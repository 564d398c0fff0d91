//! The request-time authorization decision.

use std::sync::Arc;

use tracing::debug;

use authgate_cache::{CacheManager, keys};
use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use authgate_core::traits::cache::CacheProvider;
use authgate_entity::permission::PermissionEntry;

use crate::token::decoder::TokenDecoder;

/// Evaluates whether a presented token authorizes a requested permission
/// entry, in one terminal pass: validate the token, resolve the cached
/// permission snapshot under its fingerprint, and scan for the entry.
///
/// Every denial surfaces as the same generic authorization error so that
/// callers cannot distinguish expiry from cache miss from permission
/// absence. The underlying cause is traced at debug level only.
#[derive(Debug, Clone)]
pub struct AccessGuard {
    /// Token validator.
    decoder: TokenDecoder,
    /// Cache holding permission snapshots keyed by fingerprint.
    cache: Arc<CacheManager>,
}

impl AccessGuard {
    /// Creates a new guard.
    pub fn new(decoder: TokenDecoder, cache: Arc<CacheManager>) -> Self {
        Self { decoder, cache }
    }

    /// The uniform denial returned on every failure path.
    fn denied() -> AppError {
        AppError::authorization("Unauthorized")
    }

    /// Authorizes a bearer token against a requested permission entry id.
    ///
    /// A cache miss — whether the snapshot expired or was never written —
    /// means the caller is no longer authorized and must log in again to
    /// repopulate the cache.
    pub async fn authorize(&self, token: &str, requested_entry: i32) -> AppResult<()> {
        let claims = match self.decoder.decode(token) {
            Ok(claims) => claims,
            Err(e) => {
                debug!(error = %e, "Token validation failed");
                return Err(Self::denied());
            }
        };

        let key = keys::permission_set(&claims.hash);
        let snapshot = match self.cache.get(&key).await {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                debug!(fingerprint = %claims.hash, "Permission snapshot not in cache");
                return Err(Self::denied());
            }
            Err(e) => {
                debug!(error = %e, "Cache lookup failed");
                return Err(Self::denied());
            }
        };

        let permissions: Vec<PermissionEntry> = match serde_json::from_str(&snapshot) {
            Ok(permissions) => permissions,
            Err(e) => {
                debug!(error = %e, "Cached permission snapshot is unreadable");
                return Err(Self::denied());
            }
        };

        // Any matching entry decides; at most one can match because entry
        // ids are unique within a set.
        match permissions.iter().find(|p| p.entry == requested_entry) {
            Some(p) if p.add_flag => Ok(()),
            Some(_) => {
                debug!(entry = requested_entry, "Permission entry access flag not set");
                Err(Self::denied())
            }
            None => {
                debug!(entry = requested_entry, "Permission entry not granted");
                Err(Self::denied())
            }
        }
    }
}
