//! In-memory cache implementation using the moka crate.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;

use authgate_core::config::cache::MemoryCacheConfig;
use authgate_core::result::AppResult;
use authgate_core::traits::cache::CacheProvider;

/// In-memory cache provider using moka.
///
/// moka applies TTL at the cache level rather than per entry, so the
/// configured `time_to_live_seconds` governs every entry; the per-call TTL
/// argument is accepted for interface parity with the Redis provider.
/// Deployments keep the cache-level TTL aligned with the login TTL via
/// configuration.
#[derive(Debug, Clone)]
pub struct MemoryCacheProvider {
    /// The underlying moka cache.
    cache: Cache<String, String>,
}

impl MemoryCacheProvider {
    /// Create a new in-memory cache from configuration.
    pub fn new(config: &MemoryCacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(Duration::from_secs(config.time_to_live_seconds))
            .build();

        Self { cache }
    }
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.cache.get(key).await)
    }

    async fn set(&self, key: &str, value: &str, _ttl: Duration) -> AppResult<()> {
        self.cache.insert(key.to_string(), value.to_string()).await;
        Ok(())
    }

    async fn set_nx(&self, key: &str, value: &str, _ttl: Duration) -> AppResult<bool> {
        // moka has no native set-if-not-exists, so this is get-then-insert.
        // Not perfectly atomic, but acceptable for in-memory single-node use.
        if self.cache.contains_key(key) {
            return Ok(false);
        }
        self.cache.insert(key.to_string(), value.to_string()).await;
        Ok(true)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
