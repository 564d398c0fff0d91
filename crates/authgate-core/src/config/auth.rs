//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and token configuration.
///
/// The signing secret is loaded once at process start and is immutable
/// thereafter. It must never appear in log output; after composition it
/// lives only inside the token encoder/decoder key material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default = "default_token_secret")]
    pub token_secret: String,
    /// Access token TTL in minutes. The cached permission snapshot written
    /// at login uses the same TTL so that token and snapshot expire together.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: default_token_secret(),
            token_ttl_minutes: default_token_ttl(),
        }
    }
}

fn default_token_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    60
}
