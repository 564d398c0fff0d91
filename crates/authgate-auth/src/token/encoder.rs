//! Access token creation with configurable signing and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use authgate_core::config::auth::AuthConfig;
use authgate_core::error::AppError;
use authgate_core::result::AppResult;

use super::claims::AccessClaims;

/// Creates signed access tokens (HMAC-SHA256).
#[derive(Clone)]
pub struct TokenEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in minutes.
    token_ttl_minutes: i64,
}

impl std::fmt::Debug for TokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEncoder")
            .field("token_ttl_minutes", &self.token_ttl_minutes)
            .finish()
    }
}

/// Result of a successful token issuance.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The signed compact token string.
    pub token: String,
    /// Absolute expiry of the token.
    pub expires_at: DateTime<Utc>,
}

impl TokenEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.token_secret.as_bytes()),
            token_ttl_minutes: config.token_ttl_minutes as i64,
        }
    }

    /// Issues a token binding the given fingerprint to `now + ttl`.
    ///
    /// A signing failure aborts with no partially-formed token.
    pub fn issue(&self, fingerprint: &str) -> AppResult<IssuedToken> {
        let expires_at = Utc::now() + chrono::Duration::minutes(self.token_ttl_minutes);

        let claims = AccessClaims {
            hash: fingerprint.to_string(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}
