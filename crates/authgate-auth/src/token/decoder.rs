//! Access token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use authgate_core::config::auth::AuthConfig;
use authgate_core::error::AppError;
use authgate_core::result::AppResult;

use super::claims::AccessClaims;

/// Validates access tokens.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        // Pinning HS256 rejects tokens signed with any other algorithm.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Expiry is strict: a token is invalid the second it lapses.
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Checks:
    /// 1. Signature validity under the HS256 family
    /// 2. Expiration
    /// 3. Presence and type of the `hash` claim
    pub fn decode(&self, token: &str) -> AppResult<AccessClaims> {
        let token_data =
            decode::<AccessClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => {
                        AppError::authentication("Unexpected signing algorithm")
                    }
                    _ => AppError::authentication("Malformed token"),
                }
            })?;

        Ok(token_data.claims)
    }
}
