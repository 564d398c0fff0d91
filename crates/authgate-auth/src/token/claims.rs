//! Access token claims.

use serde::{Deserialize, Serialize};

/// Claims payload embedded in every access token.
///
/// The claim names are a wire contract: `hash` carries the permission-set
/// fingerprint and `exp` the absolute expiry in unix seconds. Any client
/// reading the token relies on these exact names. Because `hash` is a
/// typed field, a token without it fails deserialization and is rejected
/// as malformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Fingerprint of the permission set cached at login.
    pub hash: String,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
