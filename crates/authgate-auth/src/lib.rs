//! # authgate-auth
//!
//! Authentication and authorization primitives for Authgate.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and verification
//! - `fingerprint` — deterministic permission-set digests
//! - `token` — signed access token creation and validation
//! - `guard` — the request-time authorization decision

pub mod fingerprint;
pub mod guard;
pub mod password;
pub mod token;

pub use fingerprint::fingerprint;
pub use guard::AccessGuard;
pub use password::PasswordHasher;
pub use token::{AccessClaims, IssuedToken, TokenDecoder, TokenEncoder};
