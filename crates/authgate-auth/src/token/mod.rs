//! Signed access tokens binding a permission fingerprint to an expiry.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::AccessClaims;
pub use decoder::TokenDecoder;
pub use encoder::{IssuedToken, TokenEncoder};
