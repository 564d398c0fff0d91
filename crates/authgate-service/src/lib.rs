//! # authgate-service
//!
//! Business logic services for Authgate — orchestrates the user store,
//! cache, and auth primitives.
//!
//! ## Modules
//!
//! - `user` — signup and permission grants
//! - `auth` — login: credential verification, fingerprinting, cache
//!   population, token issuance

pub mod auth;
pub mod user;

pub use auth::{AuthService, LoginOutcome};
pub use user::UserService;
