//! # authgate-api
//!
//! HTTP API layer for Authgate built on Axum.
//!
//! Provides the REST endpoints, the authorization extractor, DTOs,
//! request logging, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
