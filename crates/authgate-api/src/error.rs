//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse` implementation lives in `authgate-core` alongside the
//! `AppError` definition (Rust's orphan rule requires the trait impl to sit in
//! the crate that owns the type). It is re-exported here so the API crate's
//! error surface stays in one place.

pub use authgate_core::error::ApiErrorResponse;
