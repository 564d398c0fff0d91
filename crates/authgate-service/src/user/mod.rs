//! User lifecycle operations.

pub mod service;

pub use service::UserService;
