//! # authgate-database
//!
//! User store implementations for Authgate. Supports two providers:
//!
//! - **postgres**: PostgreSQL-backed store using [sqlx](https://crates.io/crates/sqlx)
//! - **memory**: In-process store using [dashmap](https://crates.io/crates/dashmap)
//!
//! The provider is selected at runtime based on configuration.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod postgres;
pub mod store;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;
pub use store::{UserStore, UserStoreManager};
