//! Permission entry entity.

pub mod model;

pub use model::PermissionEntry;
