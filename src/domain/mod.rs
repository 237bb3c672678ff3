//! Domain layer - pure business logic with no framework dependencies.

pub mod blog;
pub mod foundation;
