//! Application layer - services orchestrating domain logic over ports.

mod authorization;

pub use authorization::{AuthorizationGate, GateError};
