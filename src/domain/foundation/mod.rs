//! Foundation module - Shared domain primitives.
//!
//! Contains the identifiers, validation errors, and authorization
//! vocabulary used across the bloglist domain.

mod auth;
mod errors;
mod ids;

pub use auth::{AccessDecision, DenialReason, Principal, VerifierError};
pub use errors::ValidationError;
pub use ids::UserId;
