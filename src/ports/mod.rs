//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod credential_verifier;

pub use credential_verifier::{CredentialVerifier, TokenClaims};
