//! Credential verification adapters.

mod jwt;
mod mock;

pub use jwt::JwtCredentialVerifier;
pub use mock::MockCredentialVerifier;
