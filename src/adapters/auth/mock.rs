//! Mock credential verifier for testing.
//!
//! Implements the `CredentialVerifier` port without any cryptography:
//! a map of credentials to claims, plus a forceable fault for testing
//! error handling paths.
//!
//! # Example
//!
//! ```ignore
//! use bloglist_core::adapters::auth::MockCredentialVerifier;
//! use bloglist_core::ports::TokenClaims;
//!
//! let verifier = MockCredentialVerifier::new()
//!     .with_claims("valid-token", TokenClaims::for_principal("u1"));
//!
//! let claims = verifier.verify("valid-token").await?;
//! assert_eq!(claims.principal_id.as_deref(), Some("u1"));
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::VerifierError;
use crate::ports::{CredentialVerifier, TokenClaims};

/// Mock credential verifier.
///
/// Credentials not in the map fail with `SignatureInvalid`.
#[derive(Debug, Default)]
pub struct MockCredentialVerifier {
    /// Map of accepted credentials to the claims they carry.
    claims: RwLock<HashMap<String, TokenClaims>>,
    /// Optional fault returned for every verification.
    force_fault: RwLock<Option<String>>,
}

impl MockCredentialVerifier {
    /// Creates a new empty mock verifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a credential carrying the given claims.
    pub fn with_claims(self, credential: impl Into<String>, claims: TokenClaims) -> Self {
        self.claims.write().unwrap().insert(credential.into(), claims);
        self
    }

    /// Accepts a credential carrying a principal id.
    ///
    /// Convenience for the common Allow case.
    pub fn with_principal(
        self,
        credential: impl Into<String>,
        principal_id: impl Into<String>,
    ) -> Self {
        self.with_claims(credential, TokenClaims::for_principal(principal_id))
    }

    /// Forces every verification to fail with a fault.
    pub fn with_fault(self, message: impl Into<String>) -> Self {
        *self.force_fault.write().unwrap() = Some(message.into());
        self
    }

    /// Clears the forced fault and returns to normal operation.
    pub fn clear_fault(&self) {
        *self.force_fault.write().unwrap() = None;
    }

    /// Registers an accepted credential at runtime.
    pub fn add_claims(&self, credential: impl Into<String>, claims: TokenClaims) {
        self.claims.write().unwrap().insert(credential.into(), claims);
    }
}

#[async_trait]
impl CredentialVerifier for MockCredentialVerifier {
    async fn verify(&self, credential: &str) -> Result<TokenClaims, VerifierError> {
        if let Some(message) = self.force_fault.read().unwrap().clone() {
            return Err(VerifierError::Fault(message));
        }

        self.claims
            .read()
            .unwrap()
            .get(credential)
            .cloned()
            .ok_or(VerifierError::SignatureInvalid)
    }
}
