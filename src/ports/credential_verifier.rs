//! Credential verification port.
//!
//! Defines the contract for cryptographically verifying a bearer
//! credential and surfacing its claims. It is provider-agnostic:
//! implementations exist for HS256 shared-secret JWTs and for mock
//! testing, and could be added for OIDC providers.
//!
//! The `AuthorizationGate` is the only intended caller. It owns the
//! policy (presence checks, principal-id check); this port owns only
//! the cryptography.

use async_trait::async_trait;

use crate::domain::foundation::VerifierError;

/// Claims extracted from a verified credential.
///
/// A credential can verify and still carry no principal identifier;
/// deciding what that means is the gate's job, not the verifier's, so
/// both fields stay optional here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenClaims {
    /// The principal identifier (`id` claim), if present.
    pub principal_id: Option<String>,

    /// The username claim, if present.
    pub username: Option<String>,
}

impl TokenClaims {
    /// Claims for a credential carrying a principal id.
    pub fn for_principal(id: impl Into<String>) -> Self {
        Self {
            principal_id: Some(id.into()),
            username: None,
        }
    }

    /// Sets the username claim.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }
}

/// Verifies bearer credentials and extracts their claims.
///
/// # Contract
///
/// Implementations must:
/// - Verify the credential's structure and signature
/// - Return `VerifierError::SignatureInvalid` for any credential that
///   fails verification, however malformed
/// - Return `VerifierError::Fault` only for capability breakage
///   (key misconfiguration, provider outage) - never for bad callers
/// - Never panic on attacker-controlled input
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verify a raw bearer credential (without any "Bearer " prefix).
    async fn verify(&self, credential: &str) -> Result<TokenClaims, VerifierError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// Minimal implementation exercising the trait contract.
    struct TestVerifier {
        claims: RwLock<HashMap<String, TokenClaims>>,
    }

    impl TestVerifier {
        fn new() -> Self {
            Self {
                claims: RwLock::new(HashMap::new()),
            }
        }

        fn accept(&self, credential: &str, claims: TokenClaims) {
            self.claims
                .write()
                .unwrap()
                .insert(credential.to_string(), claims);
        }
    }

    #[async_trait]
    impl CredentialVerifier for TestVerifier {
        async fn verify(&self, credential: &str) -> Result<TokenClaims, VerifierError> {
            self.claims
                .read()
                .unwrap()
                .get(credential)
                .cloned()
                .ok_or(VerifierError::SignatureInvalid)
        }
    }

    #[tokio::test]
    async fn verifier_returns_claims_for_known_credential() {
        let verifier = TestVerifier::new();
        verifier.accept("tok", TokenClaims::for_principal("u1").with_username("roma"));

        let claims = verifier.verify("tok").await.unwrap();

        assert_eq!(claims.principal_id.as_deref(), Some("u1"));
        assert_eq!(claims.username.as_deref(), Some("roma"));
    }

    #[tokio::test]
    async fn verifier_rejects_unknown_credential() {
        let verifier = TestVerifier::new();

        let result = verifier.verify("garbage").await;

        assert!(matches!(result, Err(VerifierError::SignatureInvalid)));
    }

    #[test]
    fn credential_verifier_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn CredentialVerifier) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn CredentialVerifier>>();
    }
}
