//! The authorization gate for mutation endpoints.
//!
//! Every create/update/delete handler calls [`AuthorizationGate::authorize`]
//! with the presented bearer credential before touching the store. The gate
//! returns an [`AccessDecision`] by value: Deny is an expected outcome, not
//! an error. Only verifier breakage propagates, as [`GateError`].
//!
//! The gate itself performs no cryptography and no I/O; it delegates
//! verification to the injected [`CredentialVerifier`] port and contains
//! only presence checks, decode orchestration, and the principal-id check.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{
    AccessDecision, DenialReason, Principal, UserId, VerifierError,
};
use crate::ports::CredentialVerifier;

/// Fatal errors from an authorization check.
///
/// Distinct from a denial so operators can tell "bad caller" from
/// "broken system". The HTTP layer maps this to a 5xx, never a 401.
#[derive(Debug, Clone, Error)]
pub enum GateError {
    /// The credential verification capability is misconfigured or down.
    #[error("Credential verifier fault: {0}")]
    VerifierFault(String),
}

/// Decides whether a mutation may proceed for a presented credential.
///
/// Stateless between calls; safe to share across request handlers.
pub struct AuthorizationGate {
    verifier: Arc<dyn CredentialVerifier>,
}

impl AuthorizationGate {
    /// Creates a gate over a credential verifier.
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { verifier }
    }

    /// Authorize a mutation for the presented bearer credential.
    ///
    /// # Returns
    ///
    /// * `Ok(Allowed(principal))` - credential verified and carries a
    ///   principal id; the mutation may proceed as that principal
    /// * `Ok(Denied(reason))` - credential absent, invalid, or signed
    ///   without a principal id; the caller must not mutate
    /// * `Err(GateError::VerifierFault)` - the verifier itself broke;
    ///   must propagate rather than masquerade as a denial
    pub async fn authorize(
        &self,
        credential: Option<&str>,
    ) -> Result<AccessDecision, GateError> {
        let credential = match credential {
            Some(token) if !token.is_empty() => token,
            _ => {
                tracing::debug!("mutation attempted without a credential");
                return Ok(AccessDecision::Denied(DenialReason::MissingCredential));
            }
        };

        let claims = match self.verifier.verify(credential).await {
            Ok(claims) => claims,
            Err(VerifierError::SignatureInvalid) => {
                tracing::debug!("credential failed verification");
                return Ok(AccessDecision::Denied(DenialReason::InvalidCredential));
            }
            Err(VerifierError::Fault(message)) => {
                tracing::error!("credential verifier fault: {}", message);
                return Err(GateError::VerifierFault(message));
            }
        };

        // A verified credential without a principal id is still rejected.
        // UserId::new also catches an id claim that is present but empty.
        let principal_id = match claims.principal_id.as_deref().map(UserId::new) {
            Some(Ok(id)) => id,
            _ => {
                tracing::warn!("verified credential carries no principal id");
                return Ok(AccessDecision::Denied(DenialReason::MissingPrincipal));
            }
        };

        Ok(AccessDecision::Allowed(Principal::new(
            principal_id,
            claims.username,
        )))
    }
}

impl std::fmt::Debug for AuthorizationGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationGate").finish_non_exhaustive()
    }
}
