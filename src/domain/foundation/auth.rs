//! Authorization vocabulary for the domain layer.
//!
//! These types represent the outcome of checking a bearer credential.
//! They have **no provider dependencies** - any credential verifier
//! (HS256 shared secret, OIDC, a test mock) populates them through the
//! `CredentialVerifier` port.
//!
//! # Design Decisions
//!
//! - Deny is a *value*, not an error: every mutation handler needs a
//!   decision, and a rejected caller is an expected outcome.
//! - Verifier breakage (`VerifierError::Fault`) is kept distinct so
//!   operators can tell "bad caller" from "broken system".

use thiserror::Error;

use super::UserId;

/// The authenticated identity derived from a verified credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// The unique user identifier carried in the credential.
    pub id: UserId,

    /// Username claim, if the credential carried one.
    pub username: Option<String>,
}

impl Principal {
    /// Creates a new principal.
    pub fn new(id: UserId, username: Option<String>) -> Self {
        Self { id, username }
    }
}

/// Why a credential was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// No credential was presented, or it was empty.
    MissingCredential,

    /// The credential is malformed or its signature does not verify.
    InvalidCredential,

    /// The credential verified but carries no principal identifier.
    /// A signed-but-malformed credential is not trusted.
    MissingPrincipal,
}

impl std::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DenialReason::MissingCredential => "missing credential",
            DenialReason::InvalidCredential => "invalid credential",
            DenialReason::MissingPrincipal => "credential carries no principal id",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of an authorization check, computed once per mutation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// The mutation may proceed as the contained principal.
    Allowed(Principal),

    /// The mutation must not proceed.
    Denied(DenialReason),
}

impl AccessDecision {
    /// Returns true if access was granted.
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed(_))
    }

    /// Returns true if access was denied.
    pub fn is_denied(&self) -> bool {
        !self.is_allowed()
    }

    /// Returns the principal if access was granted.
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            AccessDecision::Allowed(principal) => Some(principal),
            AccessDecision::Denied(_) => None,
        }
    }
}

/// Errors produced by a credential verifier.
///
/// `SignatureInvalid` is the normal failure mode for bad callers and is
/// translated to a denial by the gate. `Fault` means the verification
/// capability itself is broken (key misconfiguration, provider outage)
/// and must propagate instead of being swallowed as a denial.
#[derive(Debug, Clone, Error)]
pub enum VerifierError {
    /// The credential is structurally invalid or its signature fails.
    #[error("Credential signature is invalid")]
    SignatureInvalid,

    /// The verification capability is misconfigured or unreachable.
    #[error("Credential verifier fault: {0}")]
    Fault(String),
}

impl VerifierError {
    /// Creates a fault error with a message.
    pub fn fault(message: impl Into<String>) -> Self {
        Self::Fault(message.into())
    }

    /// Returns true if this is a configuration-level fault.
    pub fn is_fault(&self) -> bool {
        matches!(self, VerifierError::Fault(_))
    }
}
