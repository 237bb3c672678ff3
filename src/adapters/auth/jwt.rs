//! HS256 JWT adapter for credential verification.
//!
//! This adapter implements the `CredentialVerifier` port for bearer
//! tokens signed with a shared secret, the scheme the login endpoint
//! issues tokens under: an HS256 JWT whose payload carries `id` and
//! `username` claims and no expiry (tokens are revoked by rotating the
//! secret).
//!
//! Any decode failure - bad structure, bad signature, wrong algorithm -
//! maps to `VerifierError::SignatureInvalid`. Only a misconfigured
//! signing secret maps to `VerifierError::Fault`.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::VerifierError;
use crate::ports::{CredentialVerifier, TokenClaims};

/// Payload of a bearer token as issued at login.
///
/// Both claims are optional on purpose: a token can carry a valid
/// signature and still lack them, and that case must decode cleanly
/// so the gate can reject it instead of crashing.
#[derive(Debug, Deserialize)]
struct BearerClaims {
    #[serde(default)]
    id: Option<String>,

    #[serde(default)]
    username: Option<String>,
}

/// Shared-secret JWT verifier.
///
/// This is the production implementation of `CredentialVerifier`.
pub struct JwtCredentialVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtCredentialVerifier {
    /// Creates a verifier over the configured signing secret.
    ///
    /// An empty secret is a configuration fault: it would make every
    /// unsigned token verifiable.
    pub fn new(secret: &SecretString) -> Result<Self, VerifierError> {
        let secret = secret.expose_secret();
        if secret.is_empty() {
            return Err(VerifierError::fault("token signing secret is empty"));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Login tokens carry no exp claim.
        validation.validate_exp = false;
        validation.set_required_spec_claims::<&str>(&[]);

        Ok(Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }
}

#[async_trait]
impl CredentialVerifier for JwtCredentialVerifier {
    async fn verify(&self, credential: &str) -> Result<TokenClaims, VerifierError> {
        let data = decode::<BearerClaims>(credential, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!("credential failed to verify: {}", e);
                VerifierError::SignatureInvalid
            })?;

        Ok(TokenClaims {
            principal_id: data.claims.id,
            username: data.claims.username,
        })
    }
}

impl std::fmt::Debug for JwtCredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtCredentialVerifier").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    const SECRET: &str = "unit-test-signing-secret";

    fn verifier() -> JwtCredentialVerifier {
        JwtCredentialVerifier::new(&SecretString::new(SECRET.to_string())).unwrap()
    }

    fn sign(payload: serde_json::Value, secret: &str) -> String {
        encode(
            &Header::default(),
            &payload,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn valid_token_yields_claims() {
        let token = sign(json!({ "id": "u1", "username": "roma" }), SECRET);

        let claims = verifier().verify(&token).await.unwrap();

        assert_eq!(claims.principal_id.as_deref(), Some("u1"));
        assert_eq!(claims.username.as_deref(), Some("roma"));
    }

    #[tokio::test]
    async fn signed_token_without_id_decodes_cleanly() {
        let token = sign(json!({ "username": "roma" }), SECRET);

        let claims = verifier().verify(&token).await.unwrap();

        assert!(claims.principal_id.is_none());
        assert_eq!(claims.username.as_deref(), Some("roma"));
    }

    #[tokio::test]
    async fn token_signed_with_wrong_secret_is_invalid() {
        let token = sign(json!({ "id": "u1" }), "some-other-secret");

        let result = verifier().verify(&token).await;

        assert!(matches!(result, Err(VerifierError::SignatureInvalid)));
    }

    #[tokio::test]
    async fn garbage_credential_is_invalid() {
        let result = verifier().verify("not-a-jwt").await;

        assert!(matches!(result, Err(VerifierError::SignatureInvalid)));
    }

    #[tokio::test]
    async fn tampered_payload_is_invalid() {
        let token = sign(json!({ "id": "u1" }), SECRET);
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged = sign(json!({ "id": "u2" }), SECRET);
        let forged_payload = forged.split('.').nth(1).unwrap();
        parts[1] = forged_payload;
        let tampered = parts.join(".");

        let result = verifier().verify(&tampered).await;

        assert!(matches!(result, Err(VerifierError::SignatureInvalid)));
    }

    #[test]
    fn empty_secret_is_a_configuration_fault() {
        let result = JwtCredentialVerifier::new(&SecretString::new(String::new()));

        assert!(matches!(result, Err(VerifierError::Fault(_))));
    }

    #[test]
    fn jwt_verifier_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JwtCredentialVerifier>();
    }
}
