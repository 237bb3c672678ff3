//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::Environment;

/// Authentication configuration (bearer token verification)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret the login service signs bearer tokens with.
    /// Held as a secret so it never appears in debug output or logs.
    pub token_secret: SecretString,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// The secret must always be present; in production it must also be
    /// long enough to resist brute force against HS256.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.token_secret.expose_secret();

        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__TOKEN_SECRET"));
        }

        if *environment == Environment::Production && secret.len() < 32 {
            return Err(ValidationError::TokenSecretTooShort);
        }

        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: SecretString::new(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_secret(secret: &str) -> AuthConfig {
        AuthConfig {
            token_secret: SecretString::new(secret.to_string()),
        }
    }

    #[test]
    fn validation_rejects_missing_secret() {
        let config = AuthConfig::default();
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn validation_accepts_short_secret_in_development() {
        let config = config_with_secret("dev-secret");
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn validation_rejects_short_secret_in_production() {
        let config = config_with_secret("short");
        assert!(matches!(
            config.validate(&Environment::Production),
            Err(ValidationError::TokenSecretTooShort)
        ));
    }

    #[test]
    fn validation_accepts_long_secret_in_production() {
        let config = config_with_secret("0123456789abcdef0123456789abcdef");
        assert!(config.validate(&Environment::Production).is_ok());
    }

    #[test]
    fn debug_output_redacts_the_secret() {
        let config = config_with_secret("super-secret-value");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret-value"));
    }
}
