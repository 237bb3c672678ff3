//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Unique identifier for a user, as issued by the identity store.
///
/// Stored as an opaque string because the backing document database
/// assigns ids in its own format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("user_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_new_accepts_non_empty() {
        let id = UserId::new("5a422a851b54a676234d17f7").unwrap();
        assert_eq!(id.as_str(), "5a422a851b54a676234d17f7");
    }

    #[test]
    fn user_id_new_rejects_empty() {
        assert!(UserId::new("").is_err());
    }

    #[test]
    fn user_id_displays_inner_value() {
        let id = UserId::new("u1").unwrap();
        assert_eq!(format!("{}", id), "u1");
    }
}
