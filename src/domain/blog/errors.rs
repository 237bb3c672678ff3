//! Error types for blog aggregation.

use thiserror::Error;

/// Errors produced by the aggregation operations.
///
/// Aggregation never fails on well-formed input. A missing field is a
/// precondition violation and aborts the whole call - silently coercing
/// it to zero would mask data problems in the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// A post lacks a field the operation needs.
    #[error("Post at index {index} is missing required field '{field}'")]
    InvalidRecord { index: usize, field: &'static str },
}

impl StatsError {
    /// Creates an invalid record error for the post at `index`.
    pub fn invalid_record(index: usize, field: &'static str) -> Self {
        StatsError::InvalidRecord { index, field }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_record_displays_index_and_field() {
        let err = StatsError::invalid_record(3, "likes");
        assert_eq!(
            format!("{}", err),
            "Post at index 3 is missing required field 'likes'"
        );
    }
}
