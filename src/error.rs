//! Error types for input validation.

use serde::{Serialize, Serializer};

/// Reason a raw input could not be turned into a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The date string is malformed or names a day that does not exist.
    #[error("invalid date")]
    InvalidDate,

    /// The age string is not an integer, or falls outside `0..=150`.
    #[error("invalid age")]
    InvalidAge,
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_date() {
        assert_eq!(ValidationError::InvalidDate.to_string(), "invalid date");
    }

    #[test]
    fn error_invalid_age() {
        assert_eq!(ValidationError::InvalidAge.to_string(), "invalid age");
    }

    #[test]
    fn error_serializes_as_message() {
        let json = serde_json::to_string(&ValidationError::InvalidAge).unwrap();
        assert_eq!(json, "\"invalid age\"");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ValidationError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ValidationError>();
    }
}
