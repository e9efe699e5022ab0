//! Request-field validation utilities

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("User ID cannot be empty")]
    EmptyId,

    #[error("Required field is missing or empty")]
    MissingField,
}

/// Extract a required request field.
///
/// A missing key and an empty string are both treated as absent, matching
/// the falsy check the account operations perform on their inputs.
pub fn required(value: Option<&str>) -> Result<&str, UserValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(UserValidationError::MissingField),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_present() {
        assert_eq!(required(Some("u1")), Ok("u1"));
    }

    #[test]
    fn test_required_empty() {
        assert_eq!(required(Some("")), Err(UserValidationError::MissingField));
    }

    #[test]
    fn test_required_missing() {
        assert_eq!(required(None), Err(UserValidationError::MissingField));
    }
}
