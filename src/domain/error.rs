use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Authentication failed: {message}")]
    PasswordMismatch { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn password_mismatch(message: impl Into<String>) -> Self {
        Self::PasswordMismatch {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Message as it is reported to the client, without the variant prefix.
    pub fn client_message(&self) -> &str {
        match self {
            Self::NotFound { message }
            | Self::Validation { message }
            | Self::Conflict { message }
            | Self::PasswordMismatch { message }
            | Self::Storage { message }
            | Self::Internal { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("no user");
        assert_eq!(error.to_string(), "Not found: no user");
        assert_eq!(error.client_message(), "no user");
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("null value");
        assert_eq!(error.to_string(), "Validation error: null value");
    }

    #[test]
    fn test_conflict_error() {
        let error = DomainError::conflict("already exists");
        assert_eq!(error.to_string(), "Conflict: already exists");
    }

    #[test]
    fn test_password_mismatch_error() {
        let error = DomainError::password_mismatch("password mismatch");
        assert_eq!(
            error.to_string(),
            "Authentication failed: password mismatch"
        );
        assert_eq!(error.client_message(), "password mismatch");
    }
}
