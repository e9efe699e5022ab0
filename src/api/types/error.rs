//! API error rendered through the response envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::envelope::Envelope;
use crate::domain::DomainError;

/// API error with the status code and message the envelope will carry
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let envelope = Envelope::<serde_json::Value>::fail(self.status, self.message);
        (self.status, Json(envelope)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            // Every enumerated account failure is a client error
            DomainError::NotFound { .. }
            | DomainError::Validation { .. }
            | DomainError::Conflict { .. }
            | DomainError::PasswordMismatch { .. } => Self::bad_request(err.client_message()),
            DomainError::Storage { .. } | DomainError::Internal { .. } => {
                Self::internal(err.client_message())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("null value");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "null value");
    }

    #[test]
    fn test_domain_error_conversion() {
        let cases = [
            (DomainError::validation("null value"), "null value"),
            (DomainError::conflict("already exists"), "already exists"),
            (DomainError::not_found("no user"), "no user"),
            (
                DomainError::password_mismatch("password mismatch"),
                "password mismatch",
            ),
        ];

        for (domain_err, expected_message) in cases {
            let api_err: ApiError = domain_err.into();
            assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
            assert_eq!(api_err.message, expected_message);
        }
    }

    #[test]
    fn test_storage_error_maps_to_server_error() {
        let api_err: ApiError = DomainError::storage("store unavailable").into();
        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::bad_request("no user").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
