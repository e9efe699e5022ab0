//! Uniform response envelope
//!
//! Every response, success or failure, carries the same shape: a numeric
//! status mirroring the HTTP status code, a human-readable message, and on
//! success a data object. Failures omit `data` entirely.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Response wrapper shared by all endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Build a success envelope carrying a data payload
    pub fn success(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data: Some(data),
        }
    }

    /// Build a failure envelope; failures never carry data
    pub fn fail(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_serialization() {
        let envelope = Envelope::success(
            StatusCode::OK,
            "login success",
            json!({ "userId": "u1" }),
        );

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "status": 200,
                "message": "login success",
                "data": { "userId": "u1" }
            })
        );
    }

    #[test]
    fn test_fail_envelope_omits_data() {
        let envelope = Envelope::<serde_json::Value>::fail(StatusCode::BAD_REQUEST, "no user");

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({ "status": 400, "message": "no user" }));
    }

    #[test]
    fn test_envelope_deserialization() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"status":400,"message":"login fail"}"#).unwrap();

        assert_eq!(envelope.status, 400);
        assert_eq!(envelope.message, "login fail");
        assert!(envelope.data.is_none());
    }
}
