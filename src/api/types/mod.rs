//! Shared API types - the response envelope, errors and JSON extraction

pub mod envelope;
pub mod error;
pub mod json;

pub use envelope::Envelope;
pub use error::ApiError;
pub use json::Json;
