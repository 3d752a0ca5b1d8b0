//! Error types for Paystack calls.
//!
//! A rejected request is not an error: non-200 answers come back as a failed
//! [`ApiResponse`](crate::ApiResponse). These types cover the faults that
//! leave no envelope to inspect.

/// Failures below the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Request failed: {0}")]
    Request(String),
}

/// Errors returned by every client operation.
#[derive(Debug, thiserror::Error)]
pub enum PaystackError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Response envelope has no `{0}` field")]
    MissingField(&'static str),

    #[error("Invalid path segment: {0:?}")]
    InvalidPathSegment(String),
}
