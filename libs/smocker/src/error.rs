//! Errors for mock validation and mock server communication

use thiserror::Error;

/// Result type alias for smocker operations
pub type Result<T> = std::result::Result<T, SmockerError>;

#[derive(Debug, Error)]
pub enum SmockerError {
    /// Transport-level failure talking to the mock server
    #[error("Mock server request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Mock server answered with a non-success status
    #[error("{operation} failed with status {status}: {body}")]
    Status {
        operation: &'static str,
        status: u16,
        body: String,
    },

    /// Mock list could not be serialized
    #[error("Failed to serialize mocks: {0}")]
    Json(#[from] serde_json::Error),

    /// Mock is structurally invalid
    #[error("Invalid mock: {reason}")]
    Validation { reason: String },
}
