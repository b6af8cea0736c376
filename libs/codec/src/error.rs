//! Codec errors for ABI encoding and decoding

use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors raised while encoding or decoding contract calls
#[derive(Debug, Error)]
pub enum CodecError {
    /// Call arguments do not match the declared input types
    #[error("Arguments for {function} do not match its signature: expected ({expected}), got {got}")]
    ArgumentMismatch {
        function: String,
        expected: String,
        got: String,
    },

    /// Return values do not match the declared output types
    #[error("Return values for {function} do not match its signature: expected ({expected}), got {got}")]
    ReturnMismatch {
        function: String,
        expected: String,
        got: String,
    },

    /// Payload does not start with the expected 4-byte selector
    #[error("Selector mismatch: expected 0x{expected}, found 0x{found}")]
    SelectorMismatch { expected: String, found: String },

    /// ABI decoding failed
    #[error("ABI decoding failed: {0}")]
    Decode(#[from] ethabi::Error),

    /// Hex string could not be parsed
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Decoded value does not fit the expected Rust type
    #[error("Value out of range for {field}")]
    OutOfRange { field: &'static str },
}
