//! Error types for fixture construction and custom field lookup

use thiserror::Error;

/// Result type alias for fixture operations
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Errors raised while building or reading an exchange fixture
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FixtureError {
    /// Symbol string is not of the form `BASE/QUOTE`, or one half is empty
    #[error("Invalid symbol format: '{input}' - expected BASE/QUOTE with exactly one '/'; an empty BASE or QUOTE is rejected too")]
    InvalidSymbolFormat { input: String },

    /// Required custom field is absent
    #[error("Missing custom field: {field}")]
    MissingField { field: String },

    /// Custom field is present but carries a different kind of value
    #[error("Custom field {field} has wrong kind: expected {expected}, found {found}")]
    WrongKind {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}
