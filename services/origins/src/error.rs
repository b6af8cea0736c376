//! Error types for mock assembly

use codec::CodecError;
use smocker::SmockerError;
use thiserror::Error;
use types::FixtureError;

/// Result type alias for mock building operations
pub type Result<T> = std::result::Result<T, OriginError>;

/// Main error type for building and deploying price-source mocks
#[derive(Debug, Error)]
pub enum OriginError {
    /// No builder is registered under the requested name
    #[error("Unknown exchange: {name}")]
    UnknownExchange {
        /// The name that was looked up
        name: String,
    },

    /// Fixture is missing a field or carries the wrong kind of value
    #[error("Invalid fixture for {exchange}: {source}")]
    Fixture {
        /// Exchange whose fixture was rejected
        exchange: String,
        #[source]
        source: FixtureError,
    },

    /// Builder needs a symbol the fixture does not set
    #[error("Fixture for {exchange} has no symbol")]
    MissingSymbol {
        /// Exchange whose fixture lacks a symbol
        exchange: String,
    },

    /// ABI encoding of a call or its return values failed
    #[error("Encoding failed for {exchange}: {source}")]
    Encoding {
        /// Exchange being built
        exchange: String,
        #[source]
        source: CodecError,
    },

    /// Function data entries do not fit the function they describe
    #[error("Invalid function data for {exchange}.{function}: {reason}")]
    InvalidFunctionData {
        /// Exchange being built
        exchange: String,
        /// Fixture key of the function
        function: String,
        /// What is wrong with the entries
        reason: String,
    },

    /// Built mock failed validation
    #[error("Invalid mock for {exchange}: {source}")]
    Validation {
        /// Exchange whose mock was rejected
        exchange: String,
        #[source]
        source: SmockerError,
    },

    /// Mock server reset or submission failed
    #[error("Failed to {operation} mocks: {source}")]
    Server {
        /// `reset` or `submit`
        operation: &'static str,
        #[source]
        source: SmockerError,
    },

    /// Mock list could not be serialized
    #[error("Failed to serialize mocks: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Debug dump or fixture file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Fixture file could not be parsed
    #[error("Invalid fixture file: {0}")]
    FixtureFile(String),
}

impl OriginError {
    pub fn fixture(exchange: &str, source: FixtureError) -> Self {
        Self::Fixture {
            exchange: exchange.to_string(),
            source,
        }
    }

    pub fn encoding(exchange: &str, source: CodecError) -> Self {
        Self::Encoding {
            exchange: exchange.to_string(),
            source,
        }
    }

    pub fn server(operation: &'static str, source: SmockerError) -> Self {
        Self::Server { operation, source }
    }

    pub fn invalid_function_data(exchange: &str, function: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFunctionData {
            exchange: exchange.to_string(),
            function: function.to_string(),
            reason: reason.into(),
        }
    }
}
