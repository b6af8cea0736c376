//! # Price Fixture Types
//!
//! Pure data structures describing what a mocked price source should report.
//!
//! ## Contents
//!
//! - [`Symbol`]: an upper-cased `BASE/QUOTE` asset pair with the separator
//!   conventions exchanges use in their URLs and payloads
//! - [`ExchangeMock`]: one fixture instance (status code, quote fields,
//!   timestamp and a typed bag of custom values for on-chain sources)
//! - [`CustomValue`] / [`FunctionData`]: the typed payloads on-chain builders
//!   read out of [`ExchangeMock::custom`]
//!
//! ## What This Crate Does NOT Contain
//! - ABI encoding (belongs in `codec`)
//! - Mock server wire format (belongs in `smocker`)
//! - Exchange-specific response templates (belongs in `origins`)
//!
//! ```rust
//! use types::ExchangeMock;
//!
//! let mock = ExchangeMock::new("binance")
//!     .with_symbol("ETH/BTC")
//!     .unwrap()
//!     .with_price(1.0);
//! assert_eq!(mock.symbol.unwrap().join(""), "ETHBTC");
//! ```

pub mod error;
pub mod fixture;
pub mod symbol;

pub use error::{FixtureError, Result};
pub use fixture::{CustomValue, ExchangeMock, FunctionData, BLOCK_NUMBER_KEY, DEFAULT_STATUS_CODE};
pub use symbol::Symbol;

// Re-exported so fixture authors don't need a direct ethabi dependency
pub use ethabi::{Address, Token};
