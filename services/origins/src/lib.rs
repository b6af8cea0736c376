//! # Price Origin Mocks
//!
//! Builds [Smocker](https://smocker.dev) mock definitions that impersonate
//! price sources: centralised exchange REST tickers and on-chain contracts read
//! through JSON-RPC multicalls.
//!
//! ## Flow
//!
//! ```text
//! ExchangeMock fixtures ──▶ MocksBuilder ──▶ Exchange::build_mocks ──▶ validate ──▶ mock server
//!                              (grouped          (rest::* / onchain::*)
//!                               by name)
//! ```
//!
//! On-chain builders start from the generic node plumbing in
//! [`onchain::ethrpc`] and append their protocol calls, each packed into one
//! aggregated multicall per fixture.
//!
//! ```rust
//! use origins::{build_mocks_for_exchange, ExchangeMock};
//!
//! let fixture = ExchangeMock::new("binance")
//!     .with_symbol("ETH/BTC")
//!     .unwrap()
//!     .with_price(1.0);
//! let mocks = build_mocks_for_exchange("binance", &[fixture]).unwrap();
//! assert_eq!(mocks[0].request.path.value, "/api/v3/ticker/price");
//! ```

pub mod error;
pub mod exchange;
pub mod fixture_file;
pub mod mocks_builder;
pub mod onchain;
pub mod rest;

pub use error::{OriginError, Result};
pub use exchange::{build_mocks_for_exchange, combine_mocks, Exchange, Family};
pub use fixture_file::{load_fixtures, parse_json, parse_yaml};
pub use mocks_builder::MocksBuilder;
pub use onchain::{rpc_call_request, rpc_result, RPC_PATH};

pub use types::{CustomValue, ExchangeMock, FunctionData, Symbol, BLOCK_NUMBER_KEY};
