//! # Multicall Codec
//!
//! ## Purpose
//!
//! Byte-exact Ethereum ABI encoding for simulated `eth_call` traffic. Price
//! clients batch their contract reads through the Multicall contract's
//! `aggregate((address,bytes)[])`; a mock can only recognise such a request by
//! matching the encoded calldata verbatim and has to answer with an equally
//! exact `(uint256,bytes[])` payload.
//!
//! ## What This Crate Contains
//! - [`multicall`]: `aggregate` calldata and return data, plus decoders
//! - [`contracts`]: the contract functions on-chain mocks simulate, with
//!   type-checked call and return encoding
//! - [`hex_utils`]: `0x`-prefixed hex as JSON-RPC carries it
//!
//! ## What This Crate Does NOT Contain
//! - Fixture types (belongs in `types`)
//! - JSON-RPC envelopes and mock assembly (belongs in `origins`)
//!
//! ## Example
//!
//! ```rust
//! use codec::{contracts, encode_multicall_args, to_hex, MultiCall};
//! use ethabi::Address;
//!
//! let call = contracts::GET_EXCHANGE_RATE.encode_call(&[]).unwrap();
//! let args = encode_multicall_args(&[MultiCall::new(Address::zero(), call)]);
//! assert!(to_hex(&args).starts_with("0x252dba42"));
//! ```

pub mod contracts;
pub mod error;
pub mod hex_utils;
pub mod multicall;

pub use contracts::ContractFunction;
pub use error::{CodecError, Result};
pub use hex_utils::{from_hex, quantity_hex, to_hex};
pub use multicall::{
    aggregate_selector, decode_multicall_args, decode_multicall_response, encode_multicall_args,
    encode_multicall_response, MultiCall,
};
