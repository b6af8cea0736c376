//! Exchange fixture model
//!
//! An [`ExchangeMock`] states what one price source should report. REST-style
//! sources only need the quote fields; on-chain sources additionally read
//! typed entries out of [`ExchangeMock::custom`] (block number, token lists,
//! per-function call/return descriptors).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ethabi::{Address, Token};

use crate::error::{FixtureError, Result};
use crate::symbol::Symbol;

/// HTTP status a fixture answers with unless overridden
pub const DEFAULT_STATUS_CODE: u16 = 200;

/// Custom key every on-chain source reads its pinned block number from
pub const BLOCK_NUMBER_KEY: &str = "blockNumber";

/// One simulated contract call: callee, expected ABI arguments and the ABI
/// values the mock should return for it
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionData {
    pub address: Address,
    pub args: Vec<Token>,
    pub returns: Vec<Token>,
}

impl FunctionData {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            args: Vec::new(),
            returns: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: Vec<Token>) -> Self {
        self.args = args;
        self
    }

    pub fn with_returns(mut self, returns: Vec<Token>) -> Self {
        self.returns = returns;
        self
    }
}

/// Typed value stored under a custom key
#[derive(Debug, Clone, PartialEq)]
pub enum CustomValue {
    Integer(u64),
    Address(Address),
    Addresses(Vec<Address>),
    Functions(Vec<FunctionData>),
    Raw(String),
}

impl CustomValue {
    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            CustomValue::Integer(_) => "integer",
            CustomValue::Address(_) => "address",
            CustomValue::Addresses(_) => "address list",
            CustomValue::Functions(_) => "function data list",
            CustomValue::Raw(_) => "raw string",
        }
    }
}

impl From<u64> for CustomValue {
    fn from(value: u64) -> Self {
        CustomValue::Integer(value)
    }
}

impl From<Address> for CustomValue {
    fn from(value: Address) -> Self {
        CustomValue::Address(value)
    }
}

impl From<Vec<Address>> for CustomValue {
    fn from(value: Vec<Address>) -> Self {
        CustomValue::Addresses(value)
    }
}

impl From<Vec<FunctionData>> for CustomValue {
    fn from(value: Vec<FunctionData>) -> Self {
        CustomValue::Functions(value)
    }
}

impl From<String> for CustomValue {
    fn from(value: String) -> Self {
        CustomValue::Raw(value)
    }
}

impl From<&str> for CustomValue {
    fn from(value: &str) -> Self {
        CustomValue::Raw(value.to_string())
    }
}

/// Fixture for a single exchange/pair
///
/// Zero quote fields mean "unset"; builders that fall back between fields
/// (Huobi takes the bid when present, the price otherwise) rely on that.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeMock {
    /// Registry key selecting the builder
    pub name: String,
    pub status_code: u16,
    pub symbol: Option<Symbol>,
    pub price: f64,
    pub volume: f64,
    pub ask: f64,
    pub bid: f64,
    pub timestamp: DateTime<Utc>,
    pub custom: BTreeMap<String, CustomValue>,
}

impl ExchangeMock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status_code: DEFAULT_STATUS_CODE,
            symbol: None,
            price: 0.0,
            volume: 0.0,
            ask: 0.0,
            bid: 0.0,
            timestamp: Utc::now(),
            custom: BTreeMap::new(),
        }
    }

    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = status_code;
        self
    }

    /// Parse and set the pair; fails on anything but `BASE/QUOTE`
    pub fn with_symbol(self, symbol: &str) -> Result<Self> {
        Ok(self.with_pair(symbol.parse()?))
    }

    pub fn with_pair(mut self, symbol: Symbol) -> Self {
        self.symbol = Some(symbol);
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    pub fn with_ask(mut self, ask: f64) -> Self {
        self.ask = ask;
        self
    }

    pub fn with_bid(mut self, bid: f64) -> Self {
        self.bid = bid;
        self
    }

    pub fn with_time(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_custom(mut self, key: impl Into<String>, value: impl Into<CustomValue>) -> Self {
        self.custom.insert(key.into(), value.into());
        self
    }

    pub fn with_function_data(self, key: impl Into<String>, data: Vec<FunctionData>) -> Self {
        self.with_custom(key, CustomValue::Functions(data))
    }

    /// Block number every on-chain call of this fixture is pinned to
    pub fn block_number(&self) -> Result<u64> {
        self.custom_u64(BLOCK_NUMBER_KEY)
    }

    pub fn custom_u64(&self, key: &str) -> Result<u64> {
        match self.lookup(key)? {
            CustomValue::Integer(value) => Ok(*value),
            other => Err(wrong_kind(key, "integer", other)),
        }
    }

    pub fn custom_address(&self, key: &str) -> Result<Address> {
        match self.lookup(key)? {
            CustomValue::Address(address) => Ok(*address),
            other => Err(wrong_kind(key, "address", other)),
        }
    }

    pub fn custom_raw(&self, key: &str) -> Result<&str> {
        match self.lookup(key)? {
            CustomValue::Raw(value) => Ok(value),
            other => Err(wrong_kind(key, "raw string", other)),
        }
    }

    /// Address list under `key`, `None` when the key is absent
    pub fn optional_addresses(&self, key: &str) -> Result<Option<&[Address]>> {
        match self.custom.get(key) {
            None => Ok(None),
            Some(CustomValue::Addresses(addresses)) => Ok(Some(addresses)),
            Some(other) => Err(wrong_kind(key, "address list", other)),
        }
    }

    /// Non-empty function data list under `key`
    pub fn function_data(&self, key: &str) -> Result<&[FunctionData]> {
        self.optional_function_data(key)?
            .ok_or_else(|| FixtureError::MissingField {
                field: key.to_string(),
            })
    }

    /// Function data list under `key`, `None` when absent or empty
    pub fn optional_function_data(&self, key: &str) -> Result<Option<&[FunctionData]>> {
        match self.custom.get(key) {
            None => Ok(None),
            Some(CustomValue::Functions(data)) if data.is_empty() => Ok(None),
            Some(CustomValue::Functions(data)) => Ok(Some(data)),
            Some(other) => Err(wrong_kind(key, "function data list", other)),
        }
    }

    fn lookup(&self, key: &str) -> Result<&CustomValue> {
        self.custom.get(key).ok_or_else(|| FixtureError::MissingField {
            field: key.to_string(),
        })
    }
}

fn wrong_kind(field: &str, expected: &'static str, found: &CustomValue) -> FixtureError {
    FixtureError::WrongKind {
        field: field.to_string(),
        expected,
        found: found.kind(),
    }
}
