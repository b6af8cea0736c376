//! Asset pair symbols
//!
//! Exchanges disagree on how a pair is spelled: `ETHBTC`, `ETH-BTC`, `eth_btc`,
//! `BTC-ETH`. [`Symbol`] keeps the canonical upper-cased halves and renders the
//! venue-specific spelling on demand.

use std::fmt;
use std::str::FromStr;

use crate::error::FixtureError;

/// An asset pair such as `ETH/BTC`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    pub base: String,
    pub quote: String,
}

impl Symbol {
    /// Build a pair from its halves, upper-casing both
    pub fn new(base: &str, quote: &str) -> Self {
        Self {
            base: base.to_uppercase(),
            quote: quote.to_uppercase(),
        }
    }

    /// `BASE{separator}QUOTE`, e.g. `ETH-BTC`
    pub fn join(&self, separator: &str) -> String {
        format!("{}{}{}", self.base, separator, self.quote)
    }

    /// `QUOTE{separator}BASE`, e.g. `BTC-ETH` for Upbit markets
    pub fn join_reversed(&self, separator: &str) -> String {
        format!("{}{}{}", self.quote, separator, self.base)
    }

    /// Lower-cased [`Symbol::join`], e.g. `ethbtc`
    pub fn join_lowercase(&self, separator: &str) -> String {
        self.join(separator).to_lowercase()
    }
}

impl FromStr for Symbol {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(base), Some(quote), None) if !base.is_empty() && !quote.is_empty() => {
                Ok(Self::new(base, quote))
            }
            _ => Err(FixtureError::InvalidSymbolFormat {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}
