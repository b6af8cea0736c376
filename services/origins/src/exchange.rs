//! Exchange registry and mock assembly
//!
//! The set of supported price sources is closed: [`Exchange`] enumerates them
//! and dispatches to the matching builder. Names are case-sensitive and match
//! the keys fixture files use.

use std::fmt;
use std::str::FromStr;

use smocker::Mock;
use tracing::debug;
use types::ExchangeMock;

use crate::error::{OriginError, Result};
use crate::onchain::{balancer_v2, curve, ethrpc, rates, uniswap_v2, uniswap_v3};
use crate::rest::{
    balancer, binance, bitfinex, bithumb, bitstamp, bittrex, coinbase, cryptocompare, ftx, gateio,
    gemini, hitbtc, huobi, kraken, kucoin, kyber, okex, poloniex, upbit,
};

/// How a price source is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Plain HTTP ticker endpoints
    Rest,
    /// Contract reads through JSON-RPC `eth_call`
    OnChain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Exchange {
    Balancer,
    Binance,
    Bitfinex,
    Bithumb,
    Bitstamp,
    Bittrex,
    Coinbase,
    CryptoCompare,
    Ftx,
    GateIo,
    Gemini,
    HitBtc,
    Huobi,
    Kraken,
    Kucoin,
    Kyber,
    Okex,
    Poloniex,
    Upbit,
    EthRpc,
    BalancerV2,
    Curve,
    Dsr,
    RocketPool,
    Sdai,
    Sushiswap,
    UniswapV2,
    UniswapV3,
    WstEth,
}

impl Exchange {
    pub const ALL: [Exchange; 29] = [
        Exchange::Balancer,
        Exchange::Binance,
        Exchange::Bitfinex,
        Exchange::Bithumb,
        Exchange::Bitstamp,
        Exchange::Bittrex,
        Exchange::Coinbase,
        Exchange::CryptoCompare,
        Exchange::Ftx,
        Exchange::GateIo,
        Exchange::Gemini,
        Exchange::HitBtc,
        Exchange::Huobi,
        Exchange::Kraken,
        Exchange::Kucoin,
        Exchange::Kyber,
        Exchange::Okex,
        Exchange::Poloniex,
        Exchange::Upbit,
        Exchange::EthRpc,
        Exchange::BalancerV2,
        Exchange::Curve,
        Exchange::Dsr,
        Exchange::RocketPool,
        Exchange::Sdai,
        Exchange::Sushiswap,
        Exchange::UniswapV2,
        Exchange::UniswapV3,
        Exchange::WstEth,
    ];

    /// Registry key of this exchange
    pub fn name(&self) -> &'static str {
        match self {
            Exchange::Balancer => "balancer",
            Exchange::Binance => "binance",
            Exchange::Bitfinex => "bitfinex",
            Exchange::Bithumb => "bithumb",
            Exchange::Bitstamp => "bitstamp",
            Exchange::Bittrex => "bittrex",
            Exchange::Coinbase => "coinbase",
            Exchange::CryptoCompare => "cryptocompare",
            Exchange::Ftx => "ftx",
            Exchange::GateIo => "gateio",
            Exchange::Gemini => "gemini",
            Exchange::HitBtc => "hitbtc",
            Exchange::Huobi => "huobi",
            Exchange::Kraken => "kraken",
            Exchange::Kucoin => "kucoin",
            Exchange::Kyber => "kyber",
            Exchange::Okex => "okex",
            Exchange::Poloniex => "poloniex",
            Exchange::Upbit => "upbit",
            Exchange::EthRpc => "ethrpc",
            Exchange::BalancerV2 => "balancerV2",
            Exchange::Curve => "curve",
            Exchange::Dsr => "dsr",
            Exchange::RocketPool => "rocketpool",
            Exchange::Sdai => "sdai",
            Exchange::Sushiswap => "sushiswap",
            Exchange::UniswapV2 => "uniswapV2",
            Exchange::UniswapV3 => "uniswapV3",
            Exchange::WstEth => "wsteth",
        }
    }

    /// Look up a registry key; `bitthumb` is accepted for Bithumb
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "bitthumb" {
            return Some(Exchange::Bithumb);
        }
        Self::ALL.iter().copied().find(|exchange| exchange.name() == name)
    }

    pub fn family(&self) -> Family {
        match self {
            Exchange::EthRpc
            | Exchange::BalancerV2
            | Exchange::Curve
            | Exchange::Dsr
            | Exchange::RocketPool
            | Exchange::Sdai
            | Exchange::Sushiswap
            | Exchange::UniswapV2
            | Exchange::UniswapV3
            | Exchange::WstEth => Family::OnChain,
            _ => Family::Rest,
        }
    }

    /// Build every mock this exchange needs for `models`, unvalidated
    pub fn build_mocks(&self, models: &[ExchangeMock]) -> Result<Vec<Mock>> {
        match self {
            Exchange::Balancer => balancer::build_mocks(models),
            Exchange::Binance => binance::build_mocks(models),
            Exchange::Bitfinex => bitfinex::build_mocks(models),
            Exchange::Bithumb => bithumb::build_mocks(models),
            Exchange::Bitstamp => bitstamp::build_mocks(models),
            Exchange::Bittrex => bittrex::build_mocks(models),
            Exchange::Coinbase => coinbase::build_mocks(models),
            Exchange::CryptoCompare => cryptocompare::build_mocks(models),
            Exchange::Ftx => ftx::build_mocks(models),
            Exchange::GateIo => gateio::build_mocks(models),
            Exchange::Gemini => gemini::build_mocks(models),
            Exchange::HitBtc => hitbtc::build_mocks(models),
            Exchange::Huobi => huobi::build_mocks(models),
            Exchange::Kraken => kraken::build_mocks(models),
            Exchange::Kucoin => kucoin::build_mocks(models),
            Exchange::Kyber => kyber::build_mocks(models),
            Exchange::Okex => okex::build_mocks(models),
            Exchange::Poloniex => poloniex::build_mocks(models),
            Exchange::Upbit => upbit::build_mocks(models),
            Exchange::EthRpc => ethrpc::build_mocks(models),
            Exchange::BalancerV2 => balancer_v2::build_mocks(models),
            Exchange::Curve => curve::build_mocks(models),
            Exchange::Dsr => rates::build_dsr_mocks(models),
            Exchange::RocketPool => rates::build_rocketpool_mocks(models),
            Exchange::Sdai => rates::build_sdai_mocks(models),
            // Sushiswap pairs are Uniswap V2 forks
            Exchange::Sushiswap | Exchange::UniswapV2 => uniswap_v2::build_mocks(models),
            Exchange::UniswapV3 => uniswap_v3::build_mocks(models),
            Exchange::WstEth => rates::build_wsteth_mocks(models),
        }
    }
}

impl FromStr for Exchange {
    type Err = OriginError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| OriginError::UnknownExchange {
            name: s.to_string(),
        })
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apply `build` to each model in order
///
/// Stops at the first error and returns nothing built so far. A model for
/// which `build` returns `None` contributes no mock.
pub fn combine_mocks<F>(models: &[ExchangeMock], build: F) -> Result<Vec<Mock>>
where
    F: Fn(&ExchangeMock) -> Result<Option<Mock>>,
{
    let mut mocks = Vec::with_capacity(models.len());
    for model in models {
        if let Some(mock) = build(model)? {
            mocks.push(mock);
        }
    }
    Ok(mocks)
}

/// Build and validate all mocks for the exchange registered as `name`
pub fn build_mocks_for_exchange(name: &str, models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    let exchange: Exchange = name.parse()?;
    let mut mocks = exchange.build_mocks(models)?;
    for mock in &mut mocks {
        mock.validate().map_err(|source| OriginError::Validation {
            exchange: name.to_string(),
            source,
        })?;
    }
    debug!(exchange = name, fixtures = models.len(), mocks = mocks.len(), "Built mocks");
    Ok(mocks)
}
