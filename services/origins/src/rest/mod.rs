//! Centralised exchange ticker endpoints
//!
//! Each builder reproduces the path, query and body shape of one venue's
//! public REST API. Numbers are rendered with the precision the venue uses:
//! six decimals unless noted otherwise in the builder.

pub mod balancer;
pub mod binance;
pub mod bitfinex;
pub mod bithumb;
pub mod bitstamp;
pub mod bittrex;
pub mod coinbase;
pub mod cryptocompare;
pub mod ftx;
pub mod gateio;
pub mod gemini;
pub mod hitbtc;
pub mod huobi;
pub mod kraken;
pub mod kucoin;
pub mod kyber;
pub mod okex;
pub mod poloniex;
pub mod upbit;

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use smocker::{Mock, MockBuilder};
use types::{ExchangeMock, Symbol, DEFAULT_STATUS_CODE};

use crate::error::{OriginError, Result};

pub(crate) fn require_symbol(model: &ExchangeMock) -> Result<&Symbol> {
    model.symbol.as_ref().ok_or_else(|| OriginError::MissingSymbol {
        exchange: model.name.clone(),
    })
}

/// Finish `request` with the model's status and a JSON body
pub(crate) fn respond(request: MockBuilder, model: &ExchangeMock, body: String) -> Mock {
    request
        .with_status(model.status_code)
        .with_json_body(body)
        .build()
}

pub(crate) fn fixed6(value: f64) -> String {
    format!("{:.6}", value)
}

pub(crate) fn fixed8(value: f64) -> String {
    format!("{:.8}", value)
}

/// RFC 3339 with millisecond precision, e.g. `2021-03-01T12:00:00.000Z`
pub(crate) fn iso_millis(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// One model per symbol, later models replacing earlier ones
///
/// Combined endpoints serve every pair from a single mock, and a pair listed
/// twice would make the payload ambiguous.
pub(crate) fn latest_by_symbol(models: &[ExchangeMock]) -> Result<BTreeMap<&Symbol, &ExchangeMock>> {
    let mut latest = BTreeMap::new();
    for model in models {
        latest.insert(require_symbol(model)?, model);
    }
    Ok(latest)
}

/// Status for a combined endpoint: the first model's, or 200 without models
pub(crate) fn combined_status(models: &[ExchangeMock]) -> u16 {
    models
        .first()
        .map_or(DEFAULT_STATUS_CODE, |model| model.status_code)
}
