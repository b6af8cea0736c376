//! Coinbase Pro product ticker

use serde_json::json;
use smocker::{Mock, MockBuilder};
use types::ExchangeMock;

use super::{fixed6, require_symbol, respond};
use crate::error::Result;
use crate::exchange::combine_mocks;

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    combine_mocks(models, ticker)
}

/// Microsecond timestamp without trailing zeros, `2021-03-01T12:00:05.5Z`
fn trade_time(model: &ExchangeMock) -> String {
    let micros = model.timestamp.format("%Y-%m-%dT%H:%M:%S%.6f").to_string();
    format!("{}Z", micros.trim_end_matches('0').trim_end_matches('.'))
}

fn ticker(model: &ExchangeMock) -> Result<Option<Mock>> {
    let symbol = require_symbol(model)?.join("-");
    let body = json!({
        "trade_id": 24292500,
        "price": fixed6(model.price),
        "size": "0.16783975",
        "time": trade_time(model),
        "bid": fixed6(model.bid),
        "ask": fixed6(model.ask),
        "volume": fixed6(model.volume),
    });
    let request = MockBuilder::get(format!("/products/{}/ticker", symbol));
    Ok(Some(respond(request, model, body.to_string())))
}
