//! Bittrex v3 market ticker

use serde_json::json;
use smocker::{Mock, MockBuilder};
use types::ExchangeMock;

use super::{fixed6, require_symbol, respond};
use crate::error::Result;
use crate::exchange::combine_mocks;

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    combine_mocks(models, ticker)
}

fn ticker(model: &ExchangeMock) -> Result<Option<Mock>> {
    let symbol = require_symbol(model)?.join("-");
    let body = json!({
        "symbol": symbol,
        "lastTradeRate": fixed6(model.price),
        "bidRate": fixed6(model.bid),
        "askRate": fixed6(model.ask),
    });
    let request = MockBuilder::get(format!("/v3/markets/{}/ticker", symbol));
    Ok(Some(respond(request, model, body.to_string())))
}
