//! OKEx v3 spot instrument ticker

use serde_json::json;
use smocker::{Mock, MockBuilder};
use types::ExchangeMock;

use super::{fixed6, iso_millis, require_symbol, respond};
use crate::error::Result;
use crate::exchange::combine_mocks;

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    combine_mocks(models, ticker)
}

fn ticker(model: &ExchangeMock) -> Result<Option<Mock>> {
    let symbol = require_symbol(model)?.join("-");
    let body = json!({
        "best_ask": fixed6(model.ask),
        "best_bid": fixed6(model.bid),
        "instrument_id": symbol,
        "product_id": symbol,
        "last": fixed6(model.price),
        "ask": fixed6(model.ask),
        "bid": fixed6(model.bid),
        "base_volume_24h": fixed6(model.volume),
        "timestamp": iso_millis(&model.timestamp),
    });
    let request = MockBuilder::get(format!("/api/spot/v3/instruments/{}/ticker", symbol));
    Ok(Some(respond(request, model, body.to_string())))
}
