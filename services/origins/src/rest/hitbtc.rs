//! HitBTC v2 public ticker

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
    let symbol = require_symbol(model)?.join("");
    let body = json!({
        "symbol": symbol,
        "ask": fixed6(model.ask),
        "bid": fixed6(model.bid),
        "last": fixed6(model.price),
        "volume": fixed6(model.volume),
        "timestamp": iso_millis(&model.timestamp),
    });
    let request = MockBuilder::get(format!("/api/2/public/ticker/{}", symbol));
    Ok(Some(respond(request, model, body.to_string())))
}
