//! Bitstamp v2 ticker

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
    let symbol = require_symbol(model)?.join_lowercase("");
    // Bitstamp quotes the unix timestamp as a string
    let body = json!({
        "last": fixed6(model.price),
        "timestamp": model.timestamp.timestamp().to_string(),
        "bid": fixed6(model.bid),
        "volume": fixed6(model.volume),
        "ask": fixed6(model.ask),
    });
    let request = MockBuilder::get(format!("/api/v2/ticker/{}", symbol));
    Ok(Some(respond(request, model, body.to_string())))
}
