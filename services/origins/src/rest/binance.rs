//! Binance `ticker/price` and `ticker/24hr`

use serde_json::json;
use smocker::{Mock, MockBuilder};
use types::ExchangeMock;

use super::{fixed8, require_symbol, respond};
use crate::error::Result;
use crate::exchange::combine_mocks;

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    let mut mocks = combine_mocks(models, price)?;
    mocks.extend(combine_mocks(models, whole_day)?);
    Ok(mocks)
}

fn price(model: &ExchangeMock) -> Result<Option<Mock>> {
    let symbol = require_symbol(model)?.join("");
    let body = json!({
        "symbol": symbol,
        "price": fixed8(model.price),
    });
    let request = MockBuilder::get("/api/v3/ticker/price").with_query("symbol", symbol);
    Ok(Some(respond(request, model, body.to_string())))
}

fn whole_day(model: &ExchangeMock) -> Result<Option<Mock>> {
    let symbol = require_symbol(model)?.join("");
    let body = json!([{
        "symbol": symbol,
        "lastPrice": fixed8(model.price),
        "bidPrice": fixed8(model.bid),
        "askPrice": fixed8(model.ask),
        "volume": fixed8(model.volume),
        "closeTime": model.timestamp.timestamp_millis(),
    }]);
    let request = MockBuilder::get("/api/v3/ticker/24hr");
    Ok(Some(respond(request, model, body.to_string())))
}
