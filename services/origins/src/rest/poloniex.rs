//! Poloniex `returnTicker`: every pair in one object keyed `QUOTE_BASE`

use serde_json::{json, Map, Value};
use smocker::{Mock, MockBuilder};
use types::ExchangeMock;

use super::{combined_status, fixed8, latest_by_symbol};
use crate::error::Result;

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    let tickers: Map<String, Value> = latest_by_symbol(models)?
        .into_iter()
        .enumerate()
        .map(|(id, (symbol, model))| {
            let ticker = json!({
                "id": id + 1,
                "last": fixed8(model.price),
                "lowestAsk": fixed8(model.ask),
                "highestBid": fixed8(model.bid),
                "percentChange": "0.01131570",
                "baseVolume": fixed8(model.volume),
                "quoteVolume": "1087.92098487",
                "isFrozen": "0",
                "postOnly": "0",
                "marginTradingEnabled": "1",
                "high24hr": "0.08840000",
                "low24hr": "0.08626057",
            });
            (symbol.join_reversed("_"), ticker)
        })
        .collect();

    let mock = MockBuilder::get("/public")
        .with_query("command", "returnTicker")
        .with_status(combined_status(models))
        .with_json_body(Value::Object(tickers).to_string())
        .build();
    Ok(vec![mock])
}
