//! KuCoin level 1 orderbook

use smocker::{Mock, MockBuilder};
use types::ExchangeMock;

use super::{fixed6, require_symbol, respond};
use crate::error::Result;
use crate::exchange::combine_mocks;

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    combine_mocks(models, level1)
}

fn level1(model: &ExchangeMock) -> Result<Option<Mock>> {
    let symbol = require_symbol(model)?.join("-");
    let body = format!(
        r#"{{"code":"200000","data":{{"time":{},"price":"{}","bestBid":"{}","bestAsk":"{}"}}}}"#,
        model.timestamp.timestamp_millis(),
        fixed6(model.price),
        fixed6(model.bid),
        fixed6(model.ask)
    );
    let request = MockBuilder::get("/api/v1/market/orderbook/level1").with_query("symbol", symbol);
    Ok(Some(respond(request, model, body)))
}
