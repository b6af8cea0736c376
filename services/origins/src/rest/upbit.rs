//! Upbit v1 ticker, markets spelled `QUOTE-BASE`

use smocker::{Mock, MockBuilder};
use types::ExchangeMock;

use super::{require_symbol, respond};
use crate::error::Result;
use crate::exchange::combine_mocks;

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    combine_mocks(models, ticker)
}

fn ticker(model: &ExchangeMock) -> Result<Option<Mock>> {
    let market = require_symbol(model)?.join_reversed("-");
    let millis = model.timestamp.timestamp_millis();
    let body = format!(
        r#"[{{"market":"{}","trade_date":"{}","trade_time":"{}","trade_timestamp":{},"trade_price":{:.6},"trade_volume":{:.6},"timestamp":{}}}]"#,
        market,
        model.timestamp.format("%Y%m%d"),
        model.timestamp.format("%H%M%S"),
        millis,
        model.price,
        model.volume,
        millis
    );
    let request = MockBuilder::get("/v1/ticker").with_query("markets", market);
    Ok(Some(respond(request, model, body)))
}
