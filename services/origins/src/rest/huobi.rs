//! Huobi merged detail and market tickers
//!
//! Huobi is priced off the bid. A fixture that sets a bid reports it; one
//! that only sets a price reports the price as the bid.

use smocker::{Mock, MockBuilder};
use types::ExchangeMock;

use super::{fixed6, require_symbol, respond};
use crate::error::Result;
use crate::exchange::combine_mocks;

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    let mut mocks = combine_mocks(models, merged)?;
    mocks.extend(combine_mocks(models, tickers)?);
    Ok(mocks)
}

fn quoted_price(model: &ExchangeMock) -> f64 {
    if model.bid != 0.0 {
        model.bid
    } else {
        model.price
    }
}

fn merged(model: &ExchangeMock) -> Result<Option<Mock>> {
    let symbol = require_symbol(model)?.join_lowercase("");
    let body = format!(
        r#"{{"status":"ok","ts":{},"tick":{{"vol":{},"bid":[{},0.3618],"ask":[{},1.947]}}}}"#,
        model.timestamp.timestamp_millis(),
        fixed6(model.volume),
        fixed6(quoted_price(model)),
        fixed6(model.ask)
    );
    let request = MockBuilder::get("/market/detail/merged").with_query("symbol", symbol);
    Ok(Some(respond(request, model, body)))
}

fn tickers(model: &ExchangeMock) -> Result<Option<Mock>> {
    let symbol = require_symbol(model)?.join_lowercase("");
    let price = fixed6(quoted_price(model));
    let body = format!(
        concat!(
            r#"{{"status":"ok","ts":{ts},"data":[{{"symbol":"{symbol}","#,
            r#""open":{price},"high":{price},"low":{price},"close":{price},"#,
            r#""amount":36551302.17544405,"vol":{vol},"count":1709,"#,
            r#""bid":{price},"bidSize":54300.341,"ask":{ask},"askSize":1923.4879}}]}}"#
        ),
        ts = model.timestamp.timestamp_millis(),
        symbol = symbol,
        price = price,
        vol = fixed6(model.volume),
        ask = fixed6(model.ask),
    );
    let request = MockBuilder::get("/market/tickers");
    Ok(Some(respond(request, model, body)))
}
