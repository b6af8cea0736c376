//! Bitfinex v2 tickers
//!
//! Bitfinex answers with positional arrays:
//! `[BID, BID_SIZE, ASK, ASK_SIZE, DAILY_CHANGE, DAILY_CHANGE_PERC, LAST, VOLUME, HIGH, LOW]`.
//! The list endpoint prefixes each row with the `t`-symbol.

use smocker::{Mock, MockBuilder};
use types::ExchangeMock;

use super::{fixed6, require_symbol, respond};
use crate::error::Result;
use crate::exchange::combine_mocks;

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    let mut mocks = combine_mocks(models, ticker)?;
    mocks.extend(combine_mocks(models, ticker_list)?);
    Ok(mocks)
}

fn trading_symbol(model: &ExchangeMock) -> Result<String> {
    Ok(format!("t{}", require_symbol(model)?.join("")))
}

fn ticker_fields(model: &ExchangeMock) -> String {
    format!(
        "{},90.17754546000003,{},77.37476201,0.001204,0.0139,{},{},0.088377,0.08629",
        fixed6(model.bid),
        fixed6(model.ask),
        fixed6(model.price),
        fixed6(model.volume)
    )
}

fn ticker(model: &ExchangeMock) -> Result<Option<Mock>> {
    let request = MockBuilder::get(format!("/v2/ticker/{}", trading_symbol(model)?));
    Ok(Some(respond(request, model, format!("[{}]", ticker_fields(model)))))
}

fn ticker_list(model: &ExchangeMock) -> Result<Option<Mock>> {
    let symbol = trading_symbol(model)?;
    let body = format!(r#"[["{}",{}]]"#, symbol, ticker_fields(model));
    let request = MockBuilder::get("/v2/tickers").with_query("symbols", symbol);
    Ok(Some(respond(request, model, body)))
}
