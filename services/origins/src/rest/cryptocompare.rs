//! CryptoCompare single price

use smocker::{Mock, MockBuilder};
use types::ExchangeMock;

use super::{fixed6, require_symbol, respond};
use crate::error::Result;
use crate::exchange::combine_mocks;

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    combine_mocks(models, price)
}

fn price(model: &ExchangeMock) -> Result<Option<Mock>> {
    let symbol = require_symbol(model)?;
    let body = format!(r#"{{"{}":{}}}"#, symbol.quote, fixed6(model.price));
    let request = MockBuilder::get("/data/price")
        .with_query("fsym", symbol.base.as_str())
        .with_query("tsyms", symbol.quote.as_str());
    Ok(Some(respond(request, model, body)))
}
