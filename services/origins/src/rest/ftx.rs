//! FTX market endpoint

use smocker::{Mock, MockBuilder};
use types::ExchangeMock;

use super::{fixed6, require_symbol, respond};
use crate::error::Result;
use crate::exchange::combine_mocks;

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    combine_mocks(models, market)
}

fn market(model: &ExchangeMock) -> Result<Option<Mock>> {
    let symbol = require_symbol(model)?;
    let body = format!(
        concat!(
            r#"{{"success":true,"result":{{"name":"{name}","enabled":true,"postOnly":false,"#,
            r#""priceIncrement":2.5e-6,"sizeIncrement":0.001,"minProvideSize":0.001,"#,
            r#""last":{last},"bid":{bid},"ask":{ask},"price":{last},"type":"spot","#,
            r#""baseCurrency":"{base}","quoteCurrency":"{quote}","underlying":null,"#,
            r#""restricted":false,"highLeverageFeeExempt":true,"#,
            r#""change1h":-0.0015453653897589824,"change24h":0.05481774512574174,"#,
            r#""changeBod":0.01809090909090909,"quoteVolume24h":1351.9492182925,"#,
            r#""volumeUsd24h":{volume}}}}}"#
        ),
        name = symbol,
        last = fixed6(model.price),
        bid = fixed6(model.bid),
        ask = fixed6(model.ask),
        base = symbol.base,
        quote = symbol.quote,
        volume = fixed6(model.volume),
    );
    let request = MockBuilder::get(format!("/api/markets/{}/{}", symbol.base, symbol.quote));
    Ok(Some(respond(request, model, body)))
}
