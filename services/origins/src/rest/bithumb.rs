//! Bithumb global spot ticker

use smocker::{Mock, MockBuilder};
use types::ExchangeMock;

use super::{fixed6, require_symbol, respond};
use crate::error::Result;
use crate::exchange::combine_mocks;

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    combine_mocks(models, ticker)
}

fn ticker(model: &ExchangeMock) -> Result<Option<Mock>> {
    let symbol = require_symbol(model)?.join("-");
    let body = format!(
        r#"{{"data":[{{"vol":"{}","c":"{}","s":"{}"}}],"code":"0","msg":"success","timestamp":{},"startTime":null}}"#,
        fixed6(model.volume),
        fixed6(model.price),
        symbol,
        model.timestamp.timestamp_millis()
    );
    let request = MockBuilder::get("/openapi/v1/spot/ticker").with_query("symbol", symbol);
    Ok(Some(respond(request, model, body)))
}
