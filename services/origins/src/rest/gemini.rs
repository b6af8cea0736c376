//! Gemini v1 pubticker

use smocker::{Mock, MockBuilder};
use types::ExchangeMock;

use super::{fixed6, require_symbol, respond};
use crate::error::Result;
use crate::exchange::combine_mocks;

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    combine_mocks(models, pubticker)
}

fn pubticker(model: &ExchangeMock) -> Result<Option<Mock>> {
    let symbol = require_symbol(model)?;
    // Volume is keyed by both currencies of the pair
    let body = format!(
        r#"{{"bid":"{}","ask":"{}","volume":{{"{}":"{}","{}":"{}","timestamp":{}}},"last":"{}"}}"#,
        fixed6(model.bid),
        fixed6(model.ask),
        symbol.base,
        fixed6(model.volume),
        symbol.quote,
        fixed6(model.volume),
        model.timestamp.timestamp_millis(),
        fixed6(model.price)
    );
    let request = MockBuilder::get(format!("/v1/pubticker/{}", symbol.join_lowercase("")));
    Ok(Some(respond(request, model, body)))
}
