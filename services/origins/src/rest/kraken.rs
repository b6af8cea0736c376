//! Kraken public Ticker

use serde_json::json;
use smocker::{Mock, MockBuilder};
use types::ExchangeMock;

use super::{fixed6, require_symbol, respond};
use crate::error::Result;
use crate::exchange::combine_mocks;

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    combine_mocks(models, ticker)
}

fn ticker(model: &ExchangeMock) -> Result<Option<Mock>> {
    let pair = require_symbol(model)?.join("");
    let mut result = serde_json::Map::new();
    result.insert(
        pair.clone(),
        json!({
            "a": [fixed6(model.ask), "10", "10.000"],
            "b": [fixed6(model.bid), "2", "2.000"],
            "c": [fixed6(model.price), "0.22651150"],
            "v": [fixed6(model.volume), "5803.57144830"],
        }),
    );
    let body = json!({ "error": [], "result": result });
    let request = MockBuilder::get("/0/public/Ticker").with_query("pair", pair);
    Ok(Some(respond(request, model, body.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::test_support::*;

    #[test]
    fn test_ticker() {
        let model = ExchangeMock::new("kraken")
            .with_symbol("XETH/XXBT")
            .unwrap()
            .with_price(0.07)
            .with_ask(0.071);
        let mocks = build_mocks(&[model]).unwrap();

        assert_eq!(path(&mocks[0]), "/0/public/Ticker");
        assert_eq!(query(&mocks[0], "pair"), "XETHXXBT");
        let body = json_body(&mocks[0]);
        assert_eq!(body["result"]["XETHXXBT"]["c"][0], "0.070000");
        assert_eq!(body["result"]["XETHXXBT"]["a"][0], "0.071000");
        assert!(body["error"].as_array().unwrap().is_empty());
    }
}
