//! Gate.io v4 spot tickers

use serde_json::json;
use smocker::{Mock, MockBuilder};
use types::ExchangeMock;

use super::{fixed6, require_symbol, respond};
use crate::error::Result;
use crate::exchange::combine_mocks;

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    combine_mocks(models, tickers)
}

fn tickers(model: &ExchangeMock) -> Result<Option<Mock>> {
    let symbol = require_symbol(model)?.join("_");
    let body = json!([{
        "currency_pair": symbol,
        "last": fixed6(model.price),
        "lowest_ask": fixed6(model.ask),
        "highest_bid": fixed6(model.bid),
        "change_percentage": "-0.62",
        "base_volume": fixed6(model.volume),
        "quote_volume": "36.88146210359657",
        "high_24h": "0.084826",
        "low_24h": "0.082033",
    }]);
    let request = MockBuilder::get("/api/v4/spot/tickers").with_query("currency_pair", symbol);
    Ok(Some(respond(request, model, body.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::test_support::*;

    #[test]
    fn test_tickers() {
        let model = ExchangeMock::new("gateio")
            .with_symbol("ETH/BTC")
            .unwrap()
            .with_price(0.08)
            .with_bid(0.079);
        let mocks = build_mocks(&[model]).unwrap();

        assert_eq!(path(&mocks[0]), "/api/v4/spot/tickers");
        assert_eq!(query(&mocks[0], "currency_pair"), "ETH_BTC");
        let body = json_body(&mocks[0]);
        assert_eq!(body[0]["currency_pair"], "ETH_BTC");
        assert_eq!(body[0]["last"], "0.080000");
        assert_eq!(body[0]["highest_bid"], "0.079000");
    }
}
