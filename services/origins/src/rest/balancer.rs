//! Balancer V1 subgraph token price query
//!
//! The GraphQL request carries the pair in `variables.id`; the mock matches
//! on that field alone.

use std::collections::BTreeMap;

use serde_json::json;
use smocker::{BodyMatcher, Mock, MockBuilder, StringMatcher};
use types::ExchangeMock;

use super::{fixed6, require_symbol, respond};
use crate::error::Result;
use crate::exchange::combine_mocks;

pub const SUBGRAPH_PATH: &str = "/subgraphs/name/balancer-labs/balancer";

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    combine_mocks(models, token_price)
}

fn token_price(model: &ExchangeMock) -> Result<Option<Mock>> {
    let symbol = require_symbol(model)?;
    let mut fields = BTreeMap::new();
    fields.insert(
        "variables.id".to_string(),
        StringMatcher::should_equal(symbol.join("")),
    );
    let body = json!({
        "data": {
            "tokenPrices": [{
                "poolLiquidity": "11224",
                "price": fixed6(model.price),
                "symbol": symbol.base,
            }]
        }
    });
    let request = MockBuilder::post(SUBGRAPH_PATH).with_body(BodyMatcher::Json(fields));
    Ok(Some(respond(request, model, body.to_string())))
}
