//! Kyber `change24h`: every pair in one object keyed `QUOTE_BASE`

use smocker::{Mock, MockBuilder};
use types::ExchangeMock;

use super::{combined_status, latest_by_symbol};
use crate::error::Result;

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    let entries = latest_by_symbol(models)?
        .into_iter()
        .map(|(symbol, model)| {
            // Rates are wei-denominated, hence the 18 decimals
            format!(
                r#""{}":{{"timestamp":{},"token_symbol":"{}","token_decimal":18,"rate_eth_now":{:.18}}}"#,
                symbol.join_reversed("_"),
                model.timestamp.timestamp_millis(),
                symbol.base,
                model.price
            )
        })
        .collect::<Vec<_>>();

    let mock = MockBuilder::get("/change24h")
        .with_status(combined_status(models))
        .with_json_body(format!("{{{}}}", entries.join(",")))
        .build();
    Ok(vec![mock])
}
