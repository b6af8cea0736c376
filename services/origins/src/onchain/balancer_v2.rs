//! Balancer V2 stable/weighted pool oracle
//!
//! `getLatest(uint8)` is always queried; `getPriceRateCache(address)` only
//! for fixtures that describe rate-provider tokens.

use codec::contracts::{GET_LATEST, GET_PRICE_RATE_CACHE};
use smocker::Mock;
use types::ExchangeMock;

use super::{ethrpc, function_mock};
use crate::error::Result;
use crate::exchange::combine_mocks;

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    let mut mocks = ethrpc::build_mocks(models)?;
    mocks.extend(combine_mocks(models, |model| {
        function_mock(model, "getLatest", &GET_LATEST, true)
    })?);
    mocks.extend(combine_mocks(models, |model| {
        function_mock(model, "getPriceRateCache", &GET_PRICE_RATE_CACHE, false)
    })?);
    Ok(mocks)
}
