//! Curve stable-swap pools
//!
//! `get_dy` carries the quoted rate and is required. `coins` lookups are
//! optional and go out as a separate aggregated call, matching clients that
//! resolve pool coins once and quote afterwards.

use codec::contracts::{COINS, GET_DY};
use smocker::Mock;
use types::ExchangeMock;

use super::{ethrpc, function_mock};
use crate::error::Result;
use crate::exchange::combine_mocks;

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    let mut mocks = ethrpc::build_mocks(models)?;
    mocks.extend(combine_mocks(models, |model| {
        function_mock(model, "coins", &COINS, false)
    })?);
    mocks.extend(combine_mocks(models, |model| {
        function_mock(model, "get_dy", &GET_DY, true)
    })?);
    Ok(mocks)
}
