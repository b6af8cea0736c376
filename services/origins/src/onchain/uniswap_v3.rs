//! Uniswap V3 pools: `slot0()` for the price, `token0()`/`token1()` for the
//! pool's assets

use codec::contracts::SLOT0;
use smocker::Mock;
use types::ExchangeMock;

use super::{ethrpc, function_mock, token_pair_mock};
use crate::error::Result;
use crate::exchange::combine_mocks;

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    let mut mocks = ethrpc::build_mocks(models)?;
    mocks.extend(combine_mocks(models, |model| {
        function_mock(model, "slot0", &SLOT0, true)
    })?);
    mocks.extend(combine_mocks(models, token_pair_mock)?);
    Ok(mocks)
}
