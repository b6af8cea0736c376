//! Single-call rate sources
//!
//! Each of these prices an asset from one view function on one contract:
//! Maker's pot `dsr()`, rETH `getExchangeRate()`, sDAI `previewRedeem(uint256)`
//! and wstETH `stEthPerToken()`.

use codec::contracts::{DSR, GET_EXCHANGE_RATE, PREVIEW_REDEEM, ST_ETH_PER_TOKEN};
use codec::ContractFunction;
use smocker::Mock;
use types::ExchangeMock;

use super::{ethrpc, function_mock};
use crate::error::Result;
use crate::exchange::combine_mocks;

fn build_rate_mocks(
    models: &[ExchangeMock],
    key: &str,
    function: &ContractFunction,
) -> Result<Vec<Mock>> {
    let mut mocks = ethrpc::build_mocks(models)?;
    mocks.extend(combine_mocks(models, |model| {
        function_mock(model, key, function, true)
    })?);
    Ok(mocks)
}

/// Maker DSR
pub fn build_dsr_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    build_rate_mocks(models, "dsr", &DSR)
}

/// Rocket Pool rETH
pub fn build_rocketpool_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    build_rate_mocks(models, "getExchangeRate", &GET_EXCHANGE_RATE)
}

/// Savings DAI
pub fn build_sdai_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    build_rate_mocks(models, "previewRedeem", &PREVIEW_REDEEM)
}

/// Lido wstETH
pub fn build_wsteth_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    build_rate_mocks(models, "stEthPerToken", &ST_ETH_PER_TOKEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onchain::test_support::*;
    use ethabi::ethereum_types::U256;
    use types::{Address, FunctionData, Token, BLOCK_NUMBER_KEY};

    fn rate_fixture(name: &str, key: &str, args: Vec<Token>) -> ExchangeMock {
        let entry = FunctionData::new(Address::from_low_u64_be(0x5a))
            .with_args(args)
            .with_returns(vec![Token::Uint(U256::from(1_050_000_000_000_000_000u64))]);
        ExchangeMock::new(name)
            .with_custom(BLOCK_NUMBER_KEY, 42u64)
            .with_function_data(key, vec![entry])
    }

    fn assert_rate_mock(mocks: Vec<Mock>, function: &ContractFunction) {
        assert_eq!(mocks.len(), 4, "{}", function.name);
        let calls = matched_calls(&mocks[3]);
        assert_eq!(&calls[0].call_data[..4], &function.selector(), "{}", function.name);
        assert_eq!(returned_slots(&mocks[3]).0, 42, "{}", function.name);
    }

    #[test]
    fn test_each_rate_source_selector() {
        let dsr = build_dsr_mocks(&[rate_fixture("dsr", "dsr", vec![])]).unwrap();
        assert_rate_mock(dsr, &DSR);

        let reth = build_rocketpool_mocks(&[rate_fixture("rocketpool", "getExchangeRate", vec![])]).unwrap();
        assert_rate_mock(reth, &GET_EXCHANGE_RATE);

        let shares = vec![Token::Uint(U256::exp10(18))];
        let sdai = build_sdai_mocks(&[rate_fixture("sdai", "previewRedeem", shares)]).unwrap();
        assert_rate_mock(sdai, &PREVIEW_REDEEM);

        let wsteth = build_wsteth_mocks(&[rate_fixture("wsteth", "stEthPerToken", vec![])]).unwrap();
        assert_rate_mock(wsteth, &ST_ETH_PER_TOKEN);
    }

    #[test]
    fn test_sdai_requires_its_argument() {
        let model = rate_fixture("sdai", "previewRedeem", vec![]);
        assert!(build_sdai_mocks(&[model]).is_err());
    }
}
