//! Uniswap V2 style pairs (Uniswap V2, Sushiswap)
//!
//! Reserves for every pair in one aggregated call, token addresses in another.

use codec::contracts::GET_RESERVES;
use smocker::Mock;
use types::ExchangeMock;

use super::{ethrpc, function_mock, token_pair_mock};
use crate::error::Result;
use crate::exchange::combine_mocks;

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    let mut mocks = ethrpc::build_mocks(models)?;
    mocks.extend(combine_mocks(models, |model| {
        function_mock(model, "getReserves", &GET_RESERVES, true)
    })?);
    mocks.extend(combine_mocks(models, token_pair_mock)?);
    Ok(mocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onchain::test_support::*;
    use ethabi::ethereum_types::U256;
    use types::{Address, FunctionData, Token, BLOCK_NUMBER_KEY};

    fn pair() -> Address {
        Address::from_low_u64_be(0xbb)
    }

    fn token_entry(token: u64) -> FunctionData {
        FunctionData::new(pair()).with_returns(vec![Token::Address(Address::from_low_u64_be(token))])
    }

    #[test]
    fn test_reserves_and_tokens() {
        let reserves = FunctionData::new(pair()).with_returns(vec![
            Token::Uint(U256::from(1_000u64)),
            Token::Uint(U256::from(2_000u64)),
            Token::Uint(U256::from(1_700_000_000u64)),
        ]);
        let model = ExchangeMock::new("uniswapV2")
            .with_symbol("ETH/USDC")
            .unwrap()
            .with_custom(BLOCK_NUMBER_KEY, 100u64)
            .with_function_data("getReserves", vec![reserves])
            .with_function_data("token0", vec![token_entry(1)])
            .with_function_data("token1", vec![token_entry(2)]);

        let mocks = build_mocks(&[model]).unwrap();
        assert_eq!(mocks.len(), 5);

        let (_, reserve_slots) = returned_slots(&mocks[3]);
        assert_eq!(reserve_slots[0].len(), 96);

        let (_, token_slots) = returned_slots(&mocks[4]);
        assert_eq!(token_slots.len(), 2);
        assert_eq!(token_slots[1][31], 2);
    }

    #[test]
    fn test_tokens_are_required() {
        let reserves = FunctionData::new(pair()).with_returns(vec![
            Token::Uint(U256::one()),
            Token::Uint(U256::one()),
            Token::Uint(U256::one()),
        ]);
        let model = ExchangeMock::new("sushiswap")
            .with_custom(BLOCK_NUMBER_KEY, 100u64)
            .with_function_data("getReserves", vec![reserves]);
        let err = build_mocks(&[model]).unwrap_err();
        assert!(err.to_string().contains("token0"));
    }
}
