//! Generic Ethereum node plumbing
//!
//! Chain id, block number and network version answers, plus the ERC-20
//! `symbol()`/`decimals()` probe clients run against the tokens they price.
//! Protocol builders call [`build_mocks`] first and append their own mocks.

use codec::contracts::{DECIMALS, SYMBOL};
use codec::quantity_hex;
use smocker::Mock;
use types::{Address, ExchangeMock, FunctionData};

use super::{block_number, rpc_mock, CallBatch};
use crate::error::{OriginError, Result};
use crate::exchange::combine_mocks;

/// Chain id and network version reported for every fixture
pub const CHAIN_ID: &str = "1";

pub fn build_mocks(models: &[ExchangeMock]) -> Result<Vec<Mock>> {
    let mut mocks = combine_mocks(models, chain_id)?;
    mocks.extend(combine_mocks(models, block_number_mock)?);
    mocks.extend(combine_mocks(models, net_version)?);
    mocks.extend(combine_mocks(models, token_probe)?);
    Ok(mocks)
}

fn chain_id(model: &ExchangeMock) -> Result<Option<Mock>> {
    Ok(Some(rpc_mock(model, "eth_chainId", CHAIN_ID)))
}

/// Block number as an unprefixed hex quantity
fn block_number_mock(model: &ExchangeMock) -> Result<Option<Mock>> {
    let block = block_number(model)?;
    Ok(Some(rpc_mock(model, "eth_blockNumber", &quantity_hex(block))))
}

fn net_version(model: &ExchangeMock) -> Result<Option<Mock>> {
    Ok(Some(rpc_mock(model, "net_version", CHAIN_ID)))
}

/// `symbol()` then `decimals()` for each address under `tokens`
///
/// Without `tokens` there is nothing to probe. With it, `symbols` and
/// `decimals` must hold one entry per token, each addressed to that token.
fn token_probe(model: &ExchangeMock) -> Result<Option<Mock>> {
    let fixture = |source| OriginError::fixture(&model.name, source);
    let Some(tokens) = model.optional_addresses("tokens").map_err(fixture)? else {
        return Ok(None);
    };
    let symbols = model.function_data("symbols").map_err(fixture)?;
    let decimals = model.function_data("decimals").map_err(fixture)?;
    check_len(model, "symbols", symbols, tokens.len())?;
    check_len(model, "decimals", decimals, tokens.len())?;

    let block = block_number(model)?;
    let mut batch = CallBatch::default();
    for ((token, symbol), decimal) in tokens.iter().zip(symbols).zip(decimals) {
        check_target(model, "symbols", symbol, token)?;
        check_target(model, "decimals", decimal, token)?;
        batch.push(model, &SYMBOL, *token, symbol)?;
        batch.push(model, &DECIMALS, *token, decimal)?;
    }
    Ok(Some(batch.into_mock(model, block)))
}

fn check_len(model: &ExchangeMock, key: &str, entries: &[FunctionData], expected: usize) -> Result<()> {
    if entries.len() == expected {
        return Ok(());
    }
    Err(OriginError::invalid_function_data(
        &model.name,
        key,
        format!("{} entries for {} tokens", entries.len(), expected),
    ))
}

fn check_target(model: &ExchangeMock, key: &str, entry: &FunctionData, token: &Address) -> Result<()> {
    if entry.address == *token {
        return Ok(());
    }
    Err(OriginError::invalid_function_data(
        &model.name,
        key,
        format!("entry addressed to {:?}, expected token {:?}", entry.address, token),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onchain::test_support::*;
    use ethabi::ethereum_types::U256;
    use smocker::BodyMatcher;
    use types::{Token, BLOCK_NUMBER_KEY};

    fn token(n: u64) -> Address {
        Address::from_low_u64_be(n)
    }

    fn probe_entry(target: Address, value: Token) -> FunctionData {
        FunctionData::new(target).with_returns(vec![value])
    }

    fn body_needle(mock: &Mock) -> &str {
        match &mock.request.body {
            Some(BodyMatcher::String(matcher)) => &matcher.value,
            _ => panic!("expected a string body matcher"),
        }
    }

    #[test]
    fn test_plumbing_without_tokens() {
        let model = ExchangeMock::new("ethrpc").with_custom(BLOCK_NUMBER_KEY, 100u64);
        let mocks = build_mocks(&[model]).unwrap();
        assert_eq!(mocks.len(), 3);

        assert_eq!(body_needle(&mocks[0]), "eth_chainId");
        assert_eq!(body_needle(&mocks[1]), "eth_blockNumber");
        assert_eq!(body_needle(&mocks[2]), "net_version");
        assert_eq!(
            mocks[1].response.as_ref().unwrap().body,
            r#"{"jsonrpc":"2.0","id":1,"result":"64"}"#
        );
        assert_eq!(
            mocks[2].response.as_ref().unwrap().body,
            r#"{"jsonrpc":"2.0","id":1,"result":"1"}"#
        );
    }

    #[test]
    fn test_block_number_is_required() {
        let err = build_mocks(&[ExchangeMock::new("ethrpc")]).unwrap_err();
        assert!(err.to_string().contains("blockNumber"));
    }

    #[test]
    fn test_token_probe_order() {
        let eighteen = Token::Uint(U256::from(18u64));
        let model = ExchangeMock::new("ethrpc")
            .with_custom(BLOCK_NUMBER_KEY, 100u64)
            .with_custom("tokens", vec![token(1), token(2)])
            .with_function_data(
                "symbols",
                vec![
                    probe_entry(token(1), Token::String("stETH".into())),
                    probe_entry(token(2), Token::String("WETH".into())),
                ],
            )
            .with_function_data(
                "decimals",
                vec![probe_entry(token(1), eighteen.clone()), probe_entry(token(2), eighteen)],
            );

        let mocks = build_mocks(&[model]).unwrap();
        assert_eq!(mocks.len(), 4);

        let calls = matched_calls(&mocks[3]);
        let targets: Vec<_> = calls.iter().map(|call| call.target).collect();
        assert_eq!(targets, vec![token(1), token(1), token(2), token(2)]);
        assert_eq!(calls[0].call_data, SYMBOL.selector().to_vec());
        assert_eq!(calls[1].call_data, DECIMALS.selector().to_vec());

        let (block, slots) = returned_slots(&mocks[3]);
        assert_eq!(block, 100);
        assert_eq!(slots.len(), 4);
    }

    #[test]
    fn test_token_probe_counts_must_match() {
        let model = ExchangeMock::new("ethrpc")
            .with_custom(BLOCK_NUMBER_KEY, 100u64)
            .with_custom("tokens", vec![token(1), token(2)])
            .with_function_data("symbols", vec![probe_entry(token(1), Token::String("stETH".into()))])
            .with_function_data(
                "decimals",
                vec![probe_entry(token(1), Token::Uint(U256::from(18u64)))],
            );

        let err = build_mocks(&[model]).unwrap_err();
        assert!(matches!(err, OriginError::InvalidFunctionData { .. }));
    }

    #[test]
    fn test_token_probe_entries_follow_tokens() {
        let model = ExchangeMock::new("ethrpc")
            .with_custom(BLOCK_NUMBER_KEY, 100u64)
            .with_custom("tokens", vec![token(1)])
            .with_function_data("symbols", vec![probe_entry(token(1), Token::String("stETH".into()))])
            .with_function_data(
                "decimals",
                vec![probe_entry(token(7), Token::Uint(U256::from(18u64)))],
            );

        let err = build_mocks(&[model]).unwrap_err();
        match err {
            OriginError::InvalidFunctionData { function, .. } => assert_eq!(function, "decimals"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
