//! On-chain price sources reached through simulated JSON-RPC
//!
//! Every mock here answers `POST /` on the RPC endpoint. Contract reads are
//! matched by the hex of the aggregated multicall calldata appearing anywhere
//! in the request body, since the client wraps it in a JSON-RPC envelope with
//! its own `id` and `from` fields:
//!
//! ```text
//! {"method":"eth_call","params":[{"from":..,"to":<multicall>,"data":"0x252dba42.."},"latest"],"id":1,"jsonrpc":"2.0"}
//! ```
//!
//! All mocks derived from one fixture report that fixture's `blockNumber`.

pub mod balancer_v2;
pub mod curve;
pub mod ethrpc;
pub mod rates;
pub mod uniswap_v2;
pub mod uniswap_v3;

use codec::contracts::{TOKEN0, TOKEN1};
use codec::{encode_multicall_args, encode_multicall_response, to_hex, ContractFunction, MultiCall};
use smocker::{Mock, MockBuilder};
use types::{ExchangeMock, FunctionData};

use crate::error::{OriginError, Result};

/// Path JSON-RPC requests are posted to
pub const RPC_PATH: &str = "/";

/// JSON-RPC success envelope carrying `result`
pub fn rpc_result(result: &str) -> String {
    format!(r#"{{"jsonrpc":"2.0","id":1,"result":"{}"}}"#, result)
}

/// `eth_call` request as a JSON-RPC client sends it
pub fn rpc_call_request(from: &str, to: &str, data: &str, block: &str) -> String {
    format!(
        r#"{{"method":"eth_call","params":[{{"from":"{}","to":"{}","data":"{}"}},"{}"],"id":1,"jsonrpc":"2.0"}}"#,
        from, to, data, block
    )
}

/// `POST /` mock matching `needle` in the body and answering `result`
pub(crate) fn rpc_mock(model: &ExchangeMock, needle: &str, result: &str) -> Mock {
    MockBuilder::post(RPC_PATH)
        .with_body_containing(needle)
        .with_status(model.status_code)
        .with_json_body(rpc_result(result))
        .build()
}

pub(crate) fn block_number(model: &ExchangeMock) -> Result<u64> {
    model
        .block_number()
        .map_err(|source| OriginError::fixture(&model.name, source))
}

/// Calls and matching return slots for one aggregated `eth_call`
#[derive(Debug, Default)]
pub(crate) struct CallBatch {
    calls: Vec<MultiCall>,
    returns: Vec<Vec<u8>>,
}

impl CallBatch {
    /// Encode one simulated call of `function` against `target`
    pub(crate) fn push(
        &mut self,
        model: &ExchangeMock,
        function: &ContractFunction,
        target: types::Address,
        data: &FunctionData,
    ) -> Result<()> {
        let call_data = function
            .encode_call(&data.args)
            .map_err(|source| OriginError::encoding(&model.name, source))?;
        let returned = function
            .encode_return(&data.returns)
            .map_err(|source| OriginError::encoding(&model.name, source))?;

        self.calls.push(MultiCall::new(target, call_data));
        self.returns.push(returned);
        Ok(())
    }

    /// Mock matching the aggregated calldata and answering with the
    /// aggregated return data at `block`
    pub(crate) fn into_mock(self, model: &ExchangeMock, block: u64) -> Mock {
        let args = encode_multicall_args(&self.calls);
        let response = encode_multicall_response(block, &self.returns);
        rpc_mock(model, &to_hex(&args), &to_hex(&response))
    }
}

/// One aggregated call of `function` per entry under `key`
///
/// A missing or empty entry list is an error when `required`, otherwise no
/// mock is produced.
pub(crate) fn function_mock(
    model: &ExchangeMock,
    key: &str,
    function: &ContractFunction,
    required: bool,
) -> Result<Option<Mock>> {
    let entries = if required {
        Some(
            model
                .function_data(key)
                .map_err(|source| OriginError::fixture(&model.name, source))?,
        )
    } else {
        model
            .optional_function_data(key)
            .map_err(|source| OriginError::fixture(&model.name, source))?
    };
    let Some(entries) = entries else {
        return Ok(None);
    };

    let block = block_number(model)?;
    let mut batch = CallBatch::default();
    for entry in entries {
        batch.push(model, function, entry.address, entry)?;
    }
    Ok(Some(batch.into_mock(model, block)))
}

/// Interleaved `token0()`/`token1()` calls, one pair per pool
pub(crate) fn token_pair_mock(model: &ExchangeMock) -> Result<Option<Mock>> {
    let fixture = |source| OriginError::fixture(&model.name, source);
    let token0 = model.function_data("token0").map_err(fixture)?;
    let token1 = model.function_data("token1").map_err(fixture)?;
    if token0.len() != token1.len() {
        return Err(OriginError::invalid_function_data(
            &model.name,
            "token0",
            format!(
                "{} token0 entries but {} token1 entries",
                token0.len(),
                token1.len()
            ),
        ));
    }

    let block = block_number(model)?;
    let mut batch = CallBatch::default();
    for (first, second) in token0.iter().zip(token1) {
        batch.push(model, &TOKEN0, first.address, first)?;
        batch.push(model, &TOKEN1, second.address, second)?;
    }
    Ok(Some(batch.into_mock(model, block)))
}
