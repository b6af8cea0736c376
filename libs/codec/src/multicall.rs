//! Multicall `aggregate` codec
//!
//! Encodes a batch of low-level calls the way the Multicall contract's
//! `aggregate((address,bytes)[])` expects them, and the matching
//! `(uint256 blockNumber, bytes[] returnData)` result. Mocks match incoming
//! `eth_call` payloads by exact byte content, so the layout here must be the
//! standard ABI head/tail encoding byte for byte.

use ethabi::ethereum_types::U256;
use ethabi::{Address, ParamType, Token};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{CodecError, Result};
use crate::hex_utils::to_hex;

/// `aggregate((address,bytes)[])`
pub const AGGREGATE_NAME: &str = "aggregate";

/// Input types of `aggregate`
static AGGREGATE_INPUTS: Lazy<Vec<ParamType>> = Lazy::new(|| {
    vec![ParamType::Array(Box::new(ParamType::Tuple(vec![
        ParamType::Address,
        ParamType::Bytes,
    ])))]
});

/// Output types of `aggregate`
static AGGREGATE_OUTPUTS: Lazy<Vec<ParamType>> = Lazy::new(|| {
    vec![
        ParamType::Uint(256),
        ParamType::Array(Box::new(ParamType::Bytes)),
    ]
});

/// 4-byte selector of `aggregate((address,bytes)[])`, `0x252dba42`
pub fn aggregate_selector() -> [u8; 4] {
    ethabi::short_signature(AGGREGATE_NAME, &AGGREGATE_INPUTS)
}

/// One call to be aggregated
///
/// Order inside a batch is significant: the encoded bytes are matched
/// verbatim, so calls must be listed in the order the client packs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiCall {
    pub target: Address,
    pub call_data: Vec<u8>,
}

impl MultiCall {
    pub fn new(target: Address, call_data: Vec<u8>) -> Self {
        Self { target, call_data }
    }
}

/// Calldata of `aggregate(calls)`: selector followed by the encoded
/// `(address,bytes)[]` array
///
/// Targets are typed addresses and lengths are bounded by memory, so there is
/// no failure path left once the calls exist.
pub fn encode_multicall_args(calls: &[MultiCall]) -> Vec<u8> {
    let tuples = calls
        .iter()
        .map(|call| {
            Token::Tuple(vec![
                Token::Address(call.target),
                Token::Bytes(call.call_data.clone()),
            ])
        })
        .collect();

    let mut encoded = aggregate_selector().to_vec();
    encoded.extend(ethabi::encode(&[Token::Array(tuples)]));

    debug!(calls = calls.len(), args = %to_hex(&encoded), "Encoded multicall arguments");
    encoded
}

/// Return data of `aggregate`: the block number followed by one `bytes` slot
/// per call
///
/// Each slot is copied verbatim; callers pass the already ABI-encoded result
/// of the individual call, whether it is a single word or a whole tuple.
pub fn encode_multicall_response(block_number: u64, return_data: &[Vec<u8>]) -> Vec<u8> {
    let slots = return_data.iter().cloned().map(Token::Bytes).collect();
    let encoded = ethabi::encode(&[
        Token::Uint(U256::from(block_number)),
        Token::Array(slots),
    ]);

    debug!(
        block_number,
        slots = return_data.len(),
        response = %to_hex(&encoded),
        "Encoded multicall response"
    );
    encoded
}

/// Recover the calls from `aggregate` calldata
pub fn decode_multicall_args(data: &[u8]) -> Result<Vec<MultiCall>> {
    let selector = aggregate_selector();
    if data.len() < selector.len() || data[..selector.len()] != selector {
        let found = &data[..data.len().min(selector.len())];
        return Err(CodecError::SelectorMismatch {
            expected: hex::encode(selector),
            found: hex::encode(found),
        });
    }

    let mut tokens = ethabi::decode(&AGGREGATE_INPUTS, &data[selector.len()..])?;
    let Some(Token::Array(entries)) = tokens.pop() else {
        return Err(ethabi::Error::InvalidData.into());
    };

    entries
        .into_iter()
        .map(|entry| match entry {
            Token::Tuple(mut fields) if fields.len() == 2 => {
                let call_data = fields.pop();
                let target = fields.pop();
                match (target, call_data) {
                    (Some(Token::Address(target)), Some(Token::Bytes(call_data))) => {
                        Ok(MultiCall { target, call_data })
                    }
                    _ => Err(ethabi::Error::InvalidData.into()),
                }
            }
            _ => Err(ethabi::Error::InvalidData.into()),
        })
        .collect()
}

/// Recover the block number and per-call return slots from `aggregate`
/// return data
pub fn decode_multicall_response(data: &[u8]) -> Result<(u64, Vec<Vec<u8>>)> {
    let tokens = ethabi::decode(&AGGREGATE_OUTPUTS, data)?;
    match tokens.as_slice() {
        [Token::Uint(block), Token::Array(slots)] => {
            if block.bits() > 64 {
                return Err(CodecError::OutOfRange {
                    field: "blockNumber",
                });
            }
            let slots = slots
                .iter()
                .map(|slot| match slot {
                    Token::Bytes(bytes) => Ok(bytes.clone()),
                    _ => Err(CodecError::Decode(ethabi::Error::InvalidData)),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok((block.low_u64(), slots))
        }
        _ => Err(ethabi::Error::InvalidData.into()),
    }
}
