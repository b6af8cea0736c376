//! Contract functions simulated by on-chain price mocks
//!
//! Each entry carries only what the mocks need: the selector derived from the
//! canonical signature and the input/output types used to check and encode
//! fixture arguments and return values.

use std::fmt;

use ethabi::ethereum_types::U256;
use ethabi::{ParamType, Token};
use once_cell::sync::Lazy;

use crate::error::{CodecError, Result};

/// A contract function's name plus ABI input and output types
#[derive(Debug, Clone, PartialEq)]
pub struct ContractFunction {
    pub name: &'static str,
    pub inputs: Vec<ParamType>,
    pub outputs: Vec<ParamType>,
}

impl ContractFunction {
    pub fn new(name: &'static str, inputs: Vec<ParamType>, outputs: Vec<ParamType>) -> Self {
        Self {
            name,
            inputs,
            outputs,
        }
    }

    /// First 4 bytes of keccak256 of the canonical signature
    pub fn selector(&self) -> [u8; 4] {
        ethabi::short_signature(self.name, &self.inputs)
    }

    /// Canonical signature, e.g. `getLatest(uint8)`
    pub fn signature(&self) -> String {
        format!("{}({})", self.name, join_types(&self.inputs))
    }

    /// Selector followed by the encoded arguments
    ///
    /// Integers must fit their declared width; `int<N>` values must already
    /// be sign-extended to 256 bits.
    pub fn encode_call(&self, args: &[Token]) -> Result<Vec<u8>> {
        if let Some(got) = mismatch(args, &self.inputs) {
            return Err(CodecError::ArgumentMismatch {
                function: self.signature(),
                expected: join_types(&self.inputs),
                got,
            });
        }
        let mut encoded = self.selector().to_vec();
        encoded.extend(ethabi::encode(args));
        Ok(encoded)
    }

    /// Return data as the contract would produce it
    pub fn encode_return(&self, values: &[Token]) -> Result<Vec<u8>> {
        if let Some(got) = mismatch(values, &self.outputs) {
            return Err(CodecError::ReturnMismatch {
                function: self.signature(),
                expected: join_types(&self.outputs),
                got,
            });
        }
        Ok(ethabi::encode(values))
    }

    /// Decode return data produced by [`ContractFunction::encode_return`]
    pub fn decode_return(&self, data: &[u8]) -> Result<Vec<Token>> {
        Ok(ethabi::decode(&self.outputs, data)?)
    }
}

impl fmt::Display for ContractFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({})({})",
            self.name,
            join_types(&self.inputs),
            join_types(&self.outputs)
        )
    }
}

fn join_types(types: &[ParamType]) -> String {
    types
        .iter()
        .map(|kind| kind.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Why `tokens` cannot be encoded as `kinds`, if they cannot
fn mismatch(tokens: &[Token], kinds: &[ParamType]) -> Option<String> {
    if !Token::types_check(tokens, kinds) {
        return Some(describe_tokens(tokens));
    }
    tokens
        .iter()
        .zip(kinds)
        .find_map(|(token, kind)| out_of_range(token, kind))
}

fn out_of_range(token: &Token, kind: &ParamType) -> Option<String> {
    match (token, kind) {
        (Token::Uint(value), ParamType::Uint(bits)) if value.bits() > *bits => {
            Some(format!("{} out of range for uint{}", value, bits))
        }
        (Token::Int(value), ParamType::Int(bits)) if !sign_extended(*value, *bits) => {
            Some(format!("{:#x} is not a sign-extended int{}", value, bits))
        }
        (Token::Array(items), ParamType::Array(inner))
        | (Token::FixedArray(items), ParamType::FixedArray(inner, _)) => {
            items.iter().find_map(|item| out_of_range(item, inner))
        }
        (Token::Tuple(items), ParamType::Tuple(inner)) => items
            .iter()
            .zip(inner)
            .find_map(|(item, kind)| out_of_range(item, kind)),
        _ => None,
    }
}

/// Two's complement `value` holds an `int<bits>`: every bit above the
/// lowest `bits - 1` equals the sign bit
fn sign_extended(value: U256, bits: usize) -> bool {
    if bits == 0 || bits >= 256 {
        return true;
    }
    let magnitude = if value.bit(255) { !value } else { value };
    magnitude.bits() < bits
}

fn describe_tokens(tokens: &[Token]) -> String {
    let kinds = tokens
        .iter()
        .map(token_kind)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", kinds)
}

fn token_kind(token: &Token) -> &'static str {
    match token {
        Token::Address(_) => "address",
        Token::FixedBytes(_) => "fixed bytes",
        Token::Bytes(_) => "bytes",
        Token::Int(_) => "int",
        Token::Uint(_) => "uint",
        Token::Bool(_) => "bool",
        Token::String(_) => "string",
        Token::FixedArray(_) => "fixed array",
        Token::Array(_) => "array",
        Token::Tuple(_) => "tuple",
    }
}

/// ERC-20 `symbol()(string)`
pub static SYMBOL: Lazy<ContractFunction> =
    Lazy::new(|| ContractFunction::new("symbol", vec![], vec![ParamType::String]));

/// ERC-20 `decimals()(uint8)`
pub static DECIMALS: Lazy<ContractFunction> =
    Lazy::new(|| ContractFunction::new("decimals", vec![], vec![ParamType::Uint(8)]));

/// Balancer V2 pool oracle `getLatest(uint8)(uint256)`, selector `0xb10be739`
pub static GET_LATEST: Lazy<ContractFunction> = Lazy::new(|| {
    ContractFunction::new("getLatest", vec![ParamType::Uint(8)], vec![ParamType::Uint(256)])
});

/// Balancer V2 `getPriceRateCache(address)(uint256,uint256,uint256)`:
/// rate, duration, expires
pub static GET_PRICE_RATE_CACHE: Lazy<ContractFunction> = Lazy::new(|| {
    ContractFunction::new(
        "getPriceRateCache",
        vec![ParamType::Address],
        vec![ParamType::Uint(256); 3],
    )
});

/// Curve pool `coins(uint256)(address)`
pub static COINS: Lazy<ContractFunction> = Lazy::new(|| {
    ContractFunction::new("coins", vec![ParamType::Uint(256)], vec![ParamType::Address])
});

/// Curve pool `get_dy(int128,int128,uint256)(uint256)`
pub static GET_DY: Lazy<ContractFunction> = Lazy::new(|| {
    ContractFunction::new(
        "get_dy",
        vec![ParamType::Int(128), ParamType::Int(128), ParamType::Uint(256)],
        vec![ParamType::Uint(256)],
    )
});

/// Maker pot `dsr()(uint256)`
pub static DSR: Lazy<ContractFunction> =
    Lazy::new(|| ContractFunction::new("dsr", vec![], vec![ParamType::Uint(256)]));

/// rETH `getExchangeRate()(uint256)`
pub static GET_EXCHANGE_RATE: Lazy<ContractFunction> =
    Lazy::new(|| ContractFunction::new("getExchangeRate", vec![], vec![ParamType::Uint(256)]));

/// sDAI `previewRedeem(uint256)(uint256)`
pub static PREVIEW_REDEEM: Lazy<ContractFunction> = Lazy::new(|| {
    ContractFunction::new(
        "previewRedeem",
        vec![ParamType::Uint(256)],
        vec![ParamType::Uint(256)],
    )
});

/// wstETH `stEthPerToken()(uint256)`
pub static ST_ETH_PER_TOKEN: Lazy<ContractFunction> =
    Lazy::new(|| ContractFunction::new("stEthPerToken", vec![], vec![ParamType::Uint(256)]));

/// Uniswap V2 pair `getReserves()(uint112,uint112,uint32)`
pub static GET_RESERVES: Lazy<ContractFunction> = Lazy::new(|| {
    ContractFunction::new(
        "getReserves",
        vec![],
        vec![ParamType::Uint(112), ParamType::Uint(112), ParamType::Uint(32)],
    )
});

/// Pair/pool `token0()(address)`
pub static TOKEN0: Lazy<ContractFunction> =
    Lazy::new(|| ContractFunction::new("token0", vec![], vec![ParamType::Address]));

/// Pair/pool `token1()(address)`
pub static TOKEN1: Lazy<ContractFunction> =
    Lazy::new(|| ContractFunction::new("token1", vec![], vec![ParamType::Address]));

/// Uniswap V3 pool
/// `slot0()(uint160,int24,uint16,uint16,uint16,uint8,bool)`
pub static SLOT0: Lazy<ContractFunction> = Lazy::new(|| {
    ContractFunction::new(
        "slot0",
        vec![],
        vec![
            ParamType::Uint(160),
            ParamType::Int(24),
            ParamType::Uint(16),
            ParamType::Uint(16),
            ParamType::Uint(16),
            ParamType::Uint(8),
            ParamType::Bool,
        ],
    )
});

/// Function behind a fixture custom key
///
/// Fixtures key function data by the function name, except the ERC-20 probe
/// which uses the plural `symbols`/`decimals`.
pub fn by_fixture_key(key: &str) -> Option<&'static ContractFunction> {
    let function: &'static Lazy<ContractFunction> = match key {
        "symbols" => &SYMBOL,
        "decimals" => &DECIMALS,
        "getLatest" => &GET_LATEST,
        "getPriceRateCache" => &GET_PRICE_RATE_CACHE,
        "coins" => &COINS,
        "get_dy" => &GET_DY,
        "dsr" => &DSR,
        "getExchangeRate" => &GET_EXCHANGE_RATE,
        "previewRedeem" => &PREVIEW_REDEEM,
        "stEthPerToken" => &ST_ETH_PER_TOKEN,
        "getReserves" => &GET_RESERVES,
        "token0" => &TOKEN0,
        "token1" => &TOKEN1,
        "slot0" => &SLOT0,
        _ => return None,
    };
    Some(Lazy::force(function))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethabi::Address;

    #[test]
    fn test_known_selectors() {
        assert_eq!(SYMBOL.selector(), [0x95, 0xd8, 0x9b, 0x41]);
        assert_eq!(DECIMALS.selector(), [0x31, 0x3c, 0xe5, 0x67]);
        assert_eq!(GET_LATEST.selector(), [0xb1, 0x0b, 0xe7, 0x39]);
        assert_eq!(GET_PRICE_RATE_CACHE.selector(), [0xb8, 0x67, 0xee, 0x5a]);
        assert_eq!(GET_RESERVES.selector(), [0x09, 0x02, 0xf1, 0xac]);
        assert_eq!(TOKEN0.selector(), [0x0d, 0xfe, 0x16, 0x81]);
        assert_eq!(TOKEN1.selector(), [0xd2, 0x12, 0x20, 0xa7]);
        assert_eq!(SLOT0.selector(), [0x38, 0x50, 0xc7, 0xbd]);
    }

    #[test]
    fn test_signature_rendering() {
        assert_eq!(GET_DY.signature(), "get_dy(int128,int128,uint256)");
        assert_eq!(GET_LATEST.to_string(), "getLatest(uint8)(uint256)");
    }

    #[test]
    fn test_encode_call_checks_types() {
        let call = GET_LATEST.encode_call(&[Token::Uint(U256::zero())]).unwrap();
        assert_eq!(call.len(), 4 + 32);
        assert_eq!(&call[..4], &[0xb1, 0x0b, 0xe7, 0x39]);

        let err = GET_LATEST
            .encode_call(&[Token::Address(Address::zero())])
            .unwrap_err();
        assert!(matches!(err, CodecError::ArgumentMismatch { .. }));

        let err = GET_LATEST.encode_call(&[]).unwrap_err();
        assert!(err.to_string().contains("getLatest(uint8)"));
    }

    #[test]
    fn test_encode_return_checks_types() {
        let rate = Token::Uint(U256::from(940_000_000_000_000_000u64));
        let encoded = GET_LATEST.encode_return(&[rate.clone()]).unwrap();
        assert_eq!(encoded.len(), 32);
        assert_eq!(GET_LATEST.decode_return(&encoded).unwrap(), vec![rate]);

        let err = GET_PRICE_RATE_CACHE
            .encode_return(&[Token::Uint(U256::one())])
            .unwrap_err();
        assert!(matches!(err, CodecError::ReturnMismatch { .. }));
    }

    #[test]
    fn test_uint_width_is_enforced() {
        let err = GET_LATEST
            .encode_call(&[Token::Uint(U256::from(300u64))])
            .unwrap_err();
        assert!(matches!(err, CodecError::ArgumentMismatch { .. }));
        assert!(err.to_string().contains("300 out of range for uint8"));
        assert!(GET_LATEST.encode_call(&[Token::Uint(U256::from(255u64))]).is_ok());

        let err = DECIMALS.encode_return(&[Token::Uint(U256::MAX)]).unwrap_err();
        assert!(matches!(err, CodecError::ReturnMismatch { .. }));
    }

    #[test]
    fn test_uint112_reserves_overflow() {
        let max_reserve = (U256::one() << 112) - 1;
        let ok = [
            Token::Uint(max_reserve),
            Token::Uint(U256::one()),
            Token::Uint(U256::from(1_700_000_000u64)),
        ];
        assert!(GET_RESERVES.encode_return(&ok).is_ok());

        let too_big = [
            Token::Uint(U256::one() << 112),
            Token::Uint(U256::one()),
            Token::Uint(U256::one()),
        ];
        let err = GET_RESERVES.encode_return(&too_big).unwrap_err();
        assert!(err.to_string().contains("uint112"));
    }

    #[test]
    fn test_int_values_must_be_sign_extended() {
        let minus_one = Token::Int(U256::MAX);
        let args = [minus_one.clone(), Token::Int(U256::one()), Token::Uint(U256::one())];
        assert!(GET_DY.encode_call(&args).is_ok());

        // 0xffffff is -1 as raw int24 bits but 16777215 once widened
        let slot0 = |tick: U256| {
            vec![
                Token::Uint(U256::one()),
                Token::Int(tick),
                Token::Uint(U256::zero()),
                Token::Uint(U256::zero()),
                Token::Uint(U256::zero()),
                Token::Uint(U256::zero()),
                Token::Bool(true),
            ]
        };
        let err = SLOT0.encode_return(&slot0(U256::from(0xff_ffffu64))).unwrap_err();
        assert!(err.to_string().contains("int24"));
        assert!(SLOT0.encode_return(&slot0(U256::MAX)).is_ok());
        assert!(SLOT0.encode_return(&slot0(U256::from(887_272u64))).is_ok());

        let raw = [Token::Int(U256::from(0xff_ffffu64)), Token::Int(U256::one()), Token::Uint(U256::one())];
        assert!(GET_DY.encode_call(&raw).is_ok());
        let wide = [Token::Int(U256::one() << 127), Token::Int(U256::one()), Token::Uint(U256::one())];
        assert!(GET_DY.encode_call(&wide).is_err());
    }

    #[test]
    fn test_fixture_key_lookup() {
        assert_eq!(by_fixture_key("symbols").unwrap().name, "symbol");
        assert_eq!(by_fixture_key("get_dy").unwrap().name, "get_dy");
        assert!(by_fixture_key("unknown").is_none());
    }
}
