//! 0x-prefixed hex helpers matching JSON-RPC conventions

use crate::error::Result;

/// Lower-case hex with a `0x` prefix, as JSON-RPC clients send calldata
pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse hex with or without a `0x` prefix
pub fn from_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    Ok(hex::decode(trimmed)?)
}

/// Hex quantity without prefix or leading zeros, as `eth_blockNumber` mocks
/// report it (100 becomes `64`)
pub fn quantity_hex(value: u64) -> String {
    format!("{:x}", value)
}
