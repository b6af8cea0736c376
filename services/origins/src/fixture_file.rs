//! Fixture files
//!
//! A fixture file lists exchange fixtures in YAML (or JSON, picked by the
//! `.json` extension):
//!
//! ```yaml
//! fixtures:
//!   - exchange: binance
//!     symbol: ETH/BTC
//!     price: 0.07
//!   - exchange: rocketpool
//!     status: 200
//!     custom:
//!       blockNumber: 100
//!       getExchangeRate:
//!         - address: "0xae78736Cd615f374D3085123A210448E74Fc6393"
//!           returns: ["1070000000000000000"]
//! ```
//!
//! Function call arguments and return values are written as strings and
//! tokenized against the ABI types of the function named by their key. A
//! string custom value that spells a 20-byte hex address becomes an address,
//! and a list of such strings an address list.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use codec::contracts::by_fixture_key;
use codec::from_hex;
use ethabi::token::{LenientTokenizer, Tokenizer};
use ethabi::ParamType;
use serde::Deserialize;
use tracing::debug;
use types::{Address, CustomValue, ExchangeMock, FunctionData, Token};

use crate::error::{OriginError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureFile {
    pub fixtures: Vec<FixtureEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureEntry {
    pub exchange: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub volume: f64,
    #[serde(default)]
    pub ask: f64,
    #[serde(default)]
    pub bid: f64,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub custom: BTreeMap<String, CustomEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CustomEntry {
    Integer(u64),
    Text(String),
    Calls(Vec<CallEntry>),
    Texts(Vec<String>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallEntry {
    pub address: String,
    #[serde(default)]
    pub args: Vec<Scalar>,
    #[serde(default)]
    pub returns: Vec<Scalar>,
}

/// A single ABI value as written in the file
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Integer(u64),
    Signed(i64),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(value) => f.write_str(value),
            Scalar::Integer(value) => write!(f, "{}", value),
            Scalar::Signed(value) => write!(f, "{}", value),
            Scalar::Bool(value) => write!(f, "{}", value),
        }
    }
}

/// Read fixtures from `path`
pub fn load_fixtures(path: &Path) -> Result<Vec<ExchangeMock>> {
    let contents = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
    let models = if is_json {
        parse_json(&contents)?
    } else {
        parse_yaml(&contents)?
    };
    debug!(path = %path.display(), fixtures = models.len(), "Loaded fixture file");
    Ok(models)
}

pub fn parse_yaml(contents: &str) -> Result<Vec<ExchangeMock>> {
    let file: FixtureFile =
        serde_yaml::from_str(contents).map_err(|e| OriginError::FixtureFile(e.to_string()))?;
    file.into_models()
}

pub fn parse_json(contents: &str) -> Result<Vec<ExchangeMock>> {
    let file: FixtureFile =
        serde_json::from_str(contents).map_err(|e| OriginError::FixtureFile(e.to_string()))?;
    file.into_models()
}

impl FixtureFile {
    pub fn into_models(self) -> Result<Vec<ExchangeMock>> {
        self.fixtures.into_iter().map(FixtureEntry::into_model).collect()
    }
}

impl FixtureEntry {
    pub fn into_model(self) -> Result<ExchangeMock> {
        let mut model = ExchangeMock::new(self.exchange)
            .with_price(self.price)
            .with_volume(self.volume)
            .with_ask(self.ask)
            .with_bid(self.bid);
        if let Some(status) = self.status {
            model = model.with_status_code(status);
        }
        if let Some(timestamp) = self.timestamp {
            model = model.with_time(timestamp);
        }
        if let Some(symbol) = self.symbol {
            let name = model.name.clone();
            model = model
                .with_symbol(&symbol)
                .map_err(|source| OriginError::fixture(&name, source))?;
        }

        for (key, entry) in self.custom {
            let value = custom_value(&model.name, &key, entry)?;
            model = model.with_custom(key, value);
        }
        Ok(model)
    }
}

fn custom_value(exchange: &str, key: &str, entry: CustomEntry) -> Result<CustomValue> {
    let value = match entry {
        CustomEntry::Integer(value) => CustomValue::Integer(value),
        CustomEntry::Text(text) => match parse_address(&text) {
            Some(address) => CustomValue::Address(address),
            None => CustomValue::Raw(text),
        },
        // An empty list says nothing about its element type
        CustomEntry::Calls(calls) if calls.is_empty() && by_fixture_key(key).is_none() => {
            CustomValue::Addresses(Vec::new())
        }
        CustomEntry::Calls(calls) => {
            let data = calls
                .into_iter()
                .map(|call| function_data(exchange, key, call))
                .collect::<Result<Vec<_>>>()?;
            CustomValue::Functions(data)
        }
        CustomEntry::Texts(texts) => {
            let addresses = texts
                .iter()
                .map(|text| {
                    parse_address(text).ok_or_else(|| {
                        OriginError::FixtureFile(format!(
                            "{}.{}: {:?} is not an address",
                            exchange, key, text
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            CustomValue::Addresses(addresses)
        }
    };
    Ok(value)
}

fn function_data(exchange: &str, key: &str, call: CallEntry) -> Result<FunctionData> {
    let function = by_fixture_key(key).ok_or_else(|| {
        OriginError::invalid_function_data(exchange, key, "no contract function is known by this key")
    })?;
    let address = parse_address(&call.address).ok_or_else(|| {
        OriginError::invalid_function_data(
            exchange,
            key,
            format!("{:?} is not an address", call.address),
        )
    })?;
    let args = tokenize(exchange, key, "args", &function.inputs, &call.args)?;
    let returns = tokenize(exchange, key, "returns", &function.outputs, &call.returns)?;
    Ok(FunctionData::new(address).with_args(args).with_returns(returns))
}

fn tokenize(
    exchange: &str,
    key: &str,
    what: &str,
    types: &[ParamType],
    values: &[Scalar],
) -> Result<Vec<Token>> {
    if types.len() != values.len() {
        return Err(OriginError::invalid_function_data(
            exchange,
            key,
            format!("expected {} {}, got {}", types.len(), what, values.len()),
        ));
    }
    types
        .iter()
        .zip(values)
        .map(|(param, value)| {
            LenientTokenizer::tokenize(param, &value.to_string()).map_err(|e| {
                OriginError::invalid_function_data(
                    exchange,
                    key,
                    format!("{} is not a valid {}: {}", value, param, e),
                )
            })
        })
        .collect()
}

fn parse_address(text: &str) -> Option<Address> {
    if !text.starts_with("0x") {
        return None;
    }
    let bytes = from_hex(text).ok()?;
    (bytes.len() == 20).then(|| Address::from_slice(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethabi::ethereum_types::U256;
    use types::BLOCK_NUMBER_KEY;

    const RETH: &str = "0xae78736cd615f374d3085123a210448e74fc6393";

    #[test]
    fn test_rest_fixture() {
        let models = parse_yaml(
            r#"
fixtures:
  - exchange: binance
    symbol: eth/btc
    price: 0.07
    status: 404
    timestamp: 2021-03-01T12:00:00Z
"#,
        )
        .unwrap();

        assert_eq!(models.len(), 1);
        let model = &models[0];
        assert_eq!(model.name, "binance");
        assert_eq!(model.symbol.as_ref().unwrap().join("/"), "ETH/BTC");
        assert_eq!(model.price, 0.07);
        assert_eq!(model.status_code, 404);
        assert_eq!(model.timestamp.timestamp(), 1_614_600_000);
    }

    #[test]
    fn test_function_data_is_tokenized() {
        let yaml = format!(
            r#"
fixtures:
  - exchange: rocketpool
    custom:
      blockNumber: 100
      getExchangeRate:
        - address: "{}"
          returns: ["1070000000000000000"]
"#,
            RETH
        );
        let models = parse_yaml(&yaml).unwrap();
        let model = &models[0];

        assert_eq!(model.block_number().unwrap(), 100);
        let data = model.function_data("getExchangeRate").unwrap();
        assert_eq!(data[0].address, parse_address(RETH).unwrap());
        assert!(data[0].args.is_empty());
        assert_eq!(
            data[0].returns,
            vec![Token::Uint(U256::from(1_070_000_000_000_000_000u64))]
        );
    }

    #[test]
    fn test_addresses_and_raw_strings() {
        let yaml = format!(
            r#"
fixtures:
  - exchange: ethrpc
    custom:
      blockNumber: 1
      tokens: ["{}"]
      pool: "{}"
      note: "not an address"
"#,
            RETH, RETH
        );
        let models = parse_yaml(&yaml).unwrap();
        let model = &models[0];

        assert_eq!(model.optional_addresses("tokens").unwrap().unwrap().len(), 1);
        assert_eq!(model.custom_address("pool").unwrap(), parse_address(RETH).unwrap());
        assert_eq!(model.custom_raw("note").unwrap(), "not an address");
        assert!(model.custom.contains_key(BLOCK_NUMBER_KEY));
    }

    #[test]
    fn test_numeric_scalars_are_accepted() {
        let json = format!(
            r#"{{"fixtures":[{{"exchange":"curve","custom":{{"blockNumber":5,
                "get_dy":[{{"address":"{}","args":[0,1,"1000000000000000000"],"returns":[999]}}]}}}}]}}"#,
            RETH
        );
        let models = parse_json(&json).unwrap();
        let data = models[0].function_data("get_dy").unwrap();
        assert_eq!(data[0].args.len(), 3);
        assert_eq!(data[0].returns, vec![Token::Uint(U256::from(999u64))]);
    }

    #[test]
    fn test_negative_integers_are_sign_extended() {
        let yaml = format!(
            r#"
fixtures:
  - exchange: curve
    custom:
      blockNumber: 5
      get_dy:
        - address: "{}"
          args: [-1, 1, 1000]
          returns: [999]
"#,
            RETH
        );
        let models = parse_yaml(&yaml).unwrap();
        let data = models[0].function_data("get_dy").unwrap();
        assert_eq!(data[0].args[0], Token::Int(U256::MAX));
        assert_eq!(data[0].args[1], Token::Int(U256::one()));
    }

    #[test]
    fn test_wrong_arity_names_the_function() {
        let yaml = format!(
            r#"
fixtures:
  - exchange: dsr
    custom:
      dsr:
        - address: "{}"
          returns: ["1", "2"]
"#,
            RETH
        );
        let err = parse_yaml(&yaml).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid function data for dsr.dsr: expected 1 returns, got 2"
        );
    }

    #[test]
    fn test_calls_under_unknown_key_are_rejected() {
        let yaml = format!(
            r#"
fixtures:
  - exchange: dsr
    custom:
      mystery:
        - address: "{}"
"#,
            RETH
        );
        assert!(matches!(
            parse_yaml(&yaml),
            Err(OriginError::InvalidFunctionData { .. })
        ));
    }

    #[test]
    fn test_malformed_file() {
        assert!(matches!(
            parse_yaml("fixtures: 3"),
            Err(OriginError::FixtureFile(_))
        ));
        assert!(matches!(
            parse_yaml("fixtures:\n  - exchange: binance\n    colour: red\n"),
            Err(OriginError::FixtureFile(_))
        ));
    }

    #[test]
    fn test_load_picks_parser_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixtures.json");
        std::fs::write(&path, r#"{"fixtures":[{"exchange":"kraken","symbol":"ETH/BTC"}]}"#).unwrap();
        let models = load_fixtures(&path).unwrap();
        assert_eq!(models[0].name, "kraken");
    }
}
