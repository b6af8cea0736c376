//! Fixture-to-mock scenarios across the registry

use codec::contracts::GET_EXCHANGE_RATE;
use codec::{encode_multicall_args, encode_multicall_response, to_hex, MultiCall};
use ethabi::ethereum_types::U256;
use origins::{
    build_mocks_for_exchange, parse_yaml, rpc_result, Exchange, ExchangeMock, FunctionData,
    MocksBuilder, OriginError, BLOCK_NUMBER_KEY,
};
use serde_json::Value;
use smocker::{BodyMatcher, MatcherKind, Mock};
use types::{Address, Token};

fn body(mock: &Mock) -> Value {
    serde_json::from_str(&mock.response.as_ref().unwrap().body).unwrap()
}

fn reth() -> Address {
    "ae78736cd615f374d3085123a210448e74fc6393".parse().unwrap()
}

#[test]
fn test_binance_price_ticker() {
    let fixture = ExchangeMock::new("binance")
        .with_symbol("ETH/BTC")
        .unwrap()
        .with_price(1.0);
    let mocks = build_mocks_for_exchange("binance", &[fixture]).unwrap();

    let price = &mocks[0];
    assert_eq!(price.request.method.value, "GET");
    assert_eq!(price.request.path.value, "/api/v3/ticker/price");
    assert_eq!(price.request.query_params["symbol"][0].value, "ETHBTC");
    let body = body(price);
    assert_eq!(body["price"], "1.00000000");
    assert_eq!(body["symbol"], "ETHBTC");
}

#[test]
fn test_balancer_v2_without_pool_data_fails() {
    let fixture = ExchangeMock::new("balancerV2")
        .with_symbol("STETH/ETH")
        .unwrap()
        .with_price(1.0);
    let builder = MocksBuilder::new().add(fixture);
    assert!(builder.build().is_err());
}

#[test]
fn test_rocketpool_rate_mock() {
    let rate = U256::from(1_070_000_000_000_000_000u64);
    let fixture = ExchangeMock::new("rocketpool")
        .with_custom(BLOCK_NUMBER_KEY, 100u64)
        .with_function_data(
            "getExchangeRate",
            vec![FunctionData::new(reth()).with_returns(vec![Token::Uint(rate)])],
        );
    let mocks = build_mocks_for_exchange("rocketpool", &[fixture]).unwrap();
    let rate_mock = mocks.last().unwrap();

    let call = GET_EXCHANGE_RATE.encode_call(&[]).unwrap();
    let expected_args = encode_multicall_args(&[MultiCall::new(reth(), call)]);
    match &rate_mock.request.body {
        Some(BodyMatcher::String(matcher)) => {
            assert_eq!(matcher.matcher, MatcherKind::ShouldContainSubstring);
            assert_eq!(matcher.value, to_hex(&expected_args));
        }
        other => panic!("unexpected body matcher: {:?}", other),
    }
    assert_eq!(rate_mock.request.method.value, "POST");
    assert_eq!(rate_mock.request.path.value, "/");

    let mut slot = [0u8; 32];
    rate.to_big_endian(&mut slot);
    let expected_response = encode_multicall_response(100, &[slot.to_vec()]);
    assert_eq!(
        rate_mock.response.as_ref().unwrap().body,
        rpc_result(&to_hex(&expected_response))
    );
}

#[test]
fn test_error_status_drops_bodies_everywhere() {
    let rest = ["binance", "bitfinex", "coinbase", "huobi", "kraken", "upbit"];
    for name in rest {
        let fixture = ExchangeMock::new(name)
            .with_symbol("ETH/BTC")
            .unwrap()
            .with_price(1.0)
            .with_volume(2.0)
            .with_status_code(404);
        let mocks = build_mocks_for_exchange(name, &[fixture]).unwrap();
        for mock in &mocks {
            let response = mock.response.as_ref().unwrap();
            assert_eq!(response.status, 404, "{}", name);
            assert!(response.body.is_empty(), "{}", name);
        }
    }

    let fixture = ExchangeMock::new("dsr")
        .with_status_code(500)
        .with_custom(BLOCK_NUMBER_KEY, 1u64)
        .with_function_data(
            "dsr",
            vec![FunctionData::new(reth()).with_returns(vec![Token::Uint(U256::one())])],
        );
    let mocks = build_mocks_for_exchange("dsr", &[fixture]).unwrap();
    assert!(mocks
        .iter()
        .all(|mock| mock.response.as_ref().unwrap().body.is_empty()));
}

#[test]
fn test_on_chain_mocks_share_the_fixture_block() {
    let fixture = ExchangeMock::new("wsteth")
        .with_custom(BLOCK_NUMBER_KEY, 255u64)
        .with_function_data(
            "stEthPerToken",
            vec![FunctionData::new(reth()).with_returns(vec![Token::Uint(U256::one())])],
        );
    let mocks = build_mocks_for_exchange("wsteth", &[fixture]).unwrap();

    let block_mock = mocks
        .iter()
        .find(|mock| match &mock.request.body {
            Some(BodyMatcher::String(matcher)) => matcher.value == "eth_blockNumber",
            _ => false,
        })
        .unwrap();
    assert_eq!(body(block_mock)["result"], "ff");

    let rate_mock = mocks.last().unwrap();
    let result = body(rate_mock)["result"].as_str().unwrap().to_string();
    let (block, _) = codec::decode_multicall_response(&codec::from_hex(&result).unwrap()).unwrap();
    assert_eq!(block, 255);
}

#[test]
fn test_combined_endpoints_deduplicate() {
    let fixtures = vec![
        ExchangeMock::new("poloniex").with_symbol("ETH/BTC").unwrap().with_price(1.0),
        ExchangeMock::new("poloniex").with_symbol("ETH/BTC").unwrap().with_price(2.0),
    ];
    let mocks = build_mocks_for_exchange("poloniex", &fixtures).unwrap();
    assert_eq!(mocks.len(), 1);
    let tickers = body(&mocks[0]);
    assert_eq!(tickers.as_object().unwrap().len(), 1);
    assert_eq!(tickers["BTC_ETH"]["last"], "2.00000000");
}

#[test]
fn test_first_failing_fixture_aborts_the_batch() {
    let fixtures = vec![
        ExchangeMock::new("kraken").with_symbol("ETH/BTC").unwrap(),
        ExchangeMock::new("kraken"),
        ExchangeMock::new("kraken").with_symbol("LTC/BTC").unwrap(),
    ];
    let err = build_mocks_for_exchange("kraken", &fixtures).unwrap_err();
    assert!(matches!(err, OriginError::MissingSymbol { ref exchange } if exchange == "kraken"));
}

#[test]
fn test_every_rest_exchange_builds_from_a_plain_fixture() {
    for exchange in Exchange::ALL {
        if exchange.family() != origins::Family::Rest {
            continue;
        }
        let fixture = ExchangeMock::new(exchange.name())
            .with_symbol("ETH/BTC")
            .unwrap()
            .with_price(0.07)
            .with_bid(0.069)
            .with_ask(0.071)
            .with_volume(100.0);
        let mocks = build_mocks_for_exchange(exchange.name(), &[fixture]).unwrap();
        assert!(!mocks.is_empty(), "{}", exchange);
        for mock in &mocks {
            let response = mock.response.as_ref().unwrap();
            assert_eq!(response.headers["Content-Type"], vec!["application/json"]);
            serde_json::from_str::<Value>(&response.body)
                .unwrap_or_else(|e| panic!("{} body is not JSON: {}", exchange, e));
        }
    }
}

#[test]
fn test_fixture_file_to_mocks() {
    let models = parse_yaml(
        r#"
fixtures:
  - exchange: sdai
    custom:
      blockNumber: 18000000
      previewRedeem:
        - address: "0x83f20f44975d03b1b09e64809b757c47f942beea"
          args: ["1000000000000000000"]
          returns: ["1040000000000000000"]
  - exchange: gemini
    symbol: ETH/USD
    price: 3000
"#,
    )
    .unwrap();
    let builder = models
        .into_iter()
        .fold(MocksBuilder::new(), |builder, model| builder.add(model));

    assert_eq!(builder.exchanges().collect::<Vec<_>>(), vec!["sdai", "gemini"]);
    let mocks = builder.build().unwrap();
    // chain id, block number, net version, previewRedeem, gemini ticker
    assert_eq!(mocks.len(), 5);
    assert_eq!(mocks[4].request.path.value, "/v1/pubticker/ethusd");
}
