//! Deploying fixtures to an in-process stand-in for the mock server

use mockito::{Matcher, Server};
use origins::{ExchangeMock, MocksBuilder, OriginError};
use smocker::SmockerApi;

fn binance() -> ExchangeMock {
    ExchangeMock::new("binance")
        .with_symbol("ETH/BTC")
        .unwrap()
        .with_price(1.0)
}

#[tokio::test]
async fn test_deploy_resets_then_submits() {
    let mut server = Server::new_async().await;
    let reset = server
        .mock("POST", "/reset")
        .match_query(Matcher::UrlEncoded("force".into(), "true".into()))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let submit = server
        .mock("POST", "/mocks")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("/api/v3/ticker/price".into()),
            Matcher::Regex("/api/v3/ticker/24hr".into()),
        ]))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let api = SmockerApi::new(server.url());
    let count = MocksBuilder::new()
        .reset()
        .add(binance())
        .deploy(&api)
        .await
        .unwrap();

    assert_eq!(count, 2);
    reset.assert_async().await;
    submit.assert_async().await;
}

#[tokio::test]
async fn test_empty_deploy_only_resets() {
    let mut server = Server::new_async().await;
    let reset = server
        .mock("POST", "/reset")
        .match_query(Matcher::Any)
        .with_status(200)
        .create_async()
        .await;
    let submit = server
        .mock("POST", "/mocks")
        .expect(0)
        .create_async()
        .await;

    let api = SmockerApi::new(server.url());
    let count = MocksBuilder::new().reset().deploy(&api).await.unwrap();

    assert_eq!(count, 0);
    reset.assert_async().await;
    submit.assert_async().await;
}

#[tokio::test]
async fn test_bad_fixture_never_reaches_the_server() {
    let mut server = Server::new_async().await;
    let any = server
        .mock("POST", Matcher::Any)
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let api = SmockerApi::new(server.url());
    let err = MocksBuilder::new()
        .reset()
        .add(ExchangeMock::new("balancerV2"))
        .deploy(&api)
        .await
        .unwrap_err();

    assert!(matches!(err, OriginError::Fixture { .. }));
    any.assert_async().await;
}

#[tokio::test]
async fn test_reset_failure_is_fatal() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/reset")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;
    let submit = server
        .mock("POST", "/mocks")
        .expect(0)
        .create_async()
        .await;

    let api = SmockerApi::new(server.url());
    let err = MocksBuilder::new()
        .reset()
        .add(binance())
        .deploy(&api)
        .await
        .unwrap_err();

    assert!(matches!(err, OriginError::Server { operation: "reset", .. }));
    assert!(err.to_string().starts_with("Failed to reset mocks"));
    submit.assert_async().await;
}

#[tokio::test]
async fn test_debug_dump_matches_submission() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/mocks")
        .with_status(200)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dump = dir.path().join("mocks.json");
    let api = SmockerApi::new(server.url());
    let builder = MocksBuilder::new().debug(&dump).add(binance());
    builder.deploy(&api).await.unwrap();

    let written: Vec<smocker::Mock> =
        serde_json::from_str(&std::fs::read_to_string(&dump).unwrap()).unwrap();
    assert_eq!(written, builder.build().unwrap());
}
