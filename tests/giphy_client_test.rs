//! GiphyClient against a real HTTP server (wiremock) through the reqwest adapter.

mod common;

use common::{page_json, TEST_API_KEY};
use giftrend::adapters::ReqwestHttpClient;
use giftrend::api::{FetchResult, GiphyClient};
use giftrend::config::GalleryConfig;
use giftrend::error::ApiError;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GiphyClient {
    let config = GalleryConfig::new(TEST_API_KEY).with_base_url(server.uri());
    GiphyClient::new(ReqwestHttpClient::new(), &config)
}

#[tokio::test]
async fn test_trending_request_shape() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/trending"))
        .and(query_param("api_key", TEST_API_KEY))
        .and(query_param("limit", "20"))
        .and(query_param("offset", "40"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(&["x", "y"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.fetch_trending(40).await.unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.data[0].id, "x");
    assert_eq!(page.data[0].width(), 480);
    assert_eq!(page.data[0].height(), 270);
    assert_eq!(page.data[0].url(), "https://media.giphy.com/media/x/giphy.gif");
}

#[tokio::test]
async fn test_api_key_with_reserved_characters_arrives_intact() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/trending"))
        .and(query_param("api_key", "a b&offset=9"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(&["x"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = GalleryConfig::new("a b&offset=9").with_base_url(mock_server.uri());
    let client = GiphyClient::new(ReqwestHttpClient::new(), &config);

    let page = client.fetch_trending(0).await.unwrap();
    assert_eq!(page.len(), 1);
}

#[tokio::test]
async fn test_rate_limited_reports_bare_code() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/trending"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "meta": { "status": 429, "msg": "Too Many Requests" }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert_eq!(
        client.request_page(0).await,
        FetchResult::Failure("429".to_string())
    );
}

#[tokio::test]
async fn test_empty_data_is_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/trending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(&[])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    match client.request_page(0).await {
        FetchResult::Success(page) => assert!(page.is_empty()),
        other => panic!("expected empty success, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/trending"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"data\": 42}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(matches!(
        client.fetch_trending(0).await,
        Err(ApiError::Decode(_))
    ));
    assert_eq!(
        client.request_page(0).await,
        FetchResult::Failure("invalid response".to_string())
    );
}

#[tokio::test]
async fn test_unreachable_server_is_transport_failure() {
    // Nothing listens on port 9 (discard) in the test environment
    let config = GalleryConfig::new(TEST_API_KEY).with_base_url("http://127.0.0.1:9");
    let client = GiphyClient::new(ReqwestHttpClient::new(), &config);

    match client.request_page(0).await {
        FetchResult::Failure(message) => {
            assert!(!message.contains(TEST_API_KEY));
            assert!(message.parse::<u16>().is_err());
        }
        other => panic!("expected failure, got {:?}", other),
    }
}
