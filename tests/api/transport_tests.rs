//! Failures below the JSON layer

use super::*;
use ethscan::ExplorerError;
use std::net::TcpListener;
use std::time::Duration;

/// A local URL nothing is listening on
fn refused_endpoint() -> Endpoint {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    Endpoint::new(&format!("http://127.0.0.1:{port}/api"), API_KEY).unwrap()
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = ExplorerClient::new(refused_endpoint()).unwrap();

    let err = client.get_balance(ADDRESS).await.unwrap_err();
    assert!(err.is_transport(), "{err:?}");
    assert!(err.to_string().starts_with("HTTP request failed"));

    assert!(client.get_last_block().await.unwrap_err().is_transport());
}

#[tokio::test]
async fn test_transport_error_hides_api_key() {
    let client = ExplorerClient::new(refused_endpoint()).unwrap();
    let err = client.get_last_block().await.unwrap_err();
    assert!(!err.to_string().contains(API_KEY));
}

#[tokio::test]
async fn test_http_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = client_for(&server).get_last_block().await.unwrap_err();
    assert!(err.is_transport());
    assert!(err.to_string().contains("502"));
}

#[tokio::test]
async fn test_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_balance(ADDRESS).await.unwrap_err();
    assert!(matches!(err, ExplorerError::Parse(_)));
    assert!(err.to_string().starts_with("JSON decoding failed"));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let endpoint = Endpoint::new(&format!("{}/api", server.uri()), API_KEY)
        .unwrap()
        .with_timeout(Duration::from_millis(200))
        .unwrap();
    let client = ExplorerClient::new(endpoint).unwrap();

    let err = client.get_last_block().await.unwrap_err();
    assert!(err.is_transport(), "{err:?}");
}
