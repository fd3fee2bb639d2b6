//! proxy/eth_blockNumber

use super::*;
use ethscan::ExplorerError;
use serde_json::json;

#[tokio::test]
async fn test_last_block() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "proxy",
        "eth_blockNumber",
        json!({"jsonrpc": "2.0", "id": 83, "result": "0x112a880"}),
    )
    .await;

    let number = client_for(&server).get_last_block().await.unwrap();
    assert_eq!(number, 18_000_000);
}

#[tokio::test]
async fn test_last_block_without_result() {
    let server = MockServer::start().await;
    mount_json(&server, "proxy", "eth_blockNumber", json!({"jsonrpc": "2.0", "id": 83})).await;

    let err = client_for(&server).get_last_block().await.unwrap_err();
    assert_eq!(
        err,
        ExplorerError::Parse("Unexpected format in block data.".to_string())
    );
}

#[tokio::test]
async fn test_last_block_rate_limited() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "proxy",
        "eth_blockNumber",
        json!({"status": "0", "message": "NOTOK", "result": "Max rate limit reached"}),
    )
    .await;

    let err = client_for(&server).get_last_block().await.unwrap_err();
    assert!(matches!(err, ExplorerError::Business(_)));
    assert!(err.to_string().contains("Max rate limit reached"));
}
