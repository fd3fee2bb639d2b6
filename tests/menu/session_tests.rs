use super::*;
use serde_json::json;

#[tokio::test]
async fn test_exit_immediately() {
    let server = MockServer::start().await;
    let output = run_session(&server, "4\n").await;

    assert!(output.contains("1. Check the balance of an Ethereum address"));
    assert!(output.contains("4. Exit"));
    assert!(output.ends_with("Exiting...\n"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_end_of_input_exits() {
    let server = MockServer::start().await;
    let output = run_session(&server, "").await;
    assert!(output.ends_with("Exiting...\n"));
}

#[tokio::test]
async fn test_unknown_choice_loops() {
    let server = MockServer::start().await;
    let output = run_session(&server, "9\nhello\n4\n").await;

    assert!(output.contains("Didn't understand \"9\", please try again."));
    assert!(output.contains("Didn't understand \"hello\""));
    assert_eq!(output.matches("--- ethscan ---").count(), 3);
}

#[tokio::test]
async fn test_balance_flow() {
    let server = MockServer::start().await;
    mount_action(
        &server,
        "balance",
        json!({"status": "1", "message": "OK", "result": "1000000000000000000"}),
    )
    .await;

    let output = run_session(&server, &format!("1\n{ADDRESS}\n4\n")).await;
    assert!(output.contains(&format!("Balance for {ADDRESS}:")));
    assert!(output.contains("Wei: 1000000000000000000"));
    assert!(output.contains("Ether: 1.000000000000000000"));
}

#[tokio::test]
async fn test_last_block_flow() {
    let server = MockServer::start().await;
    mount_action(&server, "eth_blockNumber", json!({"result": "0x112a880"})).await;

    let output = run_session(&server, "2\n4\n").await;
    assert!(output.contains("Latest block number: 18000000"));
}

#[tokio::test]
async fn test_transactions_flow_truncates_to_count() {
    let server = MockServer::start().await;
    let txs: Vec<_> = (0..5)
        .map(|i| {
            json!({
                "hash": format!("0xhash{i}"),
                "from": ADDRESS,
                "to": "0x742d35cc6634c0532925a3b844bc9e7595f8fe31",
                "value": "1000000000000000000",
                "blockNumber": format!("{}", 18_000_000 - i)
            })
        })
        .collect();
    mount_action(&server, "txlist", json!({"status": "1", "result": txs})).await;

    let output = run_session(&server, &format!("3\n{ADDRESS}\n2\n4\n")).await;
    assert!(output.contains(&format!("Last 2 transactions for {ADDRESS}:")));
    assert!(output.contains("Hash: 0xhash0"));
    assert!(output.contains("Hash: 0xhash1"));
    assert!(!output.contains("0xhash2"));
    assert!(output.contains("Value: 1 Ether"));
    assert!(output.contains("Block: 17999999"));
}

#[tokio::test]
async fn test_transactions_error_is_printed() {
    let server = MockServer::start().await;
    mount_action(
        &server,
        "txlist",
        json!({"status": "0", "message": "No transactions found"}),
    )
    .await;

    let output = run_session(&server, &format!("3\n{ADDRESS}\n10\n4\n")).await;
    assert!(output.contains("Failed to retrieve the transactions: No transactions found"));
    assert!(output.ends_with("Exiting...\n"));
}

#[tokio::test]
async fn test_invalid_count_returns_to_menu() {
    let server = MockServer::start().await;
    let output = run_session(&server, &format!("3\n{ADDRESS}\nmany\n4\n")).await;

    assert!(output.contains("\"many\" is not a valid count"));
    assert!(output.ends_with("Exiting...\n"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_transport_failure_does_not_end_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let output = run_session(&server, "2\n2\n4\n").await;
    assert_eq!(
        output
            .matches("Failed to retrieve the latest block: HTTP request failed")
            .count(),
        2
    );
    assert!(output.ends_with("Exiting...\n"));
}
