//! Turn raw explorer JSON into [`ApiResult`] values.
//!
//! All three functions are total: whatever JSON they are handed, they return
//! either the payload or an [`ExplorerError`], never a panic.

use super::types::{parse_decimal_u256, Balance, TransactionRecord};
use crate::error::{ApiResult, ExplorerError};
use alloy::primitives::U256;
use serde::Deserialize;
use serde_json::Value;

/// `status` value the explorer uses for a successful call
pub const SUCCESS_STATUS: &str = "1";

const DEFAULT_ERROR: &str = "Unexpected error.";

pub fn normalize_balance(body: &Value) -> ApiResult<Balance> {
    check_status(body)?;

    let raw = body.get("result").ok_or_else(|| {
        ExplorerError::Parse("Failed to parse balance: missing `result` field".to_string())
    })?;

    let wei = match raw {
        Value::String(text) => parse_decimal_u256(text),
        Value::Number(n) => n.as_u64().map(U256::from),
        _ => None,
    }
    .ok_or_else(|| ExplorerError::Parse(format!("Failed to parse balance: {raw} is not a Wei amount")))?;

    Ok(Balance::from_wei(wei))
}

/// Parses the hex `result` of `proxy/eth_blockNumber`.
///
/// Proxy calls answer in JSON-RPC form and usually carry no `status`, so the
/// status check only applies when the field is there.
pub fn normalize_block_number(body: &Value) -> ApiResult<u64> {
    if let Some(error) = body.get("error") {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_ERROR);
        return Err(ExplorerError::Business(message.to_string()));
    }
    if body.get("status").is_some() {
        check_status(body)?;
    }

    let raw = body
        .get("result")
        .ok_or_else(|| ExplorerError::Parse("Unexpected format in block data.".to_string()))?;
    let text = raw.as_str().ok_or_else(|| {
        ExplorerError::Parse(format!("Failed to parse block number: {raw} is not a hex string"))
    })?;

    parse_hex_u64(text).ok_or_else(|| {
        ExplorerError::Parse(format!("Failed to parse block number: invalid hex {text:?}"))
    })
}

pub fn normalize_transactions(body: &Value) -> ApiResult<Vec<TransactionRecord>> {
    check_status(body)?;

    let raw = body.get("result").ok_or_else(|| {
        ExplorerError::Parse("Failed to parse transactions: missing `result` field".to_string())
    })?;

    Vec::<TransactionRecord>::deserialize(raw)
        .map_err(|e| ExplorerError::Parse(format!("Failed to parse transactions: {e}")))
}

fn check_status(body: &Value) -> ApiResult<()> {
    if body.get("status").and_then(Value::as_str) == Some(SUCCESS_STATUS) {
        Ok(())
    } else {
        Err(ExplorerError::Business(service_message(body)))
    }
}

/// The service's own explanation of a failed call.
///
/// Etherscan often answers `"message": "NOTOK"` with the real reason in
/// `result`, so a string `result` is appended when it adds something.
fn service_message(body: &Value) -> String {
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty());
    let detail = body
        .get("result")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|r| !r.is_empty());

    match (message, detail) {
        (Some(message), Some(detail)) if message != detail => format!("{message} ({detail})"),
        (Some(message), _) => message.to_string(),
        (None, Some(detail)) => detail.to_string(),
        (None, None) => DEFAULT_ERROR.to_string(),
    }
}

/// Hex with an optional `0x`/`0X` prefix
fn parse_hex_u64(text: &str) -> Option<u64> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}
