use alloy::primitives::{utils::format_ether, U256};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::fmt;

// ============================================================================
// Data Types
// ============================================================================

/// Account balance in Wei plus its Ether equivalent (`wei / 10^18`).
#[derive(Debug, Clone, PartialEq)]
pub struct Balance {
    pub wei: U256,
    pub ether: f64,
}

impl Balance {
    pub fn from_wei(wei: U256) -> Self {
        Self {
            wei,
            ether: wei_to_ether(wei),
        }
    }

    /// Exact decimal Ether amount with 18 fractional digits
    pub fn ether_exact(&self) -> String {
        format_ether(self.wei)
    }
}

/// One entry of an `account/txlist` result.
///
/// Passed through as the service sent it: the named fields only have to be
/// present, and everything else lands in `extra` untouched. Named fields of
/// any JSON type are kept as text (`null` becomes an empty string).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionRecord {
    #[serde(deserialize_with = "any_as_text")]
    pub hash: String,
    #[serde(deserialize_with = "any_as_text")]
    pub from: String,
    #[serde(deserialize_with = "any_as_text")]
    pub to: String,
    /// Base-unit (Wei) amount as a decimal string
    #[serde(deserialize_with = "any_as_text")]
    pub value: String,
    #[serde(rename = "blockNumber", deserialize_with = "any_as_text")]
    pub block_number: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TransactionRecord {
    pub fn value_wei(&self) -> Option<U256> {
        parse_decimal_u256(&self.value)
    }

    pub fn value_ether(&self) -> Option<f64> {
        self.value_wei().map(wei_to_ether)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// Block range and ordering for a transaction list lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxListQuery {
    pub start_block: u64,
    pub end_block: u64,
    pub sort: SortOrder,
}

impl Default for TxListQuery {
    fn default() -> Self {
        Self {
            start_block: 0,
            end_block: 99_999_999,
            sort: SortOrder::Desc,
        }
    }
}

fn any_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

// ============================================================================
// Unit helpers
// ============================================================================

pub fn wei_to_ether(wei: U256) -> f64 {
    // format_ether always yields a plain decimal, so this parse cannot fail
    format_ether(wei).parse().unwrap_or(f64::NAN)
}

/// Strict base-10 parse: ASCII digits only, surrounding whitespace allowed.
pub fn parse_decimal_u256(text: &str) -> Option<U256> {
    let digits = text.trim();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    U256::from_str_radix(digits, 10).ok()
}
