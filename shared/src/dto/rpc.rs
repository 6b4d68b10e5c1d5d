//! Ethereum JSON-RPC payloads exchanged with an injected wallet provider.
//!
//! Field names follow the JSON-RPC wire format (camelCase); quantities stay
//! as `0x`-prefixed hex strings the way the node returns them.

use serde::{Deserialize, Serialize};

/// Parameters for `eth_sendTransaction`.
///
/// Gas, gas price and nonce are left to the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Result of `eth_getTransactionReceipt` once the transaction is mined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    #[serde(default)]
    pub block_number: Option<String>,
    /// `0x1` on success, `0x0` when the transaction reverted.
    #[serde(default)]
    pub status: Option<String>,
}

impl TransactionReceipt {
    pub fn is_reverted(&self) -> bool {
        matches!(self.status.as_deref(), Some("0x0"))
    }
}

/// Filter object for `eth_getLogs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFilter {
    pub address: String,
    pub topics: Vec<String>,
    pub from_block: String,
    pub to_block: String,
}

/// A single entry returned by `eth_getLogs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    pub address: String,
    pub topics: Vec<String>,
    pub data: String,
    #[serde(default)]
    pub block_number: Option<String>,
    #[serde(default)]
    pub transaction_hash: Option<String>,
}
