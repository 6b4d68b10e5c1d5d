//! # Data Transfer Objects (DTOs)
//!
//! Wire types for the Ethereum JSON-RPC calls the mint page makes through the
//! wallet provider.
//!
//! ## Module Organization
//!
//! - [`rpc`] - Transaction requests, receipts, log filters and decoded mint events
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase, matching the JSON-RPC wire format
//! - **Optional fields**: Omitted when `None` on requests, defaulted when absent on responses
//!
//! ## Example
//!
//! ```text
//! {"jsonrpc":"2.0","method":"eth_getTransactionReceipt","params":["0x5c50..."]}
//!
//! {"transactionHash":"0x5c50...","blockNumber":"0xa1b2c3","status":"0x1"}
//! ```

pub mod rpc;

pub use rpc::*;
