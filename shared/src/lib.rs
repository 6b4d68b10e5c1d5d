//! # Shared Types Library
//!
//! Types and helpers shared by the mint page crates.
//!
//! ## Structure
//!
//! - **[`dto`]**: Ethereum JSON-RPC payloads
//!   - **[`dto::rpc`]**: transaction requests, receipts and logs
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::TransactionRequest;
//! use shared::utils::truncate_address;
//!
//! let tx = TransactionRequest {
//!     from: "0x1000000000000000000000000000000000000001".to_string(),
//!     to: "0x170F5FFEB11F56F35505C54C55233040C54227C8".to_string(),
//!     data: "0x00000000".to_string(),
//!     value: None,
//! };
//!
//! assert_eq!(truncate_address(&tx.to), "0x170F...27C8");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
