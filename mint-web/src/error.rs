//! # Mint Errors
//!
//! Error type shared by the wallet binding, the contract handle and the
//! widget operations.
//!
//! ## Error Categories
//!
//! - **ProviderAbsent**: no injected wallet (`window.ethereum` is missing)
//! - **WrongNetwork**: wallet is on a different chain than configured
//! - **UserRejected**: the user declined authorization or signing (EIP-1193 code 4001)
//! - **Rpc**: any other error returned by the wallet provider
//! - **TransactionFailed / Reverted**: submission or confirmation failed on-chain
//! - **ListenerRegistration**: the mint event watcher could not be armed
//! - **Decode**: a provider response did not have the expected shape
//!
//! Widget operations catch every variant at their own boundary; nothing
//! propagates to the page.

use thiserror::Error;

/// EIP-1193 `userRejectedRequest` error code.
pub const USER_REJECTED_CODE: i64 = 4001;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MintError {
    #[error("No wallet provider found")]
    ProviderAbsent,

    #[error("Wrong network: expected {expected}, wallet is on {actual}")]
    WrongNetwork { expected: String, actual: String },

    #[error("User rejected the request: {0}")]
    UserRejected(String),

    #[error("Provider error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Transaction {hash} reverted")]
    Reverted { hash: String },

    #[error("Could not register mint event listener: {0}")]
    ListenerRegistration(String),

    #[error("Unexpected provider response: {0}")]
    Decode(String),
}

impl MintError {
    /// Classify an error object returned by the provider.
    pub fn from_rpc(code: i64, message: impl Into<String>) -> Self {
        let message = message.into();
        if code == USER_REJECTED_CODE {
            MintError::UserRejected(message)
        } else {
            MintError::Rpc { code, message }
        }
    }

    pub fn is_user_rejection(&self) -> bool {
        matches!(self, MintError::UserRejected(_))
    }
}

impl From<serde_json::Error> for MintError {
    fn from(err: serde_json::Error) -> Self {
        MintError::Decode(err.to_string())
    }
}

pub type MintResult<T> = Result<T, MintError>;
