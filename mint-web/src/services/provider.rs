//! Injected Ethereum wallet integration via wasm-bindgen
//!
//! The widget only talks to the wallet through [`WalletProvider`], an
//! EIP-1193 style `request(method, params)` seam. [`BrowserProvider`] binds
//! it to the `window.ethereum` object injected by MetaMask and compatible
//! extensions; tests substitute a scripted provider.

use async_trait::async_trait;
use js_sys::Reflect;
use serde::Serialize;
use serde_json::{json, Value};
use shared::dto::{Log, LogFilter, TransactionReceipt, TransactionRequest};
use wasm_bindgen::prelude::*;

use crate::error::{MintError, MintResult};
use crate::utils::format::parse_quantity;

// ============================================================================
// PROVIDER TRAIT
// ============================================================================

/// Capability exposed by a browser-injected wallet.
///
/// Only [`request`](WalletProvider::request) must be implemented; the typed
/// helpers decode the JSON-RPC results the widget needs.
#[async_trait(?Send)]
pub trait WalletProvider: Clone + 'static {
    async fn request(&self, method: &str, params: Value) -> MintResult<Value>;

    /// Accounts already authorized for this origin (`eth_accounts`). Never prompts.
    async fn get_accounts(&self) -> MintResult<Vec<String>> {
        let value = self.request("eth_accounts", json!([])).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Ask the user to authorize this origin (`eth_requestAccounts`).
    ///
    /// Suspends until the user answers the wallet prompt.
    async fn request_accounts(&self) -> MintResult<Vec<String>> {
        let value = self.request("eth_requestAccounts", json!([])).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn get_chain_id(&self) -> MintResult<String> {
        let value = self.request("eth_chainId", json!([])).await?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| MintError::Decode(format!("eth_chainId returned {}", value)))
    }

    /// Have the wallet sign and broadcast `tx`; returns the transaction hash.
    async fn sign_and_send(&self, tx: &TransactionRequest) -> MintResult<String> {
        let value = self.request("eth_sendTransaction", json!([tx])).await?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| MintError::Decode(format!("eth_sendTransaction returned {}", value)))
    }

    /// `None` while the transaction is still pending.
    async fn get_transaction_receipt(&self, hash: &str) -> MintResult<Option<TransactionReceipt>> {
        let value = self
            .request("eth_getTransactionReceipt", json!([hash]))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn block_number(&self) -> MintResult<u64> {
        let value = self.request("eth_blockNumber", json!([])).await?;
        value
            .as_str()
            .and_then(parse_quantity)
            .ok_or_else(|| MintError::Decode(format!("eth_blockNumber returned {}", value)))
    }

    async fn get_logs(&self, filter: &LogFilter) -> MintResult<Vec<Log>> {
        let value = self.request("eth_getLogs", json!([filter])).await?;
        Ok(serde_json::from_value(value)?)
    }
}

// ============================================================================
// BROWSER BINDING (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function injectedEthereum() {
    if (typeof window === 'undefined' || !window.ethereum) {
        return null;
    }
    return window.ethereum;
}

export async function ethereumRequest(provider, method, params) {
    return await provider.request({ method: method, params: params });
}
")]
extern "C" {
    /// The injected `window.ethereum` object, if any
    fn injectedEthereum() -> Option<JsValue>;

    #[wasm_bindgen(catch)]
    async fn ethereumRequest(provider: &JsValue, method: &str, params: JsValue) -> Result<JsValue, JsValue>;
}

/// `window.ethereum` wrapped as a [`WalletProvider`].
#[derive(Clone, Debug)]
pub struct BrowserProvider {
    inner: JsValue,
}

impl BrowserProvider {
    /// Look up the injected provider. `None` when no wallet extension is installed.
    pub fn detect() -> Option<Self> {
        injectedEthereum()
            .filter(|value| !value.is_null() && !value.is_undefined())
            .map(|inner| Self { inner })
    }
}

#[async_trait(?Send)]
impl WalletProvider for BrowserProvider {
    async fn request(&self, method: &str, params: Value) -> MintResult<Value> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let js_params = params
            .serialize(&serializer)
            .map_err(|e| MintError::Decode(format!("Failed to encode params for {}: {}", method, e)))?;

        match ethereumRequest(&self.inner, method, js_params).await {
            Ok(result) => {
                if result.is_undefined() || result.is_null() {
                    return Ok(Value::Null);
                }
                serde_wasm_bindgen::from_value(result)
                    .map_err(|e| MintError::Decode(format!("{} result: {}", method, e)))
            }
            Err(err) => Err(js_error_to_mint_error(&err)),
        }
    }
}

/// Unpack an EIP-1193 `ProviderRpcError` (`{ code, message }`).
fn js_error_to_mint_error(err: &JsValue) -> MintError {
    let code = Reflect::get(err, &JsValue::from_str("code"))
        .ok()
        .and_then(|c| c.as_f64())
        .map(|c| c as i64);
    let message = Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));

    match code {
        Some(code) => MintError::from_rpc(code, message),
        None => MintError::Rpc { code: 0, message },
    }
}
