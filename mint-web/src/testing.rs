//! Test doubles for the wallet provider, the UI host and the logger.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use alloy_primitives::{hex, Address, U256};
use alloy_sol_types::SolEvent;
use async_trait::async_trait;
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde_json::{json, Value};
use shared::dto::{Log, LogFilter, TransactionReceipt, TransactionRequest};

use crate::error::{MintError, MintResult};
use crate::services::contract::{NewEpicNFTMinted, NftInterface};
use crate::services::provider::WalletProvider;
use crate::utils::constants::CONTRACT_ADDRESS;
use crate::utils::format::to_quantity;
use crate::widget::WidgetHost;

// ============================================================================
// MOCK PROVIDER
// ============================================================================

#[derive(Default)]
struct MockState {
    chain_id: String,
    authorized: Vec<String>,
    requestable: Vec<String>,
    block_number: u64,
    tx_hash: String,
    receipts: VecDeque<Option<TransactionReceipt>>,
    logs: VecDeque<Vec<Log>>,
    raw: HashMap<String, Value>,
    failures: HashMap<String, (i64, String)>,
    send_gate: Option<oneshot::Receiver<()>>,
    calls: Vec<String>,
    sent: Vec<TransactionRequest>,
    last_filter: Option<LogFilter>,
}

/// Scripted JSON-RPC provider. Clones share state.
#[derive(Clone)]
pub struct MockProvider {
    state: Rc<RefCell<MockState>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState {
                chain_id: "0x4".to_string(),
                tx_hash: "0x01".to_string(),
                ..MockState::default()
            })),
        }
    }

    pub fn with_chain_id(self, chain_id: &str) -> Self {
        self.state.borrow_mut().chain_id = chain_id.to_string();
        self
    }

    /// Result of `eth_accounts`.
    pub fn with_authorized_accounts(self, accounts: &[&str]) -> Self {
        self.state.borrow_mut().authorized = accounts.iter().map(|a| a.to_string()).collect();
        self
    }

    /// Result of `eth_requestAccounts`.
    pub fn with_requestable_accounts(self, accounts: &[&str]) -> Self {
        self.state.borrow_mut().requestable = accounts.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_block_number(self, block: u64) -> Self {
        self.state.borrow_mut().block_number = block;
        self
    }

    pub fn with_tx_hash(self, hash: &str) -> Self {
        self.state.borrow_mut().tx_hash = hash.to_string();
        self
    }

    /// Answer `method` with `value` verbatim.
    pub fn with_raw_result(self, method: &str, value: Value) -> Self {
        self.state.borrow_mut().raw.insert(method.to_string(), value);
        self
    }

    /// Make the next call to `method` fail with a provider error.
    pub fn fail_next(&self, method: &str, code: i64, message: &str) {
        self.state
            .borrow_mut()
            .failures
            .insert(method.to_string(), (code, message.to_string()));
    }

    /// Queue a receipt answer; an empty queue answers "mined, status 0x1".
    pub fn push_receipt(&self, receipt: Option<TransactionReceipt>) {
        self.state.borrow_mut().receipts.push_back(receipt);
    }

    /// Queue one `eth_getLogs` answer; an empty queue answers `[]`.
    pub fn push_logs(&self, logs: Vec<Log>) {
        self.state.borrow_mut().logs.push_back(logs);
    }

    /// Hold the next `eth_sendTransaction` until the returned sender fires.
    pub fn gate_send(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.state.borrow_mut().send_gate = Some(rx);
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.state.borrow().calls.iter().filter(|c| *c == method).count()
    }

    pub fn sent_transactions(&self) -> Vec<TransactionRequest> {
        self.state.borrow().sent.clone()
    }

    pub fn last_log_filter(&self) -> Option<LogFilter> {
        self.state.borrow().last_filter.clone()
    }

    pub fn receipt(hash: &str, status: &str) -> TransactionReceipt {
        TransactionReceipt {
            transaction_hash: hash.to_string(),
            block_number: Some("0x1".to_string()),
            status: Some(status.to_string()),
        }
    }
}

#[async_trait(?Send)]
impl WalletProvider for MockProvider {
    async fn request(&self, method: &str, params: Value) -> MintResult<Value> {
        let gate = {
            let mut state = self.state.borrow_mut();
            state.calls.push(method.to_string());
            if let Some((code, message)) = state.failures.remove(method) {
                return Err(MintError::from_rpc(code, message));
            }
            if let Some(value) = state.raw.get(method) {
                return Ok(value.clone());
            }
            if method == "eth_sendTransaction" {
                state.send_gate.take()
            } else {
                None
            }
        };

        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let mut state = self.state.borrow_mut();
        match method {
            "eth_accounts" => Ok(json!(state.authorized)),
            "eth_requestAccounts" => Ok(json!(state.requestable)),
            "eth_chainId" => Ok(json!(state.chain_id)),
            "eth_blockNumber" => Ok(json!(to_quantity(state.block_number))),
            "eth_sendTransaction" => {
                let tx: TransactionRequest = serde_json::from_value(params[0].clone())?;
                state.sent.push(tx);
                Ok(json!(state.tx_hash))
            }
            "eth_getTransactionReceipt" => match state.receipts.pop_front() {
                Some(Some(receipt)) => Ok(serde_json::to_value(receipt)?),
                Some(None) => Ok(Value::Null),
                None => {
                    let hash = params[0].as_str().unwrap_or_default();
                    Ok(serde_json::to_value(Self::receipt(hash, "0x1"))?)
                }
            },
            "eth_getLogs" => {
                let filter: LogFilter = serde_json::from_value(params[0].clone())?;
                state.last_filter = Some(filter);
                let logs = state.logs.pop_front().unwrap_or_default();
                Ok(serde_json::to_value(logs)?)
            }
            other => Err(MintError::Rpc {
                code: -32601,
                message: format!("method {} not supported", other),
            }),
        }
    }
}

/// A `NewEpicNFTMinted` log as a node would return it.
pub fn minted_log(from: &str, token_id: u64, block: u64) -> Log {
    let from: Address = from.parse().unwrap();
    let event = NewEpicNFTMinted {
        from,
        tokenId: U256::from(token_id),
    };
    Log {
        address: CONTRACT_ADDRESS.to_string(),
        topics: vec![NftInterface::epic_nft().minted_topic_hex()],
        data: hex::encode_prefixed(event.encode_data()),
        block_number: Some(to_quantity(block)),
        transaction_hash: Some("0x02".to_string()),
    }
}

// ============================================================================
// TEST HOST
// ============================================================================

#[derive(Default)]
struct HostState {
    account: Option<String>,
    minting: bool,
    minting_history: Vec<bool>,
    alerts: Vec<String>,
    tasks: Vec<LocalBoxFuture<'static, ()>>,
    sleep_budget: Option<usize>,
}

/// Records everything the widget shows instead of rendering it.
///
/// Spawned tasks are stored, not run. Sleeps resolve immediately unless a
/// budget is set, after which they never resolve.
#[derive(Clone, Default)]
pub struct TestHost {
    state: Rc<RefCell<HostState>>,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.state.borrow().alerts.clone()
    }

    pub fn minting_history(&self) -> Vec<bool> {
        self.state.borrow().minting_history.clone()
    }

    pub fn spawned_tasks(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    pub fn take_tasks(&self) -> Vec<LocalBoxFuture<'static, ()>> {
        std::mem::take(&mut self.state.borrow_mut().tasks)
    }

    pub fn limit_sleeps(&self, budget: usize) {
        self.state.borrow_mut().sleep_budget = Some(budget);
    }
}

impl WidgetHost for TestHost {
    fn account(&self) -> Option<String> {
        self.state.borrow().account.clone()
    }

    fn set_account(&self, account: String) {
        self.state.borrow_mut().account = Some(account);
    }

    fn is_minting(&self) -> bool {
        self.state.borrow().minting
    }

    fn set_minting(&self, minting: bool) {
        let mut state = self.state.borrow_mut();
        state.minting = minting;
        state.minting_history.push(minting);
    }

    fn alert(&self, message: &str) {
        self.state.borrow_mut().alerts.push(message.to_string());
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.state.borrow_mut().tasks.push(task);
    }

    fn sleep(&self, _millis: u32) -> LocalBoxFuture<'static, ()> {
        let mut state = self.state.borrow_mut();
        match state.sleep_budget.as_mut() {
            Some(0) => futures::future::pending().boxed_local(),
            Some(remaining) => {
                *remaining -= 1;
                futures::future::ready(()).boxed_local()
            }
            None => futures::future::ready(()).boxed_local(),
        }
    }
}

// ============================================================================
// LOG CAPTURE
// ============================================================================

thread_local! {
    static CAPTURED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Records formatted messages per thread, so parallel tests stay isolated.
struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let line = record.args().to_string();
        CAPTURED.with(|lines| lines.borrow_mut().push(line));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Route `log` records into this thread's buffer, clearing it first.
pub fn capture_logs() {
    // another test may have installed it already
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Trace);
    CAPTURED.with(|lines| lines.borrow_mut().clear());
}

pub fn captured_logs() -> Vec<String> {
    CAPTURED.with(|lines| lines.borrow().clone())
}
