//! # Wallet Mint Widget
//!
//! The page logic, independent of Leptos and the browser:
//!
//! - [`MintWidget::check_if_wallet_is_connected`] runs once at mount and picks
//!   up an already-authorized account
//! - [`MintWidget::connect_wallet`] asks the wallet for authorization
//! - [`MintWidget::arm_event_subscriber`] listens for `NewEpicNFTMinted`
//! - [`MintWidget::ask_contract_to_mint`] submits `makeAnEpicNFT()` and waits
//!   for it to be mined
//!
//! Every operation is its own error boundary: failures are logged and turned
//! into the matching UI effect (an alert, or the busy flag resetting), never
//! returned to the page.
//!
//! At most one mint event listener is active per widget. Arming again
//! replaces the previous listener.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::config::MintConfig;
use crate::error::{MintError, MintResult};
use crate::services::contract::{ContractHandle, MintedToken};
use crate::services::events::{watch_mint_events, MintSubscription};
use crate::services::provider::WalletProvider;
use crate::utils::format::{minted_message, wrong_network_message};

pub const MISSING_WALLET_ALERT: &str = "Get MetaMask!";

/// What the widget needs from the page it is rendered in.
pub trait WidgetHost: Clone + 'static {
    fn account(&self) -> Option<String>;
    fn set_account(&self, account: String);

    fn is_minting(&self) -> bool;
    fn set_minting(&self, minting: bool);

    /// Blocking user notification.
    fn alert(&self, message: &str);

    /// Run a task on the page's event loop.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()>;
}

#[derive(Clone)]
pub struct MintWidget<P, H> {
    config: Rc<MintConfig>,
    provider: Option<P>,
    host: H,
    listener: Rc<RefCell<Option<MintSubscription>>>,
}

impl<P: WalletProvider, H: WidgetHost> MintWidget<P, H> {
    pub fn new(config: MintConfig, provider: Option<P>, host: H) -> Self {
        Self {
            config: Rc::new(config),
            provider,
            host,
            listener: Rc::new(RefCell::new(None)),
        }
    }

    pub fn config(&self) -> &MintConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn has_wallet(&self) -> bool {
        self.provider.is_some()
    }

    pub fn has_active_listener(&self) -> bool {
        self.listener
            .borrow()
            .as_ref()
            .map(MintSubscription::is_active)
            .unwrap_or(false)
    }

    /// Pick up an account the user authorized on a previous visit.
    ///
    /// Silent when no wallet is installed.
    pub async fn check_if_wallet_is_connected(&self) {
        let Some(provider) = &self.provider else {
            log::info!("{}, make sure you have MetaMask!", MintError::ProviderAbsent);
            return;
        };
        log::info!("We have the ethereum object");

        match provider.get_accounts().await {
            Ok(accounts) => match accounts.into_iter().next() {
                Some(account) => {
                    log::info!("Found an authorized account: {}", account);
                    self.host.set_account(account.clone());
                    self.arm_event_subscriber(&account).await;
                }
                None => log::info!("No authorized account found"),
            },
            Err(e) => log::error!("Failed to read authorized accounts: {}", e),
        }
    }

    /// Connect button handler.
    pub async fn connect_wallet(&self) {
        let Some(provider) = &self.provider else {
            log::warn!("{}", MintError::ProviderAbsent);
            self.host.alert(MISSING_WALLET_ALERT);
            return;
        };

        if let Err(e) = self.try_connect(provider).await {
            if e.is_user_rejection() {
                log::warn!("Wallet connection declined: {}", e);
            } else {
                log::error!("Failed to connect wallet: {}", e);
            }
        }
    }

    async fn try_connect(&self, provider: &P) -> MintResult<()> {
        let chain_id = provider.get_chain_id().await?;
        log::info!("Connected to chain {}", chain_id);

        // A wrong network is reported but does not stop the connection.
        if !self.config.is_expected_chain(&chain_id) {
            let mismatch = MintError::WrongNetwork {
                expected: self.config.expected_chain_id.clone(),
                actual: chain_id,
            };
            log::warn!("{}", mismatch);
            self.host.alert(&wrong_network_message(&self.config.network_name));
        }

        let account = provider
            .request_accounts()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| MintError::Decode("eth_requestAccounts returned no accounts".to_string()))?;

        log::info!("Connected {}", account);
        self.host.set_account(account.clone());
        self.arm_event_subscriber(&account).await;
        Ok(())
    }

    /// Listen for mints and alert the user with the marketplace link.
    pub async fn arm_event_subscriber(&self, account: &str) {
        let host = self.host.clone();
        let config = self.config.clone();
        let notify = move |event: MintedToken| {
            host.alert(&minted_message(&config.asset_url(event.token_id)));
        };

        match self.subscribe_to_mint_event(account, notify).await {
            Ok(subscription) => {
                let previous = self.listener.borrow_mut().replace(subscription);
                if let Some(previous) = previous {
                    log::debug!("Replacing previous mint event listener");
                    previous.unsubscribe();
                }
                log::info!("Setup event listener!");
            }
            Err(e) => log::error!("{}", e),
        }
    }

    /// Register `handler` for `NewEpicNFTMinted` events from now on.
    ///
    /// The listener runs until the returned handle is unsubscribed or dropped.
    pub async fn subscribe_to_mint_event<F>(
        &self,
        account: &str,
        handler: F,
    ) -> MintResult<MintSubscription>
    where
        F: Fn(MintedToken) + 'static,
    {
        let provider = self.provider.clone().ok_or_else(|| {
            MintError::ListenerRegistration("Ethereum object doesn't exist!".to_string())
        })?;

        let contract = ContractHandle::connect(provider, &self.config, account);
        let start_block = contract
            .current_block()
            .await
            .map_err(|e| MintError::ListenerRegistration(e.to_string()))?;

        let (subscription, active) = MintSubscription::new();
        let host = self.host.clone();
        let task = watch_mint_events(
            contract,
            start_block,
            active,
            self.config.poll_interval_ms,
            move |ms| host.sleep(ms),
            handler,
        );
        self.host.spawn(Box::pin(task));

        Ok(subscription)
    }

    /// Stop the active mint event listener, if any.
    pub fn unsubscribe(&self) {
        if let Some(subscription) = self.listener.borrow_mut().take() {
            subscription.unsubscribe();
        }
    }

    /// Mint button handler.
    ///
    /// Returns the logged explorer link of the mined transaction, `None` when
    /// the mint did not go through. The minting flag is cleared on every path.
    pub async fn ask_contract_to_mint(&self) -> Option<String> {
        if self.host.is_minting() {
            log::warn!("A mint is already in flight");
            return None;
        }
        let Some(provider) = self.provider.clone() else {
            log::error!("{}", MintError::ProviderAbsent);
            return None;
        };
        let Some(account) = self.host.account() else {
            log::warn!("Connect a wallet before minting");
            return None;
        };

        self.host.set_minting(true);
        let result = self.try_mint(provider, account).await;
        self.host.set_minting(false);

        match result {
            Ok(url) => {
                log::info!("Mined, see transaction: {}", url);
                Some(url)
            }
            Err(e) if e.is_user_rejection() => {
                log::warn!("Mint declined: {}", e);
                None
            }
            Err(e) => {
                log::error!("Mint failed: {}", e);
                None
            }
        }
    }

    async fn try_mint(&self, provider: P, account: String) -> MintResult<String> {
        let contract = ContractHandle::connect(provider, &self.config, account);

        log::info!("Going to pop wallet now to pay gas...");
        let pending = contract.make_an_epic_nft().await?;

        log::info!("Mining...please wait. ({})", pending.hash);
        let host = self.host.clone();
        let receipt = contract
            .wait(&pending, self.config.poll_interval_ms, move |ms| host.sleep(ms))
            .await?;

        Ok(self.config.transaction_url(&receipt.transaction_hash))
    }
}
