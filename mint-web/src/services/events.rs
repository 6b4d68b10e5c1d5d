//! `NewEpicNFTMinted` event subscription.
//!
//! Wallet providers expose events through log polling, so a subscription is
//! a background task that polls [`ContractHandle::poll_mint_events`] every
//! interval. The task stops at its next tick once the returned
//! [`MintSubscription`] is unsubscribed or dropped.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use crate::services::contract::{ContractHandle, MintedToken};
use crate::services::provider::WalletProvider;

/// Cancellable handle for one registered mint listener.
#[derive(Debug)]
pub struct MintSubscription {
    active: Rc<Cell<bool>>,
}

impl MintSubscription {
    pub(crate) fn new() -> (Self, Rc<Cell<bool>>) {
        let active = Rc::new(Cell::new(true));
        (
            Self {
                active: active.clone(),
            },
            active,
        )
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn unsubscribe(&self) {
        if self.active.replace(false) {
            log::debug!("Mint event listener removed");
        }
    }
}

impl Drop for MintSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// Poll loop delivering every decoded event to `handler` while `active` holds.
///
/// Poll errors are logged and retried on the next tick.
pub async fn watch_mint_events<P, H, S, F>(
    contract: ContractHandle<P>,
    mut next_block: u64,
    active: Rc<Cell<bool>>,
    interval_ms: u32,
    sleep: S,
    handler: H,
) where
    P: WalletProvider,
    H: Fn(MintedToken),
    S: Fn(u32) -> F,
    F: Future<Output = ()>,
{
    log::debug!(
        "Watching {} for NewEpicNFTMinted from block {}",
        contract.address(),
        next_block
    );

    while active.get() {
        sleep(interval_ms).await;
        if !active.get() {
            break;
        }

        match contract.poll_mint_events(next_block).await {
            Ok((events, next)) => {
                for event in events {
                    if !active.get() {
                        break;
                    }
                    log::info!("{} minted token #{}", event.from, event.token_id);
                    handler(event);
                }
                next_block = next;
            }
            Err(e) => log::warn!("Polling NewEpicNFTMinted failed: {}", e),
        }
    }

    log::debug!("Mint event watcher for {} stopped", contract.address());
}
