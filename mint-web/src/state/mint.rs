//! Mint page state management

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::widget::WidgetHost;

/// Page-wide reactive state the widget writes into.
#[derive(Clone, Copy)]
pub struct MintContext {
    /// Connected wallet address; `None` shows the connect button.
    pub account: RwSignal<Option<String>>,
    /// A mint transaction is awaiting confirmation.
    pub minting: RwSignal<bool>,
}

impl MintContext {
    pub fn new() -> Self {
        Self {
            account: RwSignal::new(None),
            minting: RwSignal::new(false),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.account.with(|account| account.is_some())
    }
}

impl Default for MintContext {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetHost for MintContext {
    fn account(&self) -> Option<String> {
        self.account.get_untracked()
    }

    fn set_account(&self, account: String) {
        self.account.set(Some(account));
    }

    fn is_minting(&self) -> bool {
        self.minting.get_untracked()
    }

    fn set_minting(&self, minting: bool) {
        self.minting.set(minting);
    }

    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    log::error!("Failed to show alert: {:?}", e);
                }
            }
            None => log::warn!("No window to alert: {}", message),
        }
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::task::spawn_local(task);
    }

    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()> {
        TimeoutFuture::new(millis).boxed_local()
    }
}

pub fn provide_mint_context() -> MintContext {
    let context = MintContext::new();
    provide_context(context);
    context
}

pub fn use_mint_context() -> MintContext {
    expect_context::<MintContext>()
}
