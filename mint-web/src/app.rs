//! Mint Page App - Leptos Frontend

use leptos::prelude::*;

use crate::config::MintConfig;
use crate::pages::MintPage;
use crate::services::provider::BrowserProvider;
use crate::state::mint::{provide_mint_context, MintContext};
use crate::widget::MintWidget;

/// The widget as wired in the browser.
pub type PageWidget = MintWidget<BrowserProvider, MintContext>;

#[component]
pub fn App() -> impl IntoView {
    let ctx = provide_mint_context();

    let provider = BrowserProvider::detect();
    if provider.is_none() {
        log::warn!("No injected wallet found (window.ethereum is missing)");
    }
    let widget: PageWidget = MintWidget::new(MintConfig::load(), provider, ctx);
    provide_context(StoredValue::new_local(widget.clone()));

    // Connection check, once per mount
    leptos::task::spawn_local(async move {
        widget.check_if_wallet_is_connected().await;
    });

    // Backup for main() in case the loading screen was not in the DOM yet
    Effect::new(move || {
        crate::hide_loading_screen();
    });

    view! { <MintPage/> }
}

pub fn use_mint_widget() -> StoredValue<PageWidget, LocalStorage> {
    expect_context::<StoredValue<PageWidget, LocalStorage>>()
}
