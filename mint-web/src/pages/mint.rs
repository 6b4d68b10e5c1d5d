//! Mint Page - connect the wallet, mint, link out to the collection

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use shared::utils::truncate_address;

use crate::app::use_mint_widget;
use crate::components::Footer;
use crate::state::mint::use_mint_context;

#[component]
pub fn MintPage() -> impl IntoView {
    let ctx = use_mint_context();
    let widget = use_mint_widget();
    let config = widget.with_value(|w| w.config().clone());

    let on_connect = move |_: MouseEvent| {
        let widget = widget.get_value();
        leptos::task::spawn_local(async move {
            widget.connect_wallet().await;
        });
    };

    let on_mint = move |_: MouseEvent| {
        let widget = widget.get_value();
        leptos::task::spawn_local(async move {
            widget.ask_contract_to_mint().await;
        });
    };

    let minting = move || ctx.minting.get();

    view! {
        <div class="app-container">
            <header class="page-header">
                <h1 class="header gradient-text">"My NFT Collection"</h1>
            </header>

            <main class="content">
                <p class="sub-text">"Each unique. Each beautiful. Discover your NFT today."</p>

                <div class="cta-grid">
                    <a
                        class="btn"
                        href=config.marketplace_url.clone()
                        target="_blank"
                        rel="noreferrer noopener nofollow"
                    >
                        "🌊 View Collection on OpenSea"
                    </a>

                    <Show
                        when=move || ctx.is_connected()
                        fallback=move || view! {
                            <button class="btn" on:click=on_connect>"Connect to Wallet"</button>
                        }
                    >
                        <button
                            class=move || if minting() { "btn btn-busy" } else { "btn" }
                            disabled=minting
                            on:click=on_mint
                        >
                            <div class="btn-inner">
                                <Show when=minting>
                                    <div id="loader"></div>
                                </Show>
                                <span>"Mint NFT"</span>
                            </div>
                        </button>
                    </Show>
                </div>

                {move || ctx.account.get().map(|account| view! {
                    <p class="account-label">"Connected: " {truncate_address(&account)}</p>
                })}
            </main>

            <Footer handle=config.social_handle.clone() url=config.social_url()/>
        </div>
    }
}
