//! NFT mint page: connect an injected Ethereum wallet, mint, and get notified
//! when the contract reports the new token.
//!
//! The browser-independent logic lives in [`widget`]; [`app`] and [`pages`]
//! wire it to Leptos and `window.ethereum`.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;
pub mod widget;

#[cfg(test)]
mod testing;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("NFT mint page starting...");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static `#leptos-loading` element from index.html.
pub(crate) fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available to hide the loading screen");
        return;
    };

    let Some(loading_element) = document.get_element_by_id("leptos-loading") else {
        log::debug!("Loading element not found");
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("Failed to add 'hidden' class: {:?}", e);
        }
        if let Err(e) = html_element.style().set_property("display", "none") {
            log::warn!("Failed to hide loading screen: {:?}", e);
        }
    }
}
