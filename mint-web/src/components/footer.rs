//! Footer with the author's social link

use leptos::prelude::*;

#[component]
pub fn Footer(handle: String, url: String) -> impl IntoView {
    view! {
        <footer class="footer">
            <a class="footer-link" href=url target="_blank" rel="noreferrer noopener nofollow">
                <span class="social-logo">"𝕏"</span>
                <span>{format!("@{}", handle)}</span>
            </a>
        </footer>
    }
}
