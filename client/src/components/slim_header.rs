//! Thin institutional bar above the central header.

use leptos::prelude::*;

#[component]
pub fn SlimHeader() -> impl IntoView {
    view! {
        <div class="slim-header">
            <a class="slim-header__owner" href="https://io.italia.it" target="_blank" rel="noopener">
                "Presidenza del Consiglio dei Ministri"
            </a>
        </div>
    }
}
