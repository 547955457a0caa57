//! Full-page overlay shown while the profile is loading.

use leptos::prelude::*;

#[component]
pub fn LoadingPage() -> impl IntoView {
    view! {
        <div class="loading-page" role="status" aria-live="polite">
            <div class="loading-page__spinner" aria-hidden="true"></div>
            <p>"Loading..."</p>
        </div>
    }
}
