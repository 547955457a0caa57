//! Landing route of the SPID flow.
//!
//! The backend sets the session cookie and redirects here; once the container
//! has picked the token up the user moves on to the dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{DASHBOARD_PATH, HOME_PATH};
use crate::state::portal::PortalHandles;

#[component]
pub fn SpidLoginPage() -> impl IntoView {
    let handles = expect_context::<PortalHandles>();
    let navigate = use_navigate();

    Effect::new(move || {
        if !handles.token.get().is_empty() {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    });

    view! {
        <div class="spid-login-page">
            <Show
                when=move || handles.token.get().is_empty()
                fallback=|| view! { <p>"Signing in..."</p> }
            >
                <p>"The sign-in did not complete."</p>
                <a class="btn btn-primary" href=HOME_PATH>"Back to home"</a>
            </Show>
        </div>
    }
}
