//! Dismissible alert banner driven by the portal alert state.

use leptos::prelude::*;

use crate::state::portal::PortalHandles;

#[component]
pub fn AppAlert() -> impl IntoView {
    let handles = expect_context::<PortalHandles>();
    let alert = handles.alert;
    let dismiss = handles.actions.dismiss_alert;

    view! {
        <Show when=move || alert.get().visible>
            <div class=move || alert.get().color.css_class() role="alert">
                <span class="app-alert__text">{move || alert.get().text}</span>
                <button class="btn app-alert__close" title="Close" on:click=move |_| dismiss.run(())>
                    "×"
                </button>
            </div>
        </Show>
    }
}
