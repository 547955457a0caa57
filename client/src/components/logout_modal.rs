//! Logout confirmation modal.
//!
//! Opened by the user menu or by a backend answer that rejects the session.
//! Confirming expires the session cookie and leaves for the home page.

#[cfg(test)]
#[path = "logout_modal_test.rs"]
mod logout_modal_test;

use leptos::prelude::*;

use crate::state::portal::PortalHandles;
#[cfg(feature = "hydrate")]
use crate::util::cookie::{SESSION_TOKEN_COOKIE, clear_cookie};
use crate::util::messages;

fn modal_text(from_expired_token: bool) -> String {
    if from_expired_token {
        messages::text("logoutModal.expiredToken")
    } else {
        messages::text("logoutModal.confirm")
    }
}

#[component]
pub fn LogoutModal() -> impl IntoView {
    let handles = expect_context::<PortalHandles>();
    let modal = handles.logout_modal;
    let hide = handles.actions.hide_logout_modal;

    let on_confirm = move |_| {
        hide.run(());
        #[cfg(feature = "hydrate")]
        {
            clear_cookie(SESSION_TOKEN_COOKIE);
            if let Some(window) = web_sys::window() {
                if window.location().set_href(crate::app::HOME_PATH).is_err() {
                    log::warn!("could not navigate to {}", crate::app::HOME_PATH);
                }
            }
        }
    };

    view! {
        <Show when=move || modal.get().visible>
            <div class="dialog-backdrop">
                <div class="dialog dialog--logout" role="dialog">
                    <h2>"Logout"</h2>
                    <p>{move || modal_text(modal.get().from_expired_token)}</p>
                    <div class="dialog__actions">
                        <Show when=move || !modal.get().from_expired_token>
                            <button class="btn" on:click=move |_| hide.run(())>"Cancel"</button>
                        </Show>
                        <button class="btn btn--primary" on:click=on_confirm>"Logout"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
