//! Central header with the portal title and the signed-in user's menu.

#[cfg(test)]
#[path = "central_header_test.rs"]
mod central_header_test;

use leptos::prelude::*;

use crate::app::PROFILE_PATH;
use crate::net::types::UserRole;
use crate::state::portal::PortalHandles;
use crate::state::ui::LogoutModalState;

/// Badge text for a raw role; `None` hides the badge.
fn role_badge(role: &str) -> Option<&'static str> {
    UserRole::parse(role).map(UserRole::badge_label)
}

/// The user block renders once a name (even a blank one) is known.
fn show_user_block(user_name: &str) -> bool {
    !user_name.is_empty()
}

/// The user icon requires a non-blank name.
fn show_user_icon(user_name: &str) -> bool {
    !user_name.trim().is_empty()
}

#[component]
pub fn CentralHeader(#[prop(into)] user_name: Signal<String>, #[prop(into)] user_role: Signal<String>) -> impl IntoView {
    view! {
        <header class="central-header">
            <img class="central-header__logo" src="/assets/img/io-logo-white.svg" alt="Io Logo" width="64" height="52"/>
            <div class="central-header__title">
                <h4>"IO Onboarding"</h4>
                <p>"Public administration onboarding portal"</p>
            </div>
            <Show when=move || show_user_block(&user_name.get())>
                <UserMenu user_name=user_name user_role=user_role/>
            </Show>
        </header>
    }
}

/// User name, role badge, and dropdown with profile and logout entries.
#[component]
fn UserMenu(user_name: Signal<String>, user_role: Signal<String>) -> impl IntoView {
    let handles = expect_context::<PortalHandles>();
    let open = RwSignal::new(false);

    let on_logout = move |_| {
        open.set(false);
        handles.actions.show_logout_modal.run(LogoutModalState::requested());
    };

    view! {
        <nav class="user-menu">
            <button class="user-menu__toggle" on:click=move |_| open.update(|v| *v = !*v)>
                <Show when=move || show_user_icon(&user_name.get())>
                    <span class="icon icon-white user-menu__icon" aria-hidden="true"></span>
                </Show>
                <span class="user-menu__name">{move || user_name.get()}</span>
                {move || {
                    role_badge(&user_role.get()).map(|label| view! { <span class="badge user-menu__role">{label}</span> })
                }}
            </button>
            <Show when=move || open.get()>
                <ul class="user-menu__dropdown">
                    <li>
                        <a class="user-menu__item" href=PROFILE_PATH on:click=move |_| open.set(false)>
                            "Profile"
                        </a>
                    </li>
                    <li><button class="user-menu__item" on:click=on_logout>"Logout"</button></li>
                </ul>
            </Show>
        </nav>
    }
}
