//! User profile page.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::types::{UserProfile, UserRole};
use crate::state::portal::PortalHandles;

fn profile_rows(profile: &UserProfile) -> Vec<(&'static str, String)> {
    let role = UserRole::parse(&profile.role).map_or_else(|| profile.role.clone(), |r| r.badge_label().to_owned());
    let work_email = match profile.work_email.as_deref() {
        Some(mail) if !mail.is_empty() => mail.to_owned(),
        _ => "—".to_owned(),
    };
    vec![
        ("Name", profile.display_name().trim().to_owned()),
        ("Fiscal code", profile.fiscal_code.clone()),
        ("Role", role),
        ("SPID email", profile.email.clone()),
        ("Work email", work_email),
    ]
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let handles = expect_context::<PortalHandles>();
    let profile = handles.profile;
    let toggle_add_mail_modal = handles.actions.toggle_add_mail_modal;

    view! {
        <div class="user-profile">
            <h2>"Profile"</h2>
            {move || {
                profile_rows(&profile.get())
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="user-profile__row">
                                <span class="user-profile__label">{label}</span>
                                <span class="user-profile__value">{value}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <button class="btn btn-primary" on:click=move |_| toggle_add_mail_modal.run(())>
                {move || if profile.get().has_work_email() { "Change work email" } else { "Add work email" }}
            </button>
        </div>
    }
}
