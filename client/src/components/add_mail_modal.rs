//! Modal asking the user for a work email address.
//!
//! Opened automatically when the loaded profile has no work email, or from
//! the profile page. Saves through `PUT /profile` and merges the new address
//! into the container's profile.

#[cfg(test)]
#[path = "add_mail_modal_test.rs"]
mod add_mail_modal_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::outcome::{Feedback, api_error_feedback, classify_status};
use crate::state::portal::PortalHandles;
#[cfg(feature = "hydrate")]
use crate::state::ui::AlertState;
use crate::util::env::RuntimeEnv;
use crate::util::liveness::Liveness;
use crate::util::messages;

/// Prefill: the current work email, else the identity-provider email.
fn initial_mail(work_mail: Option<&str>, spid_mail: &str) -> String {
    match work_mail {
        Some(mail) if !mail.is_empty() => mail.to_owned(),
        _ => spid_mail.to_owned(),
    }
}

/// Trim and check the shape `local@domain.tld`.
///
/// # Errors
///
/// Returns the user-facing message for an implausible address.
fn validate_work_email(raw: &str) -> Result<String, String> {
    let mail = raw.trim();
    let valid = match mail.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !mail.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(mail.to_owned())
    } else {
        Err(messages::text("common.errors.invalidEmail"))
    }
}

#[component]
pub fn AddMailModal(
    #[prop(into)] visible: Signal<bool>,
    on_toggle: Callback<()>,
    #[prop(into)] spid_mail: Signal<String>,
    #[prop(into)] work_mail: Signal<Option<String>>,
    on_work_mail_set: Callback<String>,
) -> impl IntoView {
    let handles = expect_context::<PortalHandles>();
    let api_base = expect_context::<RuntimeEnv>().api_base_url();
    let input = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let live = Liveness::scoped();

    // Reset the form each time the modal opens.
    Effect::new(move || {
        if visible.get() {
            input.set(initial_mail(
                work_mail.get_untracked().as_deref(),
                &spid_mail.get_untracked(),
            ));
            error.set(None);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let mail = match validate_work_email(&input.get_untracked()) {
            Ok(mail) => mail,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api_base = api_base.clone();
            let live = live.clone();
            let token = handles.token.get_untracked();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::update_work_email(&api_base, &token, &mail).await;
                live.run_if_live(result, |result| {
                    busy.set(false);
                    match result {
                        Ok(()) => {
                            on_work_mail_set.run(mail);
                            on_toggle.run(());
                            handles
                                .actions
                                .show_alert
                                .run(AlertState::info(messages::text("common.alerts.workEmailSaved")));
                        }
                        Err(e) => match api_error_feedback(&e, classify_status) {
                            Feedback::Alert(alert) => error.set(Some(alert.text)),
                            logout @ Feedback::Logout(_) => {
                                on_toggle.run(());
                                logout.dispatch(
                                    |alert| handles.actions.show_alert.run(alert),
                                    |prompt| handles.actions.show_logout_modal.run(prompt),
                                );
                            }
                        },
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api_base, &live, handles, mail, on_work_mail_set);
            busy.set(false);
        }
    };

    view! {
        <Show when=move || visible.get()>
            <div class="dialog-backdrop">
                <div class="dialog dialog--add-mail" role="dialog">
                    <h2>"Work email"</h2>
                    <p>"Enter the email address you use at your organization."</p>
                    <form class="dialog__form" on:submit=on_submit.clone()>
                        <input
                            class="dialog__input"
                            type="email"
                            placeholder="name@organization.it"
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                        />
                        <Show when=move || error.get().is_some()>
                            <p class="dialog__danger">{move || error.get().unwrap_or_default()}</p>
                        </Show>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| on_toggle.run(())>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                "Save"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
