//! Organization registration wizard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three steps addressed by `/sign-up/{step}`: organization and legal
//! representative form, review and submit, confirmation. The draft lives in
//! page-local state, so reloading mid-flow starts over at step 1.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::app::{DASHBOARD_PATH, sign_up_path};
#[cfg(feature = "hydrate")]
use crate::net::outcome::{api_error_feedback, classify_status};
use crate::net::types::{LegalRepresentative, OrganizationRegistrationParams};
use crate::state::portal::PortalHandles;
use crate::util::env::RuntimeEnv;
use crate::util::liveness::Liveness;

const FIRST_STEP: u8 = 1;
const LAST_STEP: u8 = 3;
const FISCAL_CODE_LEN: usize = 16;

/// Step number from the route parameter. Anything outside 1..=3 falls back to 1.
fn parse_sign_up_step(raw: Option<&str>) -> u8 {
    raw.and_then(|s| s.trim().parse::<u8>().ok())
        .filter(|step| (FIRST_STEP..=LAST_STEP).contains(step))
        .unwrap_or(FIRST_STEP)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct RegistrationDraft {
    ipa_code: String,
    given_name: String,
    family_name: String,
    fiscal_code: String,
    phone_number: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DraftKey {
    IpaCode,
    GivenName,
    FamilyName,
    FiscalCode,
    PhoneNumber,
}

impl DraftKey {
    const ALL: [Self; 5] = [Self::IpaCode, Self::GivenName, Self::FamilyName, Self::FiscalCode, Self::PhoneNumber];

    fn label(self) -> &'static str {
        match self {
            Self::IpaCode => "IPA code",
            Self::GivenName => "Legal representative given name",
            Self::FamilyName => "Legal representative family name",
            Self::FiscalCode => "Legal representative fiscal code",
            Self::PhoneNumber => "Legal representative phone number",
        }
    }

    fn value(self, draft: &RegistrationDraft) -> &str {
        match self {
            Self::IpaCode => &draft.ipa_code,
            Self::GivenName => &draft.given_name,
            Self::FamilyName => &draft.family_name,
            Self::FiscalCode => &draft.fiscal_code,
            Self::PhoneNumber => &draft.phone_number,
        }
    }

    fn slot(self, draft: &mut RegistrationDraft) -> &mut String {
        match self {
            Self::IpaCode => &mut draft.ipa_code,
            Self::GivenName => &mut draft.given_name,
            Self::FamilyName => &mut draft.family_name,
            Self::FiscalCode => &mut draft.fiscal_code,
            Self::PhoneNumber => &mut draft.phone_number,
        }
    }
}

impl RegistrationDraft {
    fn to_params(&self) -> OrganizationRegistrationParams {
        OrganizationRegistrationParams {
            ipa_code: self.ipa_code.trim().to_owned(),
            legal_representative: LegalRepresentative {
                given_name: self.given_name.trim().to_owned(),
                family_name: self.family_name.trim().to_owned(),
                fiscal_code: self.fiscal_code.trim().to_uppercase(),
                phone_number: self.phone_number.trim().to_owned(),
            },
        }
    }
}

fn is_fiscal_code(raw: &str) -> bool {
    let raw = raw.trim();
    raw.len() == FISCAL_CODE_LEN && raw.chars().all(|c| c.is_ascii_alphanumeric())
}

fn is_phone_number(raw: &str) -> bool {
    let raw = raw.trim();
    let digits = raw.chars().filter(char::is_ascii_digit).count();
    digits >= 6 && raw.chars().all(|c| c.is_ascii_digit() || c == '+' || c == ' ')
}

fn validate_draft(draft: &RegistrationDraft) -> Result<(), &'static str> {
    if draft.ipa_code.trim().is_empty() {
        return Err("Enter the IPA code of the organization.");
    }
    if draft.given_name.trim().is_empty() || draft.family_name.trim().is_empty() {
        return Err("Enter the legal representative's name.");
    }
    if !is_fiscal_code(&draft.fiscal_code) {
        return Err("The fiscal code must be 16 letters or digits.");
    }
    if !is_phone_number(&draft.phone_number) {
        return Err("Enter a valid phone number.");
    }
    Ok(())
}

#[component]
pub fn RegistrationPage() -> impl IntoView {
    let handles = expect_context::<PortalHandles>();
    let api_base = expect_context::<RuntimeEnv>().api_base_url();
    let params = use_params_map();
    let navigate = use_navigate();
    let live = Liveness::scoped();

    let step = Memo::new(move |_| params.with(|p| parse_sign_up_step(p.get("step").as_deref())));
    let draft = RwSignal::new(RegistrationDraft::default());
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);
    let goto = RwSignal::new(None::<u8>);

    Effect::new(move || {
        if let Some(next) = goto.get() {
            goto.set(None);
            navigate(&sign_up_path(next), NavigateOptions::default());
        }
    });

    // The review step needs a filled draft; a direct hit on /sign-up/2 starts over.
    Effect::new(move || {
        if step.get() == 2 && draft.with_untracked(|d| validate_draft(d).is_err()) {
            goto.set(Some(FIRST_STEP));
        }
    });

    let on_next = move |_| match draft.with(validate_draft) {
        Ok(()) => {
            error.set(None);
            goto.set(Some(2));
        }
        Err(message) => error.set(Some(message)),
    };

    let on_submit = move |_| {
        if busy.get_untracked() {
            return;
        }
        let params = draft.with_untracked(RegistrationDraft::to_params);
        #[cfg(feature = "hydrate")]
        {
            let token = handles.token.get_untracked();
            let api_base = api_base.clone();
            let live = live.clone();
            busy.set(true);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::create_organization(&api_base, &token, &params).await;
                live.run_if_live(result, |result| {
                    busy.set(false);
                    match result {
                        Ok(organization) => {
                            log::info!("registered organization {}", organization.ipa_code);
                            goto.set(Some(LAST_STEP));
                        }
                        Err(e) => api_error_feedback(&e, classify_status).dispatch(
                            |alert| handles.actions.show_alert.run(alert),
                            |prompt| handles.actions.show_logout_modal.run(prompt),
                        ),
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (params, &api_base, &live);
        }
    };

    let delegate_fiscal_code = move || handles.profile.with(|p| p.fiscal_code.clone());

    view! {
        <div class="registration-page">
            <h2>"Register your organization"</h2>
            <p class="registration-page__step">{move || format!("Step {} of {LAST_STEP}", step.get())}</p>
            {move || match step.get() {
                1 => view! {
                    <div class="registration-form">
                        {DraftKey::ALL.into_iter().map(|key| view! { <DraftField field=key draft=draft/> }).collect_view()}
                        <Show when=move || error.get().is_some()>
                            <p class="registration-form__error">{move || error.get().unwrap_or_default()}</p>
                        </Show>
                        <button class="btn btn-primary" on:click=on_next>"Next"</button>
                    </div>
                }
                .into_any(),
                2 => view! {
                    <div class="registration-review">
                        {move || {
                            let params = draft.with(RegistrationDraft::to_params);
                            let rep = params.legal_representative;
                            view! {
                                <dl>
                                    <dt>"IPA code"</dt><dd>{params.ipa_code}</dd>
                                    <dt>"Legal representative"</dt><dd>{format!("{} {}", rep.given_name, rep.family_name)}</dd>
                                    <dt>"Fiscal code"</dt><dd>{rep.fiscal_code}</dd>
                                    <dt>"Phone number"</dt><dd>{rep.phone_number}</dd>
                                    <dt>"Delegate fiscal code"</dt><dd>{delegate_fiscal_code()}</dd>
                                </dl>
                            }
                        }}
                        <button class="btn btn-outline-primary" on:click=move |_| goto.set(Some(FIRST_STEP))>"Back"</button>
                        <button class="btn btn-primary" disabled=move || busy.get() on:click=on_submit.clone()>
                            {move || if busy.get() { "Sending..." } else { "Register" }}
                        </button>
                    </div>
                }
                .into_any(),
                _ => view! {
                    <div class="registration-done">
                        <p>"Registration request sent. The legal representative will receive the documents to sign at the organization's PEC address."</p>
                        <a class="btn btn-primary" href=DASHBOARD_PATH>"Go to dashboard"</a>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

/// Text input bound to one field of the draft.
#[component]
fn DraftField(field: DraftKey, draft: RwSignal<RegistrationDraft>) -> impl IntoView {
    view! {
        <label class="registration-form__field">
            <span>{field.label()}</span>
            <input
                type="text"
                class="form-control"
                prop:value=move || draft.with(|d| field.value(d).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| *field.slot(d) = value);
                }
            />
        </label>
    }
}
