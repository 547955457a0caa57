//! Dashboard card describing the user's organization and its onboarding stage.
//!
//! All visual branches come from [`card_layout`]; this module only wires them
//! and the "send documents again" action.

use leptos::prelude::*;

use crate::app::sign_up_path;
use crate::net::types::Organization;
#[cfg(feature = "hydrate")]
use crate::net::outcome::{classify_status, send_documents_feedback};
use crate::state::organization::{card_layout, detail_rows, organization_status};
use crate::state::portal::PortalHandles;
use crate::util::env::RuntimeEnv;
use crate::util::liveness::Liveness;

#[component]
pub fn OrganizationCard(#[prop(into)] organizations: Signal<Vec<Organization>>) -> impl IntoView {
    let status = Memo::new(move |_| organizations.with(|orgs| organization_status(orgs)));
    let layout = Memo::new(move |_| card_layout(status.get()));
    let first = Memo::new(move |_| organizations.with(|orgs| orgs.first().cloned()));

    view! {
        <div class="organization-card card-wrapper card-space">
            <div class="card card-bg card-big">
                <div class="card-body row">
                    <Show when=move || layout.get().show_image>
                        <div class="col-2">
                            <OrganizationImage/>
                        </div>
                    </Show>
                    {move || match first.get() {
                        Some(organization) if layout.get().show_details => {
                            view! {
                                <OrganizationInfo organization=organization show_resend=layout.get().show_resend/>
                            }
                                .into_any()
                        }
                        _ => view! { <PreDraftInfo/> }.into_any(),
                    }}
                    <div class="col">
                        {move || {
                            layout
                                .get()
                                .icon
                                .map(|icon| view! { <img src=icon.asset() alt="organization_card_icon" height="100"/> })
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Placeholder until the backend serves organization images.
#[component]
fn OrganizationImage() -> impl IntoView {
    view! {
        <svg height="120" width="120">
            <circle cx="60" cy="60" r="60" fill="#CFD9E4"></circle>
        </svg>
    }
}

#[component]
fn PreDraftInfo() -> impl IntoView {
    view! {
        <div class="col-10">
            <p>"You have not registered an organization yet."</p>
            <a class="btn btn-primary mt-3" href=sign_up_path(1)>
                "Go to registration"
            </a>
        </div>
    }
}

#[component]
fn OrganizationInfo(organization: Organization, show_resend: bool) -> impl IntoView {
    let handles = expect_context::<PortalHandles>();
    let api_base = expect_context::<RuntimeEnv>().api_base_url();
    let live = Liveness::scoped();
    let ipa_code = organization.ipa_code.clone();

    let on_send_documents = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let api_base = api_base.clone();
            let ipa_code = ipa_code.clone();
            let live = live.clone();
            let token = handles.token.get_untracked();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::send_documents(&api_base, &token, &ipa_code).await;
                live.run_if_live(result, |result| {
                    send_documents_feedback(&result, classify_status).dispatch(
                        |alert| handles.actions.show_alert.run(alert),
                        |prompt| handles.actions.show_logout_modal.run(prompt),
                    );
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api_base, &ipa_code, &live, handles);
        }
    };

    let rows = detail_rows(&organization)
        .into_iter()
        .map(|(label, value)| {
            view! {
                <p>
                    <b>{label}": "</b>
                    {value}
                </p>
            }
        })
        .collect_view();

    view! {
        <div class="col-8">
            <h3 class="mb-4">{organization.name}</h3>
            <div>{rows}</div>
            {show_resend
                .then(|| {
                    view! {
                        <button class="btn btn-primary" on:click=on_send_documents>
                            "Send documents again"
                        </button>
                    }
                })}
        </div>
    }
}
