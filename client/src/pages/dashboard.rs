//! Dashboard page showing the organization card.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Loads the user's organizations once a token is
//! available and hands them to the card.

use leptos::prelude::*;

use crate::components::organization_card::OrganizationCard;
#[cfg(feature = "hydrate")]
use crate::net::outcome::{api_error_feedback, classify_status};
use crate::net::types::Organization;
use crate::state::portal::PortalHandles;
use crate::util::env::RuntimeEnv;
use crate::util::liveness::Liveness;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let handles = expect_context::<PortalHandles>();
    let api_base = expect_context::<RuntimeEnv>().api_base_url();
    let organizations = RwSignal::new(Vec::<Organization>::new());
    let loading = RwSignal::new(false);
    let live = Liveness::scoped();

    Effect::new(move || {
        let token = handles.token.get();
        if token.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let api_base = api_base.clone();
            let live = live.clone();
            loading.set(true);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_organizations(&api_base, &token).await;
                live.run_if_live(result, |result| {
                    loading.set(false);
                    match result {
                        Ok(list) => organizations.set(list),
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
            let _ = (&api_base, &live);
        }
    });

    view! {
        <div class="dashboard-page">
            <h2 class="dashboard-page__title">"Dashboard"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading organizations..."</p> }>
                <OrganizationCard organizations=organizations/>
            </Show>
        </div>
    }
}
