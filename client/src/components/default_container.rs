//! Container wrapping every authenticated route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the session token and user profile, guards routes against a missing
//! session cookie, loads the profile once a token is available, and renders
//! headers, alert, modals, and the routed view.
//!
//! ORDERING
//! ========
//! The token is read from the cookie and committed while the container is set
//! up, before any effect exists, so the profile effect always sees it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::{HOME_PATH, SPID_LOGIN_PATH};
use crate::components::add_mail_modal::AddMailModal;
use crate::components::app_alert::AppAlert;
use crate::components::central_header::CentralHeader;
use crate::components::loading_page::LoadingPage;
use crate::components::logout_modal::LogoutModal;
use crate::components::slim_header::SlimHeader;
use crate::state::portal::create_portal_state;
use crate::util::cookie::{SESSION_TOKEN_COOKIE, read_cookie};
use crate::util::env::RuntimeEnv;
use crate::util::guards::should_redirect_to_login;
#[cfg(feature = "hydrate")]
use crate::util::guards::{should_fetch_profile, should_prompt_work_email};
use crate::util::liveness::Liveness;

#[component]
pub fn DefaultContainer() -> impl IntoView {
    let env = expect_context::<RuntimeEnv>();
    let location = use_location();
    let navigate = use_navigate();

    let (handles, writers) = create_portal_state(read_cookie(SESSION_TOKEN_COOKIE));
    provide_context(handles);

    // Session redirect, re-evaluated on every path change.
    let mock_flag = env.is_mock_env.clone();
    Effect::new(move || {
        let path = location.pathname.get();
        let token = handles.token.get_untracked();
        if should_redirect_to_login(&token, &path, &mock_flag) {
            log::info!("session cookie missing on {path}, redirecting to {HOME_PATH}");
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });

    // Profile load, re-evaluated when the token changes or the login route is left.
    let on_login_route = Memo::new(move |_| location.pathname.with(|p| p == SPID_LOGIN_PATH));
    let live = Liveness::scoped();
    let api_base = env.api_base_url();
    Effect::new(move || {
        let token = handles.token.get();
        let _ = on_login_route.get();
        #[cfg(feature = "hydrate")]
        {
            let given_name = handles.profile.with_untracked(|p| p.given_name.clone());
            let path = location.pathname.get_untracked();
            if !should_fetch_profile(&token, &given_name, &path) {
                return;
            }
            let api_base = api_base.clone();
            let live = live.clone();
            writers.loading_page.set(true);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_profile(&api_base, &token).await;
                live.run_if_live(result, |result| {
                    writers.loading_page.set(false);
                    match result {
                        Ok(profile) => {
                            let prompt = should_prompt_work_email(&profile);
                            writers.profile.set(profile);
                            if prompt {
                                writers.add_mail_modal.set(true);
                            }
                        }
                        // Left as "no profile yet"; the next token change retries.
                        Err(e) => log::warn!("profile fetch failed: {e}"),
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&token, &api_base, &live, writers);
        }
    });

    let user_name = Signal::derive(move || handles.profile.with(|p| p.display_name()));
    let user_role = Signal::derive(move || handles.profile.with(|p| p.role.clone()));
    let spid_mail = Signal::derive(move || handles.profile.with(|p| p.email.clone()));
    let work_mail = Signal::derive(move || handles.profile.with(|p| p.work_email.clone()));

    view! {
        <div class="default-container">
            <Show when=move || !handles.loading_page.get()>
                <SlimHeader/>
                <CentralHeader user_name=user_name user_role=user_role/>
            </Show>
            <div>
                <AppAlert/>
                <Outlet/>
            </div>
            <AddMailModal
                visible=handles.add_mail_modal
                on_toggle=handles.actions.toggle_add_mail_modal
                spid_mail=spid_mail
                work_mail=work_mail
                on_work_mail_set=handles.actions.set_work_email
            />
            <LogoutModal/>
            <Show when=move || handles.loading_page.get()>
                <LoadingPage/>
            </Show>
        </div>
    }
}
