//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::default_container::DefaultContainer;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, profile::ProfilePage, registration::RegistrationPage,
    spid_login::SpidLoginPage,
};
use crate::util::env::RuntimeEnv;

/// Login entry with the SPID buttons; target of the session redirect.
pub const HOME_PATH: &str = "/home";
/// Landing route of the SPID flow, where the session cookie is being set.
pub const SPID_LOGIN_PATH: &str = "/spid-login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const PROFILE_PATH: &str = "/profile";

/// Path of registration wizard step `step`.
pub fn sign_up_path(step: u8) -> String {
    format!("/sign-up/{step}")
}

/// HTML shell rendered on the server for SSR + hydration.
///
/// `/env-config.js` must run before the WASM bundle reads `window._env_`.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src="/env-config.js"></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the runtime configuration and sets up client-side routing. All
/// routes except the home page render inside [`DefaultContainer`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RuntimeEnv::load());

    view! {
        <Stylesheet id="leptos" href="/pkg/pa-onboarding.css"/>
        <Title text="IO Onboarding PA"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("home") view=HomePage/>
                <ParentRoute path=StaticSegment("") view=DefaultContainer>
                    <Route path=StaticSegment("spid-login") view=SpidLoginPage/>
                    <Route path=(StaticSegment("sign-up"), ParamSegment("step")) view=RegistrationPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD_PATH/> }/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
