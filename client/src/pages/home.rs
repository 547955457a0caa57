//! Public login entry, target of the missing-session redirect.

use leptos::prelude::*;

use crate::components::home_login_button::HomeLoginButton;
use crate::net::api::spid_login_url;
use crate::util::env::RuntimeEnv;

#[component]
pub fn HomePage() -> impl IntoView {
    let login_url = spid_login_url(&expect_context::<RuntimeEnv>().api_base_url());

    view! {
        <div class="home-page">
            <h1 class="home-page__title">"IO Onboarding"</h1>
            <p class="home-page__subtitle">"Register your public administration on the IO platform."</p>
            <div class="row">
                <HomeLoginButton
                    button_text="Sign in with SPID"
                    img="/assets/img/spid-logo.svg"
                    img_height=80
                    img_width=200
                    text="Delegates and legal representatives sign in with their SPID identity."
                    link=login_url
                    offset="1"
                />
                <HomeLoginButton
                    button_text="Sign in with CIE"
                    img="/assets/img/cie-logo.svg"
                    img_height=80
                    img_width=80
                    text="Electronic identity card login is not available yet."
                />
            </div>
        </div>
    }
}
