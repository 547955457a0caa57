//! Browser front end of the PA onboarding portal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on the server through the `ssr` feature and hydrated in the
//! browser through `hydrate`. Only the hydrated build talks to the backend or
//! touches cookies and `window`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
