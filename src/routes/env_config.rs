//! Runtime configuration script for the browser bundle.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::state::AppState;

/// `GET /env-config.js`, loaded by the HTML shell before hydration.
pub async fn env_config_js(State(state): State<AppState>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        state.config.env_config_script(),
    )
}
