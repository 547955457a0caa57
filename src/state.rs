//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no per-user state; it only carries the parsed configuration.

use std::sync::Arc;

use crate::config::PortalConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PortalConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: PortalConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}
