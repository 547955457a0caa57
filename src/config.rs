//! Host configuration parsed from environment variables.
//!
//! The backend coordinates are shared with the browser bundle through
//! `/env-config.js`, so both sides read the same `IO_ONBOARDING_PA_*` keys.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use onboarding_client::util::env::{API_HOST_KEY, API_PORT_KEY, IS_MOCK_ENV_KEY, RuntimeEnv};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub port: u16,
    pub runtime: RuntimeEnv,
}

impl PortalConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `IO_ONBOARDING_PA_API_HOST`: default `http://localhost`
    /// - `IO_ONBOARDING_PA_API_PORT`: default `80`
    /// - `IO_ONBOARDING_PA_IS_MOCK_ENV`: default `0`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { port, runtime: RuntimeEnv::from_lookup(&lookup) })
    }

    /// Body of `/env-config.js`, assigning the runtime keys to `window._env_`.
    pub fn env_config_script(&self) -> String {
        let env = serde_json::json!({
            API_HOST_KEY: self.runtime.api_host,
            API_PORT_KEY: self.runtime.api_port,
            IS_MOCK_ENV_KEY: self.runtime.is_mock_env,
        });
        format!("window._env_ = {env};\n")
    }
}
