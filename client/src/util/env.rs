//! Runtime configuration injected by the host as `window._env_`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host serves `/env-config.js`, which assigns `window._env_` before the
//! WASM bundle starts. Server rendering reads the same keys from the process
//! environment; tests fall back to defaults.

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;

pub const API_HOST_KEY: &str = "IO_ONBOARDING_PA_API_HOST";
pub const API_PORT_KEY: &str = "IO_ONBOARDING_PA_API_PORT";
pub const IS_MOCK_ENV_KEY: &str = "IO_ONBOARDING_PA_IS_MOCK_ENV";

pub const DEFAULT_API_HOST: &str = "http://localhost";
pub const DEFAULT_API_PORT: &str = "80";
pub const DEFAULT_IS_MOCK_ENV: &str = "0";

/// Backend coordinates and environment flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeEnv {
    pub api_host: String,
    pub api_port: String,
    /// Raw flag; only `"1"` means mock.
    pub is_mock_env: String,
}

impl Default for RuntimeEnv {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_owned(),
            api_port: DEFAULT_API_PORT.to_owned(),
            is_mock_env: DEFAULT_IS_MOCK_ENV.to_owned(),
        }
    }
}

impl RuntimeEnv {
    /// Build from a key lookup, using defaults for missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_host: lookup(API_HOST_KEY).unwrap_or(defaults.api_host),
            api_port: lookup(API_PORT_KEY).unwrap_or(defaults.api_port),
            is_mock_env: lookup(IS_MOCK_ENV_KEY).unwrap_or(defaults.is_mock_env),
        }
    }

    /// Read `window._env_` in the browser, process environment when server
    /// rendering, defaults otherwise.
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return Self::default();
            };
            let env = js_sys::Reflect::get(&window, &"_env_".into()).ok().filter(|v| v.is_object());
            let Some(env) = env else {
                log::warn!("window._env_ missing, using default runtime configuration");
                return Self::default();
            };
            Self::from_lookup(|key| js_sys::Reflect::get(&env, &key.into()).ok().and_then(|v| v.as_string()))
        }
        #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
        {
            Self::from_lookup(|key| std::env::var(key).ok())
        }
        #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
        {
            Self::default()
        }
    }

    /// `{host}:{port}`, the prefix of every backend URL.
    pub fn api_base_url(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }

    pub fn is_mock(&self) -> bool {
        self.is_mock_env == "1"
    }
}
