use super::*;

#[test]
fn from_lookup_reads_all_keys() {
    let env = RuntimeEnv::from_lookup(|key| match key {
        API_HOST_KEY => Some("https://api.example.it".to_owned()),
        API_PORT_KEY => Some("443".to_owned()),
        IS_MOCK_ENV_KEY => Some("1".to_owned()),
        _ => None,
    });
    assert_eq!(env.api_base_url(), "https://api.example.it:443");
    assert!(env.is_mock());
}

#[test]
fn from_lookup_defaults_missing_keys() {
    let env = RuntimeEnv::from_lookup(|_| None);
    assert_eq!(env, RuntimeEnv::default());
    assert_eq!(env.api_base_url(), "http://localhost:80");
    assert!(!env.is_mock());
}

#[test]
fn only_literal_one_means_mock() {
    for flag in ["0", "", "true", "yes", " 1"] {
        let env = RuntimeEnv {
            is_mock_env: flag.to_owned(),
            ..RuntimeEnv::default()
        };
        assert!(!env.is_mock(), "flag {flag:?}");
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_outside_browser_uses_defaults() {
    assert_eq!(RuntimeEnv::load(), RuntimeEnv::default());
}
