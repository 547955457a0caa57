use super::*;
use crate::app::{DASHBOARD_PATH, PROFILE_PATH};

// =============================================================
// should_redirect_to_login — all 8 combinations
// =============================================================

#[test]
fn redirect_fires_only_without_token_off_login_in_real_env() {
    let cases = [
        // (token, path, mock, expected)
        ("", DASHBOARD_PATH, "0", true),
        ("", DASHBOARD_PATH, "1", false),
        ("", SPID_LOGIN_PATH, "0", false),
        ("", SPID_LOGIN_PATH, "1", false),
        ("tok", DASHBOARD_PATH, "0", false),
        ("tok", DASHBOARD_PATH, "1", false),
        ("tok", SPID_LOGIN_PATH, "0", false),
        ("tok", SPID_LOGIN_PATH, "1", false),
    ];
    for (token, path, mock, expected) in cases {
        assert_eq!(
            should_redirect_to_login(token, path, mock),
            expected,
            "token={token:?} path={path:?} mock={mock:?}"
        );
    }
}

#[test]
fn redirect_never_fires_on_login_route() {
    for mock in ["", "0", "1", "true"] {
        assert!(!should_redirect_to_login("", SPID_LOGIN_PATH, mock));
    }
}

#[test]
fn redirect_treats_unset_mock_flag_as_real_env() {
    assert!(should_redirect_to_login("", PROFILE_PATH, ""));
}

// =============================================================
// should_fetch_profile
// =============================================================

#[test]
fn fetch_fires_with_token_unset_profile_off_login() {
    assert!(should_fetch_profile("tok", "", DASHBOARD_PATH));
}

#[test]
fn fetch_never_fires_with_empty_token() {
    assert!(!should_fetch_profile("", "", DASHBOARD_PATH));
    assert!(!should_fetch_profile("", "", PROFILE_PATH));
}

#[test]
fn fetch_skipped_when_profile_already_loaded() {
    assert!(!should_fetch_profile("tok", "Mario", DASHBOARD_PATH));
}

#[test]
fn fetch_skipped_on_login_route() {
    assert!(!should_fetch_profile("tok", "", SPID_LOGIN_PATH));
}

// =============================================================
// should_prompt_work_email
// =============================================================

#[test]
fn prompt_when_work_email_missing_or_empty() {
    assert!(should_prompt_work_email(&UserProfile::default()));
    let empty = UserProfile {
        work_email: Some(String::new()),
        ..UserProfile::default()
    };
    assert!(should_prompt_work_email(&empty));
}

#[test]
fn no_prompt_when_work_email_present() {
    let profile = UserProfile::default().with_work_email("work@pa.it".to_owned());
    assert!(!should_prompt_work_email(&profile));
}
