//! Named predicates gating navigation and network side effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! The default container evaluates these from its effects. Keeping the
//! conjunctions here lets each clause be tested on its own.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use crate::app::SPID_LOGIN_PATH;
use crate::net::types::UserProfile;

/// Redirect to the login entry when the session cookie is gone.
///
/// Never fires on the SPID login route, where the token is still being set,
/// nor in a mock environment (`mock_flag == "1"`).
pub fn should_redirect_to_login(token: &str, path: &str, mock_flag: &str) -> bool {
    token.is_empty() && path != SPID_LOGIN_PATH && mock_flag != "1"
}

/// Fetch the profile once a token exists and no profile has been loaded.
pub fn should_fetch_profile(token: &str, given_name: &str, path: &str) -> bool {
    !token.is_empty() && given_name.is_empty() && path != SPID_LOGIN_PATH
}

/// Open the add-work-email modal after a profile without work email arrives.
pub fn should_prompt_work_email(profile: &UserProfile) -> bool {
    !profile.has_work_email()
}
