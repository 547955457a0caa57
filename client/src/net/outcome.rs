//! Mapping of backend answers onto alerts and logout prompts.
//!
//! DESIGN
//! ======
//! Every outcome is a plain [`Feedback`] value so the decision can be tested
//! without a browser. Components dispatch it into the shared alert and
//! logout-modal state.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use super::error::ApiError;
use crate::state::ui::{AlertState, LogoutModalState};
use crate::util::messages;

/// How an error status must be surfaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorOutcome {
    ShowAlert,
    ForceLogout,
}

/// Default classifier: an expired or missing session forces a logout, every
/// other status is alerted.
pub fn classify_status(status: u16) -> ErrorOutcome {
    if status == 401 {
        ErrorOutcome::ForceLogout
    } else {
        ErrorOutcome::ShowAlert
    }
}

/// Invoke exactly one of the two callbacks according to `classify`.
pub fn manage_error_return_codes(
    status: u16,
    classify: impl Fn(u16) -> ErrorOutcome,
    on_alert: impl FnOnce(),
    on_logout: impl FnOnce(),
) {
    match classify(status) {
        ErrorOutcome::ShowAlert => on_alert(),
        ErrorOutcome::ForceLogout => on_logout(),
    }
}

/// User-facing result of a backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    Alert(AlertState),
    Logout(LogoutModalState),
}

impl Feedback {
    /// Hand the feedback to the matching sink.
    pub fn dispatch(self, on_alert: impl FnOnce(AlertState), on_logout: impl FnOnce(LogoutModalState)) {
        match self {
            Self::Alert(alert) => on_alert(alert),
            Self::Logout(prompt) => on_logout(prompt),
        }
    }
}

/// Feedback for an error status with an already-resolved message.
pub fn status_feedback(status: u16, text: String, classify: impl Fn(u16) -> ErrorOutcome) -> Feedback {
    let mut feedback = Feedback::Alert(AlertState::danger(text));
    manage_error_return_codes(
        status,
        classify,
        || {},
        || feedback = Feedback::Logout(LogoutModalState::expired()),
    );
    feedback
}

/// Generic error alert shown when no response was received.
pub fn generic_error_alert() -> AlertState {
    AlertState::danger(messages::generic_error_text(500))
}

/// Feedback for a failed call whose error messages live under
/// `common.errors.genericError`.
pub fn api_error_feedback(error: &ApiError, classify: impl Fn(u16) -> ErrorOutcome) -> Feedback {
    match error {
        ApiError::Status(status) => status_feedback(*status, messages::generic_error_text(*status), classify),
        other => {
            log::warn!("backend call failed: {other}");
            Feedback::Alert(generic_error_alert())
        }
    }
}

/// Feedback for the resend-documents action.
///
/// `204` is the only success answer.
pub fn send_documents_feedback(result: &Result<u16, ApiError>, classify: impl Fn(u16) -> ErrorOutcome) -> Feedback {
    match result {
        Ok(204) => Feedback::Alert(AlertState::info(messages::text("common.alerts.documentsSentAgain"))),
        Ok(status) => status_feedback(*status, messages::send_documents_error_text(*status), classify),
        Err(error) => {
            log::warn!("send documents failed: {error}");
            Feedback::Alert(generic_error_alert())
        }
    }
}
