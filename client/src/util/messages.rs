//! Built-in English strings for alerts, modals, and error statuses.
//!
//! Keys follow the dotted layout of the translation catalog so a real catalog
//! can replace [`lookup`] without touching callers.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

/// Look up a message by key.
pub fn lookup(key: &str) -> Option<&'static str> {
    let text = match key {
        "common.alerts.documentsSentAgain" => "The documents have been sent again to the organization's PEC address.",
        "common.alerts.workEmailSaved" => "Your work email has been saved.",
        "common.errors.genericError.400" => "The request is not valid.",
        "common.errors.genericError.401" => "Your session has expired.",
        "common.errors.genericError.403" => "You are not allowed to perform this operation.",
        "common.errors.genericError.404" => "The requested resource was not found.",
        "common.errors.genericError.409" => "The operation conflicts with the current state.",
        "common.errors.genericError.500" => "An error occurred, please try again later.",
        "common.errors.sendDocuments.400" => "The documents cannot be sent for this organization.",
        "common.errors.sendDocuments.403" => "Only the delegate who registered the organization can send its documents.",
        "common.errors.sendDocuments.404" => "The organization was not found.",
        "common.errors.sendDocuments.409" => "The documents have already been signed.",
        "common.errors.sendDocuments.500" => "The documents could not be sent, please try again later.",
        "common.errors.invalidEmail" => "Enter a valid email address.",
        "logoutModal.expiredToken" => "Your session has expired. Please sign in again.",
        "logoutModal.confirm" => "Do you want to log out?",
        _ => return None,
    };
    Some(text)
}

/// Message for `key`, or the key itself when it is unknown.
pub fn text(key: &str) -> String {
    lookup(key).unwrap_or(key).to_owned()
}

/// Generic message for an HTTP status, falling back to the `500` text.
pub fn generic_error_text(status: u16) -> String {
    lookup(&format!("common.errors.genericError.{status}"))
        .or_else(|| lookup("common.errors.genericError.500"))
        .unwrap_or_default()
        .to_owned()
}

/// Resend-documents message for an HTTP status: the action-specific text,
/// then the generic text for the same status, then the generic `500` text.
pub fn send_documents_error_text(status: u16) -> String {
    match lookup(&format!("common.errors.sendDocuments.{status}")) {
        Some(text) => text.to_owned(),
        None => generic_error_text(status),
    }
}
