use super::*;

#[test]
fn lookup_known_and_unknown_keys() {
    assert!(lookup("common.alerts.documentsSentAgain").is_some());
    assert_eq!(lookup("no.such.key"), None);
}

#[test]
fn text_falls_back_to_key() {
    assert_eq!(text("no.such.key"), "no.such.key");
}

#[test]
fn generic_error_text_prefers_status_specific_entry() {
    assert_eq!(generic_error_text(404), lookup("common.errors.genericError.404").unwrap());
}

#[test]
fn generic_error_text_falls_back_to_500() {
    assert_eq!(generic_error_text(418), lookup("common.errors.genericError.500").unwrap());
}

#[test]
fn send_documents_error_text_prefers_action_specific_entry() {
    assert_eq!(send_documents_error_text(409), lookup("common.errors.sendDocuments.409").unwrap());
}

#[test]
fn send_documents_error_text_falls_back_to_generic_status() {
    assert_eq!(send_documents_error_text(401), lookup("common.errors.genericError.401").unwrap());
}

#[test]
fn send_documents_error_text_falls_back_to_generic_500() {
    assert_eq!(send_documents_error_text(502), lookup("common.errors.genericError.500").unwrap());
}
