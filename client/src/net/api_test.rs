use super::*;

const BASE: &str = "http://localhost:3000";

#[test]
fn profile_endpoint_appends_path() {
    assert_eq!(profile_endpoint(BASE), "http://localhost:3000/profile");
}

#[test]
fn organizations_endpoint_appends_path() {
    assert_eq!(organizations_endpoint(BASE), "http://localhost:3000/organizations");
}

#[test]
fn signed_documents_endpoint_encodes_ipa_code() {
    assert_eq!(
        signed_documents_endpoint(BASE, "c_h501"),
        "http://localhost:3000/organizations/c_h501/signed-documents"
    );
    assert_eq!(
        signed_documents_endpoint(BASE, "a b/c"),
        "http://localhost:3000/organizations/a%20b%2Fc/signed-documents"
    );
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[test]
fn spid_login_url_points_at_backend() {
    assert_eq!(spid_login_url(BASE), "http://localhost:3000/login");
}

#[test]
fn api_error_status_accessor() {
    assert_eq!(ApiError::Status(401).status(), Some(401));
    assert_eq!(ApiError::Request("boom".to_owned()).status(), None);
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status(409).to_string(), "unexpected status: 409");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

/// Poll a future that completes without awaiting anything.
#[cfg(not(feature = "hydrate"))]
fn resolve_now<F: std::future::Future>(future: F) -> F::Output {
    use std::task::{Context, Poll, Waker};

    let mut future = std::pin::pin!(future);
    match future.as_mut().poll(&mut Context::from_waker(Waker::noop())) {
        Poll::Ready(value) => value,
        Poll::Pending => panic!("future did not resolve immediately"),
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn update_work_email_carries_no_response_body() {
    let result: Result<(), ApiError> = resolve_now(update_work_email(BASE, "tok", "m.rossi@pa.it"));
    assert_eq!(result, Err(ApiError::Unavailable));
}
