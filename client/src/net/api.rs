//! REST helpers for the onboarding backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying the
//! session token as a bearer credential.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Whether a failure is
//! swallowed, alerted, or turned into a logout prompt is decided by the caller.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Organization, OrganizationRegistrationParams, UserProfile};
#[cfg(feature = "hydrate")]
use super::types::{OrganizationCollection, WorkEmailUpdate};

fn profile_endpoint(base: &str) -> String {
    format!("{base}/profile")
}

fn organizations_endpoint(base: &str) -> String {
    format!("{base}/organizations")
}

fn signed_documents_endpoint(base: &str, ipa_code: &str) -> String {
    format!("{base}/organizations/{}/signed-documents", urlencoding::encode(ipa_code))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// URL of the backend SPID login entry point.
pub fn spid_login_url(base: &str) -> String {
    format!("{base}/login")
}

/// Fetch the signed-in user's profile via `GET {base}/profile`.
///
/// The body is decoded without checking the status code; an error body that
/// is still JSON decodes into an empty profile.
///
/// # Errors
///
/// Returns [`ApiError::Request`] on transport failure and [`ApiError::Decode`]
/// when the body is not JSON.
pub async fn fetch_profile(base: &str, token: &str) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&profile_endpoint(base))
            .header("Accept", "application/json")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        resp.json::<UserProfile>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = profile_endpoint(base);
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Store the user's work email via `PUT {base}/profile`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for any non-2xx answer. The response body is
/// ignored, so an empty `204` counts as success.
pub async fn update_work_email(base: &str, token: &str, work_email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = WorkEmailUpdate {
            work_email: work_email.to_owned(),
        };
        let resp = gloo_net::http::Request::put(&profile_endpoint(base))
            .header("Accept", "application/json")
            .header("Authorization", &bearer(token))
            .json(&payload)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, token, work_email);
        Err(ApiError::Unavailable)
    }
}

/// List the organizations the user belongs to via `GET {base}/organizations`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for any non-2xx answer.
pub async fn fetch_organizations(base: &str, token: &str) -> Result<Vec<Organization>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&organizations_endpoint(base))
            .header("Accept", "application/json")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: OrganizationCollection = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = organizations_endpoint(base);
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Register a new organization via `POST {base}/organizations`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for any non-2xx answer.
pub async fn create_organization(
    base: &str,
    token: &str,
    params: &OrganizationRegistrationParams,
) -> Result<Organization, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&organizations_endpoint(base))
            .header("Accept", "application/json")
            .header("Authorization", &bearer(token))
            .json(params)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<Organization>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, token, params);
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend to send the onboarding documents again.
///
/// Any HTTP answer is returned as `Ok(status)`; the caller discriminates
/// `204` from the error statuses.
///
/// # Errors
///
/// Returns [`ApiError::Request`] when the request cannot be built or sent.
pub async fn send_documents(base: &str, token: &str, ipa_code: &str) -> Result<u16, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&signed_documents_endpoint(base, ipa_code))
            .header("Accept", "application/json")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = signed_documents_endpoint(base, ipa_code);
        let _ = token;
        Err(ApiError::Unavailable)
    }
}
