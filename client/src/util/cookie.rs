//! Browser cookie access.
//!
//! The session cookie is written by the login flow; this module only reads it
//! and, on logout, expires it. Server rendering reads the `Cookie` header of
//! the request being rendered, so both sides start from the same token.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Cookie carrying the bearer token for backend calls.
pub const SESSION_TOKEN_COOKIE: &str = "sessionToken";

/// Value of the first cookie named `name` in a `document.cookie` string.
///
/// Returns an empty string when the cookie is absent. A value that is not
/// valid percent-encoding is returned as-is.
pub fn cookie_value(cookies: &str, name: &str) -> String {
    let prefix = format!("{name}=");
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(prefix.as_str()))
        .map(|raw| urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), |decoded| decoded.into_owned()))
        .unwrap_or_default()
}

/// Join the values of repeated `Cookie` headers into one cookie string.
pub fn join_cookie_headers<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
    values.into_iter().collect::<Vec<_>>().join("; ")
}

/// Assignment that makes the browser drop cookie `name`.
pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/")
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
}

/// `Cookie` headers of the request being server rendered, if any.
#[cfg(all(feature = "ssr", not(feature = "hydrate")))]
fn request_cookies() -> String {
    leptos::prelude::use_context::<http::request::Parts>()
        .map(|parts| {
            join_cookie_headers(
                parts
                    .headers
                    .get_all(http::header::COOKIE)
                    .iter()
                    .filter_map(|value| value.to_str().ok()),
            )
        })
        .unwrap_or_default()
}

/// Read cookie `name` from the current document, or from the request when
/// server rendering.
pub fn read_cookie(name: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let cookies = html_document().and_then(|d| d.cookie().ok()).unwrap_or_default();
        cookie_value(&cookies, name)
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        cookie_value(&request_cookies(), name)
    }
    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    {
        let _ = name;
        String::new()
    }
}

/// Expire cookie `name` in the current document.
pub fn clear_cookie(name: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            if doc.set_cookie(&expired_cookie(name)).is_err() {
                log::warn!("could not clear cookie {name}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = expired_cookie(name);
    }
}
