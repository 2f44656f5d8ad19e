//! Bearer credential extraction.

use axum::http::HeaderMap;
use axum_extra::extract::cookie::CookieJar;

/// Read the named credential cookie from request headers.
///
/// Absence is a normal outcome (anonymous visitor), never an error. The
/// returned string is the raw, unverified token.
pub fn extract_credential(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    jar.get(cookie_name).map(|c| c.value().to_string())
}
