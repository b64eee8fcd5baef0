//! Locating the access token on an incoming request.

use axum_extra::extract::cookie::CookieJar;
use http::HeaderMap;
use http::header::AUTHORIZATION;

/// Cookie set by the login flow of the web client.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Return the raw access token carried by the request, if any.
///
/// `Authorization: Bearer <token>` wins over the cookie so API clients can
/// override a stale browser session.
///
/// ```
/// use http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
/// use keikakun_auth_types::credentials::access_token_from_headers;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
/// assert_eq!(access_token_from_headers(&headers).as_deref(), Some("abc.def.ghi"));
/// ```
pub fn access_token_from_headers(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_owned());
    }

    CookieJar::from_headers(headers)
        .get(ACCESS_TOKEN_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|t| !t.is_empty())
}
