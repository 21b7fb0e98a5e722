//! Cross-origin resource sharing
//!
//! Fixed policy: any origin, `GET` only, any request header. Preflight
//! requests are answered here and never reach method gating or resolution.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD,
    ORIGIN, VARY,
};
use hyper::{Method, Response, StatusCode};

use super::response::bare_response;

const ALLOWED_METHOD: Method = Method::GET;

/// Answer a preflight request, or `None` if this is not one
///
/// A preflight is an `OPTIONS` request carrying `Access-Control-Request-Method`.
/// Disallowed origins or methods still get a 204, just without the
/// `Access-Control-Allow-*` headers, so the browser blocks the real request.
pub fn preflight_response(method: &Method, headers: &HeaderMap) -> Option<Response<Full<Bytes>>> {
    if method != Method::OPTIONS {
        return None;
    }
    let requested_method = headers.get(ACCESS_CONTROL_REQUEST_METHOD)?;

    let mut response = bare_response(StatusCode::NO_CONTENT);
    let out = response.headers_mut();
    out.append(VARY, HeaderValue::from_static("Origin"));
    out.append(VARY, HeaderValue::from_static("Access-Control-Request-Method"));
    out.append(VARY, HeaderValue::from_static("Access-Control-Request-Headers"));

    let origin_present = headers.get(ORIGIN).is_some_and(|o| !o.is_empty());
    let method_allowed = requested_method
        .to_str()
        .is_ok_and(|m| m.eq_ignore_ascii_case(ALLOWED_METHOD.as_str()));
    if !origin_present || !method_allowed {
        return Some(response);
    }

    out.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    out.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("GET"));
    if let Some(requested_headers) = headers.get(ACCESS_CONTROL_REQUEST_HEADERS) {
        out.insert(ACCESS_CONTROL_ALLOW_HEADERS, requested_headers.clone());
    }
    Some(response)
}

/// Add CORS headers to the response of an actual (non-preflight) request
pub fn decorate(method: &Method, headers: &HeaderMap, response: &mut Response<Full<Bytes>>) {
    let out = response.headers_mut();
    out.append(VARY, HeaderValue::from_static("Origin"));

    let origin_present = headers.get(ORIGIN).is_some_and(|o| !o.is_empty());
    // OPTIONS stays allowed so a bare OPTIONS carries the origin header on its 405
    let method_allowed = method == ALLOWED_METHOD || method == Method::OPTIONS;
    if origin_present && method_allowed {
        out.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.insert(*name, HeaderValue::from_static(*value));
        }
        headers
    }

    #[test]
    fn test_preflight_for_get() {
        let headers = request_headers(&[
            ("origin", "https://example.com"),
            ("access-control-request-method", "GET"),
            ("access-control-request-headers", "x-token, content-type"),
        ]);
        let response = preflight_response(&Method::OPTIONS, &headers).unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_METHODS], "GET");
        assert_eq!(
            response.headers()[ACCESS_CONTROL_ALLOW_HEADERS],
            "x-token, content-type"
        );
        assert_eq!(response.headers().get_all(VARY).iter().count(), 3);
    }

    #[test]
    fn test_preflight_for_disallowed_method() {
        let headers = request_headers(&[
            ("origin", "https://example.com"),
            ("access-control-request-method", "DELETE"),
        ]);
        let response = preflight_response(&Method::OPTIONS, &headers).unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[test]
    fn test_not_a_preflight() {
        let headers = request_headers(&[("origin", "https://example.com")]);
        assert!(preflight_response(&Method::OPTIONS, &headers).is_none());
        let headers = request_headers(&[("access-control-request-method", "GET")]);
        assert!(preflight_response(&Method::GET, &headers).is_none());
    }

    #[test]
    fn test_decorate_get_with_origin() {
        let headers = request_headers(&[("origin", "https://example.com")]);
        let mut response = bare_response(StatusCode::OK);
        decorate(&Method::GET, &headers, &mut response);
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(response.headers()[VARY], "Origin");
    }

    #[test]
    fn test_decorate_without_origin() {
        let mut response = bare_response(StatusCode::OK);
        decorate(&Method::GET, &HeaderMap::new(), &mut response);
        assert!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
        assert_eq!(response.headers()[VARY], "Origin");
    }

    #[test]
    fn test_decorate_post_is_not_allowed() {
        let headers = request_headers(&[("origin", "https://example.com")]);
        let mut response = bare_response(StatusCode::METHOD_NOT_ALLOWED);
        decorate(&Method::POST, &headers, &mut response);
        assert!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
