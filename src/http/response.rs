//! HTTP response building module
//!
//! Builders for the fixed, non-asset responses. Builder failures are logged
//! and replaced with a bare response so callers always get something to send.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

const PLAIN_TEXT: &str = "text/plain; charset=utf-8";

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_text_response(StatusCode::NOT_FOUND, "not found")
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", PLAIN_TEXT)
        .header("Allow", "GET")
        .body(Full::new(Bytes::from_static(b"method not allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            bare_response(StatusCode::METHOD_NOT_ALLOWED)
        })
}

/// Build 500 Internal Server Error response with an empty body
pub fn build_500_response() -> Response<Full<Bytes>> {
    bare_response(StatusCode::INTERNAL_SERVER_ERROR)
}

fn build_text_response(status: StatusCode, body: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", PLAIN_TEXT)
        .body(Full::new(Bytes::from_static(body.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            bare_response(status)
        })
}

/// Response with only a status line and an empty body
pub fn bare_response(status: StatusCode) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::new()));
    *response.status_mut() = status;
    response
}

/// Log response build error
pub fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
