//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: CORS, method validation,
//! path resolution and access logging. Every request gets a response;
//! nothing here returns an error to hyper.

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use super::{resolve, static_files};
use crate::config::AppState;
use crate::http::{self, cors};
use crate::logger::{self, AccessLogEntry};

/// Main entry point for HTTP request handling
///
/// Generic over the request body because no handler ever reads it.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let response = dispatch(&req, &state);

    let logging = &state.config.logging;
    if logging.access_log {
        let mut entry = AccessLogEntry::from_request(
            remote_addr,
            req.method(),
            req.uri(),
            req.version(),
            req.headers(),
        );
        entry.status = response.status().as_u16();
        entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &logging.access_log_format);
    }

    Ok(response)
}

/// Produce the response for a request without any logging
pub fn dispatch<B>(req: &Request<B>, state: &AppState) -> Response<Full<Bytes>> {
    let enable_cors = state.config.http.enable_cors;

    // 1. CORS preflight, answered before method gating
    if enable_cors {
        if let Some(resp) = cors::preflight_response(req.method(), req.headers()) {
            return resp;
        }
    }

    // 2. Method gating, then resolution
    let mut response = match check_http_method(req.method()) {
        Some(resp) => resp,
        None => serve_path(&decode_path(req.uri().path()), state),
    };

    // 3. CORS headers on the actual response
    if enable_cors {
        cors::decorate(req.method(), req.headers(), &mut response);
    }
    response
}

/// Reject anything but GET
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    if method == Method::GET {
        None
    } else {
        Some(http::build_405_response())
    }
}

/// Resolve a decoded path and render the asset, or 404
fn serve_path(path: &str, state: &AppState) -> Response<Full<Bytes>> {
    match resolve::resolve(state.assets(), path) {
        Some((asset, _)) => static_files::serve_asset(asset, path, state.config.http.no_cache),
        None => http::build_404_response(),
    }
}

/// Percent-decode the URI path; invalid UTF-8 is replaced, not rejected
fn decode_path(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw).decode_utf8_lossy()
}
