//! Asset response rendering
//!
//! Turns a resolved [`Asset`] into a `200 OK`: stored content type, cache
//! headers per [`CachePolicy`], and a freshly gzipped body.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{CACHE_CONTROL, CONTENT_ENCODING, CONTENT_LENGTH, CONTENT_TYPE, ETAG};
use hyper::{Response, StatusCode};

use crate::assets::Asset;
use crate::http::{self, compress, response::log_build_error, CachePolicy};
use crate::logger;

/// Build the success response for `asset`, requested as `request_path`
///
/// `request_path` is the decoded path the client sent, not the table key
/// the asset was found under; it doubles as the `ETag`.
pub fn serve_asset(asset: &Asset, request_path: &str, no_cache: bool) -> Response<Full<Bytes>> {
    let body = match compress::gzip(asset.content()) {
        Ok(body) => body,
        Err(e) => {
            logger::log_error(&format!("Failed to gzip {request_path}: {e}"));
            return http::build_500_response();
        }
    };

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, asset.content_type());

    let policy = CachePolicy::for_asset(asset.content_type(), request_path, no_cache);
    if let Some(cache_control) = policy.to_header_value() {
        builder = builder
            .header(ETAG, request_path)
            .header(CACHE_CONTROL, cache_control);
    }

    builder
        .header(CONTENT_ENCODING, "gzip")
        .header(CONTENT_LENGTH, body.len())
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            http::build_500_response()
        })
}
