//! HTTP cache control module
//!
//! Decides which assets get long-lived caching headers. Documents
//! (HTML, plain text, markdown) and favicons are always revalidated;
//! everything else is assumed to be a versioned asset and cached for a year.

/// One year, in seconds
pub const IMMUTABLE_MAX_AGE: u32 = 31_536_000;

/// Content types that change without their path changing
const REVALIDATED_TYPES: [&str; 3] = ["text/html", "text/plain", "text/markdown"];

/// Cache control policy for a served asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// `ETag` plus `Cache-Control: max-age=<seconds>`
    Immutable(u32),
    /// No cache headers at all
    Revalidate,
}

impl CachePolicy {
    /// Pick the policy for an asset of `content_type` requested at `request_path`
    pub fn for_asset(content_type: &str, request_path: &str, no_cache: bool) -> Self {
        if no_cache
            || REVALIDATED_TYPES.contains(&content_type)
            || request_path.ends_with("favicon.ico")
        {
            Self::Revalidate
        } else {
            Self::Immutable(IMMUTABLE_MAX_AGE)
        }
    }

    /// Convert to Cache-Control header value, `None` when no header is sent
    pub fn to_header_value(self) -> Option<String> {
        match self {
            Self::Immutable(max_age) => Some(format!("max-age={max_age}")),
            Self::Revalidate => None,
        }
    }
}
