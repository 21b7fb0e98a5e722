//! HTTP protocol layer module
//!
//! Protocol-level building blocks shared by the request handler: content
//! types, cache policy, compression, CORS and the fixed error responses.

pub mod cache;
pub mod compress;
pub mod cors;
pub mod mime;
pub mod response;

// Re-export commonly used types
pub use cache::CachePolicy;
pub use response::{build_404_response, build_405_response, build_500_response};
