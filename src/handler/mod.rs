//! Request handler module
//!
//! Responsible for request routing dispatch: method gating, path
//! resolution against the asset table, and asset response rendering.

pub mod resolve;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
