//! In-memory static asset server
//!
//! A directory is indexed once at startup into an immutable
//! [`assets::AssetTable`]; requests are then answered from memory with
//! gzipped bodies and long-lived cache headers for static resources.

pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
