//! Startup error types
//!
//! Everything that can go wrong before the listener accepts its first
//! connection. These are fatal: `main` prints them and exits non-zero.
//! Request handling has no error channel of its own; faults there become
//! HTTP responses.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while building the asset table
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("`{0}` is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to walk directory")]
    Walk(#[from] jwalk::Error),

    #[error("failed to read `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{0}` is outside the served directory")]
    OutsideRoot(PathBuf),

    #[error("path `{0}` is not valid UTF-8")]
    NonUtf8Path(PathBuf),
}

/// Any error that aborts process startup
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration")]
    Config(#[from] config::ConfigError),

    #[error("failed to index assets")]
    Index(#[from] IndexError),

    #[error("{0}")]
    Address(String),

    #[error("failed to bind {addr}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open log file")]
    Logger(#[source] std::io::Error),

    #[error("failed to render configuration")]
    Render(#[from] toml::ser::Error),

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
