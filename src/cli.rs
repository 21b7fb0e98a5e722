//! Command-line interface definitions.

use clap::Parser;
use std::path::PathBuf;

/// Serve a directory of static assets from memory, gzipped
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory to serve
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub directory: PathBuf,

    /// Remove cache control (no `ETag` or `Cache-Control` headers)
    #[arg(long)]
    pub no_cache: bool,

    /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,

    /// Port number to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Config file path; a missing file is not an error
    #[arg(short, long, default_value = "assetd.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}
