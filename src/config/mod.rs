// Configuration module entry point
// Layers defaults, the optional TOML file, ASSETD_* environment variables
// and command-line flags, in that order of precedence

mod state;
mod types;

use std::net::{IpAddr, SocketAddr};

use crate::cli::Cli;

// Re-export public types
pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig};

const ENV_PREFIX: &str = "ASSETD";

impl Config {
    /// Load configuration for the given command line
    pub fn load(cli: &Cli) -> Result<Self, config::ConfigError> {
        let config_path = cli.config.to_string_lossy();
        let settings = config::Config::builder()
            .add_source(
                config::File::new(&config_path, config::FileFormat::Toml).required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.host", cli.host.clone())?
            .set_override_option("server.port", cli.port.map(i64::from))?
            .set_override_option("http.no_cache", cli.no_cache.then_some(true))?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.server
            .host
            .parse::<IpAddr>()
            .map(|ip| SocketAddr::new(ip, self.server.port))
            .map_err(|e| format!("Invalid address '{}': {e}", self.server.host))
    }

    /// Effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("assetd").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        let cfg = Config::load(&cli(&["-c", missing.to_str().unwrap(), "public"])).unwrap();

        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8888);
        assert!(!cfg.http.no_cache);
        assert!(cfg.http.enable_cors);
        assert_eq!(cfg.performance.request_timeout, 30);
        assert_eq!(cfg.logging.access_log_format, "combined");
    }

    #[test]
    fn test_file_and_cli_layers() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("assetd.toml");
        fs::write(
            &file,
            "[server]\nport = 9000\nhost = \"127.0.0.1\"\n\n[logging]\naccess_log = false\n",
        )
        .unwrap();

        let cfg = Config::load(&cli(&["-c", file.to_str().unwrap(), "public"])).unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert!(!cfg.logging.access_log);

        let cfg = Config::load(&cli(&[
            "-c",
            file.to_str().unwrap(),
            "-p",
            "7000",
            "--no-cache",
            "public",
        ]))
        .unwrap();
        assert_eq!(cfg.server.port, 7000);
        assert!(cfg.http.no_cache);
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = Config::default();
        assert_eq!(cfg.socket_addr().unwrap(), "0.0.0.0:8888".parse().unwrap());

        cfg.server.host = "::1".to_string();
        cfg.server.port = 80;
        assert_eq!(cfg.socket_addr().unwrap(), "[::1]:80".parse().unwrap());

        cfg.server.host = "not an ip".to_string();
        assert!(cfg.socket_addr().is_err());
    }

    #[test]
    fn test_to_toml() {
        let rendered = Config::default().to_toml().unwrap();
        assert!(rendered.contains("port = 8888"));
        assert!(rendered.contains("[http]"));
    }
}
