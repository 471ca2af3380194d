//! Configuration management for the contacts server.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::{SocketAddr, ToSocketAddrs};

use crate::error::{Error, Result};

/// Command-line arguments for the contacts server.
#[derive(Parser, Debug, Clone)]
#[command(name = "contacts-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "GraphQL API over an in-memory contact list")]
pub struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0", env = "CONTACTS_HOST")]
    pub host: String,

    /// HTTP port
    #[arg(short, long, default_value = "4000", env = "PORT")]
    pub port: u16,

    /// Enable debug logging
    #[arg(short, long, env = "CONTACTS_DEBUG")]
    pub debug: bool,

    /// Start with an empty contact list instead of the sample records
    #[arg(long, env = "CONTACTS_NO_SEED")]
    pub no_seed: bool,

    /// Serve Prometheus metrics at /metrics
    #[arg(long, env = "CONTACTS_METRICS")]
    pub metrics: bool,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bind address
    pub host: String,
    /// HTTP port
    pub port: u16,
    /// Debug mode
    pub debug: bool,
    /// Load the sample records at startup
    pub seed: bool,
    /// Metrics endpoint enabled
    pub metrics: bool,
}

impl Config {
    /// Socket address the HTTP listener binds to. Host names are resolved.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| Error::Config(format!("invalid listen address {}: {}", self.host, e)))?
            .next()
            .ok_or_else(|| Error::Config(format!("no address found for host {}", self.host)))
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            debug: args.debug,
            seed: !args.no_seed,
            metrics: args.metrics,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            debug: false,
            seed: true,
            metrics: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_values() {
        let config = Config::default();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 4000);
        assert!(!config.debug);
        assert!(config.seed);
        assert!(!config.metrics);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            port: 8080,
            debug: true,
            ..Config::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"port\":8080"));
        assert!(json.contains("\"debug\":true"));
        assert!(json.contains("\"seed\":true"));
    }

    #[test]
    fn test_config_deserialization() {
        let json = r#"{
            "host": "127.0.0.1",
            "port": 5000,
            "debug": false,
            "seed": false,
            "metrics": true
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert!(!config.seed);
        assert!(config.metrics);
    }

    #[test]
    fn test_args_to_config() {
        let args = Args {
            host: "127.0.0.1".to_string(),
            port: 4100,
            debug: true,
            no_seed: true,
            metrics: true,
        };

        let config: Config = args.into();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 4100);
        assert!(config.debug);
        assert!(!config.seed);
        assert!(config.metrics);
    }

    #[test]
    fn test_args_parse_defaults() {
        let args = Args::try_parse_from(["contacts-server"]).unwrap();
        let config: Config = args.into();

        if std::env::var("PORT").is_err() {
            assert_eq!(config.port, 4000);
        }
        if std::env::var("CONTACTS_NO_SEED").is_err() {
            assert!(config.seed);
        }
    }

    #[test]
    fn test_args_parse_flags() {
        let args =
            Args::try_parse_from(["contacts-server", "--port", "8081", "--no-seed"]).unwrap();

        assert_eq!(args.port, 8081);
        assert!(args.no_seed);
    }

    #[test]
    fn test_debug_flag_reaches_config() {
        let config: Config = Args::try_parse_from(["contacts-server", "--debug"])
            .unwrap()
            .into();
        assert!(config.debug);
    }

    #[test]
    fn test_listen_addr() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 4001,
            ..Config::default()
        };
        assert_eq!(config.listen_addr().unwrap().to_string(), "127.0.0.1:4001");

        let named = Config {
            host: "localhost".to_string(),
            port: 4002,
            ..Config::default()
        };
        let addr = named.listen_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 4002);

        let bad = Config {
            host: "not a host".to_string(),
            ..Config::default()
        };
        assert!(matches!(bad.listen_addr(), Err(Error::Config(_))));
    }
}
