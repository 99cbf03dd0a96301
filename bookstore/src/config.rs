//! Process configuration.
//!
//! Every option can be given as a command-line flag or an environment variable. With no
//! options at all the service listens on `0.0.0.0:3000` backed by a seeded in-memory store.

use clap::{Parser, ValueEnum};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Storage backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    /// Volatile in-process storage.
    Memory,
    /// Durable MongoDB storage.
    Mongodb,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "bookstore", version, about = "Bookstore inventory HTTP API")]
pub struct Config {
    /// Storage backend to serve books from.
    #[arg(long, env = "BOOKSTORE_BACKEND", value_enum, default_value_t = BackendKind::Memory)]
    pub backend: BackendKind,

    /// Address to listen on.
    #[arg(long, env = "BOOKSTORE_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "BOOKSTORE_PORT", default_value_t = 3000)]
    pub port: u16,

    /// MongoDB connection string (mongodb backend only).
    #[arg(long, env = "BOOKSTORE_MONGODB_URI", default_value = "mongodb://127.0.0.1:27017")]
    pub mongodb_uri: String,

    /// MongoDB database name (mongodb backend only).
    #[arg(long, env = "BOOKSTORE_DATABASE", default_value = "bookstore")]
    pub database: String,

    /// MongoDB collection name (mongodb backend only).
    #[arg(long, env = "BOOKSTORE_COLLECTION", default_value = "books")]
    pub collection: String,

    /// Start the in-memory backend empty instead of with the sample catalogue.
    #[arg(long, env = "BOOKSTORE_NO_SEED")]
    pub no_seed: bool,

    /// Log output format.
    #[arg(long, env = "BOOKSTORE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_deployment() {
        let config = Config::try_parse_from(["bookstore"]).unwrap();

        assert_eq!(config.backend, BackendKind::Memory);
        assert_eq!(config.socket_addr(), "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.mongodb_uri, "mongodb://127.0.0.1:27017");
        assert_eq!(config.database, "bookstore");
        assert_eq!(config.collection, "books");
        assert!(!config.no_seed);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "bookstore",
            "--backend",
            "mongodb",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--database",
            "library",
            "--no-seed",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(config.backend, BackendKind::Mongodb);
        assert_eq!(config.socket_addr(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.database, "library");
        assert!(config.no_seed);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(Config::try_parse_from(["bookstore", "--backend", "redis"]).is_err());
    }
}
