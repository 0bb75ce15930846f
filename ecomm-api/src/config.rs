//! Typed configuration sections.
//!
//! ```yaml
//! server:
//!   host: 127.0.0.1
//!   port: 8080
//!   request-timeout-ms: 5000
//! database:
//!   url: "sqlite://ecomm.db?mode=rwc"
//!   max-connections: 5
//!   init-schema: true
//! ```

use std::net::SocketAddr;
use std::time::Duration;

use ecomm_core::{ConfigError, ConfigProperties, EcommConfig};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
}

impl ServerConfig {
    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::TypeMismatch {
                key: Self::key("host"),
                expected: "socket address",
                found: "string",
            })
    }
}

impl ConfigProperties for ServerConfig {
    fn prefix() -> &'static str {
        "server"
    }

    fn from_config(config: &EcommConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            host: config.get_or(&Self::key("host"), "127.0.0.1".to_string())?,
            port: config.get_or(&Self::key("port"), 8080)?,
            request_timeout: Duration::from_millis(
                config.get_or(&Self::key("request-timeout-ms"), 5000)?,
            ),
        })
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// Create missing tables at start-up.
    pub init_schema: bool,
}

impl ConfigProperties for DatabaseConfig {
    fn prefix() -> &'static str {
        "database"
    }

    fn from_config(config: &EcommConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            url: config.get(&Self::key("url"))?,
            max_connections: config.get_or(&Self::key("max-connections"), 5)?,
            init_schema: config.get_or(&Self::key("init-schema"), false)?,
        })
    }
}
