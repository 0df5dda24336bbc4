//! HTTP server configuration

use serde::{Deserialize, Serialize};
use std::env;

/// HTTP server bind configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Create a server configuration with an explicit bind address
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Load server configuration from `SERVER_HOST` / `SERVER_PORT`
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let host = env::var("SERVER_HOST").unwrap_or(defaults.host);
        let port = match env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| format!("SERVER_PORT must be a valid port number, got '{}'", raw))?,
            Err(_) => defaults.port,
        };

        Ok(Self { host, port })
    }

    /// The `host:port` string to hand to the HTTP server
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::new("0.0.0.0", 9000);
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }

    #[test]
    fn test_default() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }
}
