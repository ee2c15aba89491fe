//! HTTP server configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse};

/// HTTP server bind configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Host/interface to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env_or("SERVER_HOST", "127.0.0.1"),
            port: env_parse("SERVER_PORT", 8080),
        }
    }

    /// Bind address string for the HTTP server
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
