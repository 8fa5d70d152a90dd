//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::defaults::{default_encoding, default_port, default_realname};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Where to connect and how to encode text.
    pub server: ServerConfig,
    /// Who to announce ourselves as.
    pub identity: IdentityConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// `host:port` string for connecting.
    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Server connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Hostname or IP address (e.g., "irc.libera.chat").
    pub host: String,
    /// TCP port (default: 6667).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Text encoding label understood by `encoding_rs` (default: "utf-8").
    /// Legacy networks often need "windows-1251" or "iso-8859-1".
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

/// Identity announced during registration.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// Desired nickname.
    pub nick: String,
    /// Real name sent in `USER`.
    #[serde(default = "default_realname")]
    pub realname: String,
}
