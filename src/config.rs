//! Host server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid BIND_HOST: {0}")]
    InvalidHost(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Build the listen address from environment variables.
    ///
    /// Optional:
    /// - `BIND_HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the listen address from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_host(lookup("BIND_HOST").as_deref())?;
        let port = parse_port(lookup("PORT").as_deref())?;
        Ok(Self { bind_addr: SocketAddr::new(host, port) })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_BIND_HOST),
        Some(value) => value
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(value.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
