//! Server configuration read from environment variables.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Address the server listens on when `BIND_ADDRESS` is not set.
pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Settings the server needs at startup.
pub struct Config {
    /// SeaORM connection URL, from `DATABASE_URL`.
    pub database_url: String,
    /// Listen address, from `BIND_ADDRESS`.
    pub bind_address: SocketAddr,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key-value source, `from_env` uses the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url,
            bind_address,
        })
    }
}
