//! Configuration loading and constants.
//!
//! Loads application configuration from environment variables and defines
//! constants for the variable names, their defaults, and the logging filter.
//! `AppConfig` is the immutable configuration struct built once at startup;
//! handlers never read the process environment per request.

use std::net::SocketAddr;
use std::num::ParseIntError;

// =============================================================================
// Environment Variables
// =============================================================================

/// TCP port the server listens on
pub const ENV_PORT: &str = "PORT";

/// Version string reported by the greeting page
pub const ENV_APP_VERSION: &str = "APP_VERSION";

/// Deployment environment reported by the greeting page
pub const ENV_APP_ENV: &str = "APP_ENV";

// =============================================================================
// Defaults
// =============================================================================

/// Default listen port when PORT is unset
pub const DEFAULT_PORT: u16 = 8080;

/// Default version when APP_VERSION is unset
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Default environment when APP_ENV is unset
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "hello_kubernetes=debug";

/// Application configuration, captured once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port to listen on (bound on 0.0.0.0)
    pub port: u16,
    /// Version string reported by `GET /`
    pub version: String,
    /// Deployment environment reported by `GET /`
    pub environment: String,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// An unset variable falls back to its default; a set-but-empty string is
    /// taken literally. Only PORT parsing can fail.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(ENV_PORT) {
            Some(raw) => raw
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value: raw, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            version: lookup(ENV_APP_VERSION).unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            environment: lookup(ENV_APP_ENV).unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        })
    }

    /// Socket address the server binds, all interfaces on the configured port.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },
}
