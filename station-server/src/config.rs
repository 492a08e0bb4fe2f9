//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "STATION_SERVER_ADDR";

/// Environment variable holding the path to a JSON dataset file.
pub const DATA_PATH_VAR: &str = "STATION_DATA_PATH";

/// Default listen address.
const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Errors from building the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Listen address could not be parsed
    #[error("invalid STATION_SERVER_ADDR {value:?}: expected host:port")]
    InvalidAddr { value: String },
}

/// Configuration for the station server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Dataset file to serve. Uses the built-in dataset when `None`.
    pub data_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Create a config listening on `addr` with the built-in dataset.
    pub fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            data_path: None,
        }
    }

    /// Serve stations from a JSON file.
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = Some(path.into());
        self
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through a variable lookup.
    ///
    /// Unset or blank variables fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = var(ADDR_VAR) {
            config.addr = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr { value })?;
        }

        if let Some(path) = var(DATA_PATH_VAR) {
            config = config.with_data_path(path);
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(DEFAULT_ADDR))
    }
}
