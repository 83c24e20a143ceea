//! Global configuration parsing and validation.

use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{AppError, Result};

/// Database path that selects a private in-memory `SQLite` database.
pub const MEMORY_DB_PATH: &str = ":memory:";

fn default_http_host() -> String {
    "127.0.0.1".into()
}

fn default_http_port() -> u16 {
    3000
}

fn default_db_path() -> String {
    "todo-keeper.db".into()
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("todo-keeper.json")
}

fn default_storage_key() -> String {
    crate::storage::DEFAULT_STORAGE_KEY.into()
}

/// Global configuration parsed from `config.toml`.
///
/// Every field has a default, so an empty file (or no file at all) is a
/// valid configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct GlobalConfig {
    /// Interface the HTTP API binds to.
    #[serde(default = "default_http_host")]
    pub http_host: String,
    /// HTTP port for the API; 0 lets the OS pick one.
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    /// `SQLite` database file backing the remote API, or `:memory:`.
    #[serde(default = "default_db_path")]
    pub db_path: String,
    /// File holding the local key-value task store.
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,
    /// Key under which the task list is stored.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            http_host: default_http_host(),
            http_port: default_http_port(),
            db_path: default_db_path(),
            storage_path: default_storage_path(),
            storage_key: default_storage_key(),
        }
    }
}

impl GlobalConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Socket address the HTTP API listens on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `http_host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .http_host
            .parse()
            .map_err(|err| AppError::Config(format!("invalid http_host: {err}")))?;
        Ok(SocketAddr::new(ip, self.http_port))
    }

    /// Whether the remote API should run against an in-memory database.
    #[must_use]
    pub fn uses_memory_db(&self) -> bool {
        self.db_path == MEMORY_DB_PATH
    }

    fn validate(&self) -> Result<()> {
        self.bind_addr()?;
        if self.db_path.trim().is_empty() {
            return Err(AppError::Config("db_path must not be empty".into()));
        }
        if self.storage_path.as_os_str().is_empty() {
            return Err(AppError::Config("storage_path must not be empty".into()));
        }
        if self.storage_key.trim().is_empty() {
            return Err(AppError::Config("storage_key must not be empty".into()));
        }
        Ok(())
    }
}
