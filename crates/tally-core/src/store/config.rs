use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default busy timeout (ms)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
/// Default prepared statement cache size
pub const DEFAULT_STATEMENT_CACHE_CAPACITY: usize = 16;

/// Configuration for the score store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    pub path: PathBuf,
    /// How long a locked database is waited on before failing (ms)
    pub busy_timeout_ms: u64,
    /// Number of prepared statements kept per connection
    pub statement_cache_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("scores.db"),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            statement_cache_capacity: DEFAULT_STATEMENT_CACHE_CAPACITY,
        }
    }
}

impl StoreConfig {
    /// Default configuration pointing at `path`
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(Error::Config("database path is empty".to_string()));
        }
        if self.statement_cache_capacity == 0 {
            return Err(Error::Config(
                "statement_cache_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for StoreConfig
#[derive(Debug, Clone, Default)]
pub struct StoreConfigBuilder {
    path: Option<PathBuf>,
    busy_timeout_ms: Option<u64>,
    statement_cache_capacity: Option<usize>,
}

impl StoreConfigBuilder {
    /// Set the database file path
    pub fn path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the busy timeout in milliseconds
    pub fn busy_timeout_ms(mut self, ms: u64) -> Self {
        self.busy_timeout_ms = Some(ms);
        self
    }

    /// Set the prepared statement cache size
    pub fn statement_cache_capacity(mut self, capacity: usize) -> Self {
        self.statement_cache_capacity = Some(capacity);
        self
    }

    /// Build the configuration
    pub fn build(self) -> StoreConfig {
        let default = StoreConfig::default();
        StoreConfig {
            path: self.path.unwrap_or(default.path),
            busy_timeout_ms: self.busy_timeout_ms.unwrap_or(default.busy_timeout_ms),
            statement_cache_capacity: self
                .statement_cache_capacity
                .unwrap_or(default.statement_cache_capacity),
        }
    }
}
