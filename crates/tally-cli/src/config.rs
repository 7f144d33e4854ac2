//! Configuration file handling.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tally_core::StoreConfig;

/// Contents of `tally.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Store configuration with the command-line database path applied
    pub fn store_config(&self, db_override: Option<&PathBuf>) -> StoreConfig {
        let mut store = self.store.clone();
        if let Some(path) = db_override {
            store.path = path.clone();
        }
        store
    }
}
