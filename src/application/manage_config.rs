//! Config management use case

use crate::error::Result;
use crate::infrastructure::config::CONFIG_FILE_NAME;
use crate::infrastructure::{Config, ResolvedConfig};
use std::path::PathBuf;

/// Service for reading and writing configuration keys
pub struct ConfigService {
    resolved: ResolvedConfig,
}

impl ConfigService {
    pub fn new(resolved: ResolvedConfig) -> Self {
        ConfigService { resolved }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        self.resolved.config.get(key)
    }

    /// Set a config value and persist it; returns the file written
    pub fn set(&mut self, key: &str, value: &str) -> Result<PathBuf> {
        self.resolved.config.set(key, value)?;

        let path = match &self.resolved.path {
            Some(path) => path.clone(),
            None => std::env::current_dir()?.join(CONFIG_FILE_NAME),
        };
        self.resolved.config.save_to_file(&path)?;
        self.resolved.path = Some(path.clone());
        Ok(path)
    }

    /// List all config values
    pub fn list(&self) -> &Config {
        &self.resolved.config
    }
}
