//! Configuration service implementation.
//!
//! Loads `AppConfig` from `config.toml` in the config directory.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use nightroll_core::config::AppConfig;
use nightroll_core::{NightrollError, Result};

use crate::paths::NightrollPaths;

/// Configuration service that loads and caches the application configuration.
///
/// A missing file yields the defaults. A present but invalid file is an error.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    pub fn new(paths: &NightrollPaths) -> Self {
        Self::from_path(paths.config_file())
    }

    pub fn from_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<AppConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|e| NightrollError::internal(format!("Config lock poisoned: {}", e)))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load_config()?;

        {
            let mut write_lock = self
                .config
                .write()
                .map_err(|e| NightrollError::internal(format!("Config lock poisoned: {}", e)))?;
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Writes a default config file unless one already exists.
    ///
    /// Returns `true` if a file was written.
    pub fn save_default(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&AppConfig::default())?;
        fs::write(&self.path, content)?;
        info!(path = %self.path.display(), "Wrote default config");
        Ok(true)
    }

    fn load_config(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No config file, using defaults");
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        debug!(path = %self.path.display(), "Loaded config");
        Ok(config)
    }
}
