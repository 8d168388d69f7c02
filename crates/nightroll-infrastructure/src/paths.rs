//! Unified path management for nightroll files.
//!
//! ```text
//! ~/.config/nightroll/           # Config directory
//! └── config.toml                # Application configuration
//!
//! ~/.local/share/nightroll/      # Data directory
//! └── nr-selections-v1.json      # Persisted selections (named by store key)
//! ```
//!
//! `NIGHTROLL_CONFIG_DIR` and `NIGHTROLL_DATA_DIR` override the platform
//! directories.

use std::path::{Path, PathBuf};

use nightroll_core::NightrollError;

const APP_DIR_NAME: &str = "nightroll";

pub const CONFIG_DIR_ENV: &str = "NIGHTROLL_CONFIG_DIR";
pub const DATA_DIR_ENV: &str = "NIGHTROLL_DATA_DIR";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform directory could not be determined.
    DirNotFound(&'static str),
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::DirNotFound(kind) => write!(f, "Cannot find {} directory", kind),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for NightrollError {
    fn from(err: PathError) -> Self {
        NightrollError::config(err.to_string())
    }
}

/// Resolved config and data directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NightrollPaths {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl NightrollPaths {
    /// Uses explicit directories, bypassing platform lookup.
    pub fn new(config_dir: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            data_dir: data_dir.into(),
        }
    }

    /// Resolves from environment overrides, then platform directories.
    pub fn resolve() -> Result<Self, PathError> {
        let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .ok_or(PathError::DirNotFound("config"))?
                .join(APP_DIR_NAME),
        };
        let data_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .ok_or(PathError::DirNotFound("data"))?
                .join(APP_DIR_NAME),
        };
        Ok(Self {
            config_dir,
            data_dir,
        })
    }

    /// Returns a copy with the data directory replaced.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// File holding the persisted record for `store_key`.
    pub fn store_file(&self, store_key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", store_key))
    }
}
