//! Application configuration models.
//!
//! Loaded from `config.toml`. Every section and key is optional; missing
//! values fall back to their defaults.

use serde::{Deserialize, Serialize};

use crate::decision::gesture::{
    DEFAULT_DISTANCE_THRESHOLD, DEFAULT_VELOCITY_THRESHOLD, SwipeThresholds,
};
use crate::error::Result;

/// Identifier of the persisted selection record.
pub const DEFAULT_STORE_KEY: &str = "nr-selections-v1";

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub swipe: SwipeConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Checks values that deserialize fine but are unusable.
    pub fn validate(&self) -> Result<()> {
        self.swipe.thresholds().map(|_| ())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SwipeConfig {
    #[serde(default = "default_distance_threshold")]
    pub distance_threshold: f64,
    #[serde(default = "default_velocity_threshold")]
    pub velocity_threshold: f64,
}

fn default_distance_threshold() -> f64 {
    DEFAULT_DISTANCE_THRESHOLD
}

fn default_velocity_threshold() -> f64 {
    DEFAULT_VELOCITY_THRESHOLD
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            distance_threshold: default_distance_threshold(),
            velocity_threshold: default_velocity_threshold(),
        }
    }
}

impl SwipeConfig {
    pub fn thresholds(&self) -> Result<SwipeThresholds> {
        SwipeThresholds::new(self.distance_threshold, self.velocity_threshold)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_store_key")]
    pub store_key: String,
    /// Overrides the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
}

fn default_store_key() -> String {
    DEFAULT_STORE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            store_key: default_store_key(),
            data_dir: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
