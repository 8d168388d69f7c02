pub mod config;
pub mod selections;
pub mod spin;
pub mod swipe;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;

use nightroll_core::config::AppConfig;
use nightroll_core::{Item, SelectionStore, SwipeThresholds};
use nightroll_infrastructure::{ConfigService, JsonSelectionRepository, NightrollPaths, logging};

/// Everything a command needs: swipe thresholds and the opened store.
pub struct AppContext {
    pub thresholds: SwipeThresholds,
    pub store: SelectionStore,
}

impl AppContext {
    pub fn bootstrap(json_logs: bool, data_dir: Option<PathBuf>) -> Result<Self> {
        let (paths, config) = load_config(json_logs)?;
        let paths = effective_paths(paths, &config, data_dir);

        let thresholds = config.swipe.thresholds()?;
        let repository = JsonSelectionRepository::for_store_key(&paths, &config.storage.store_key);
        tracing::debug!(path = %repository.path().display(), "Opening selection store");
        let store = SelectionStore::open(Arc::new(repository));

        Ok(Self {
            thresholds,
            store,
        })
    }
}

/// Resolves paths, loads the config and installs logging.
pub fn load_config(json_logs: bool) -> Result<(NightrollPaths, AppConfig)> {
    let paths = NightrollPaths::resolve().context("Failed to resolve nightroll directories")?;
    let config = ConfigService::new(&paths)
        .get_config()
        .with_context(|| format!("Failed to load {}", paths.config_file().display()))?;

    let mut logging_config = config.logging.clone();
    logging_config.json |= json_logs;
    logging::init(&logging_config)?;

    Ok((paths, config))
}

/// Applies the data directory override: the CLI flag, then `storage.data_dir`.
pub fn effective_paths(
    paths: NightrollPaths,
    config: &AppConfig,
    data_dir: Option<PathBuf>,
) -> NightrollPaths {
    match data_dir.or_else(|| config.storage.data_dir.as_ref().map(PathBuf::from)) {
        Some(dir) => paths.with_data_dir(dir),
        None => paths,
    }
}

pub(crate) fn print_item_line(index: usize, item: &Item) {
    let subtitle = item
        .subtitle
        .as_deref()
        .map(|s| format!(" - {}", s))
        .unwrap_or_default();
    println!(
        "{:>3}. {} {}{}",
        index + 1,
        format!("[{}]", item.category.to_uppercase()).bright_black(),
        item.title.bold(),
        subtitle.bright_black()
    );
}
