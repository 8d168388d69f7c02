use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use nightroll_infrastructure::ConfigService;

pub fn init(json_logs: bool) -> Result<()> {
    let (paths, _) = super::load_config(json_logs)?;
    let service = ConfigService::new(&paths);

    if service.save_default()? {
        println!("{} {}", "✓ Wrote".green(), paths.config_file().display());
    } else {
        println!(
            "{} {}",
            "Config already exists:".bright_black(),
            paths.config_file().display()
        );
    }
    Ok(())
}

pub fn show(json_logs: bool, data_dir: Option<PathBuf>) -> Result<()> {
    let (paths, config) = super::load_config(json_logs)?;
    let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;

    println!("{}", format!("# {}", paths.config_file().display()).bright_black());
    print!("{}", rendered);

    let paths = super::effective_paths(paths, &config, data_dir);
    println!();
    println!(
        "{}",
        format!("# data dir: {}", paths.data_dir().display()).bright_black()
    );
    println!(
        "{}",
        format!(
            "# store file: {}",
            paths.store_file(&config.storage.store_key).display()
        )
        .bright_black()
    );
    Ok(())
}
