use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::AppContext;

#[derive(Parser)]
#[command(name = "nightroll")]
#[command(about = "Nightroll - swipe through options, then spin over your likes", long_about = None)]
struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    /// Directory holding the persisted selections
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Swipe through a category deck (bar, show, workout, random, ...)
    Swipe { category: String },
    /// List liked items
    Likes {
        #[arg(long)]
        category: Option<String>,
    },
    /// List passed items
    Passes {
        #[arg(long)]
        category: Option<String>,
    },
    /// Remove an item from the liked list
    Unlike { category: String, id: String },
    /// Forget every decision in a category
    Clear { category: String },
    /// Pick a random liked item
    Spin,
    /// List the built-in categories
    Categories,
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default config file if none exists
    Init,
    /// Print the effective configuration
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Init => commands::config::init(cli.json_logs)?,
            ConfigAction::Show => commands::config::show(cli.json_logs, cli.data_dir)?,
        },
        Commands::Categories => commands::selections::categories(),
        command => {
            let mut ctx = AppContext::bootstrap(cli.json_logs, cli.data_dir)?;
            match command {
                Commands::Swipe { category } => commands::swipe::run(&mut ctx, &category)?,
                Commands::Likes { category } => commands::selections::likes(&ctx, category.as_deref()),
                Commands::Passes { category } => {
                    commands::selections::passes(&ctx, category.as_deref())
                }
                Commands::Unlike { category, id } => {
                    commands::selections::unlike(&mut ctx, &category, &id)
                }
                Commands::Clear { category } => commands::selections::clear(&mut ctx, &category),
                Commands::Spin => commands::spin::run(&ctx),
                Commands::Config { .. } | Commands::Categories => {}
            }
        }
    }

    Ok(())
}
