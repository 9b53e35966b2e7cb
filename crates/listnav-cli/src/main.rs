use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use listnav_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "listnav")]
#[command(author, version, about = "Keyboard and mouse driven list picker for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick an item in the TUI; the choice is printed to stdout
    Run {
        /// Read items from a file, one per line ("-" for stdin)
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,
        /// Generate numbered demo items instead of reading a file
        #[arg(short = 'n', long, default_value_t = 100)]
        count: usize,
    },
    /// Show the effective key bindings
    Keys,
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Log to a file under the data dir; the terminal belongs to the TUI
fn init_logging(config: &AppConfig) -> Result<()> {
    let data_dir = config.data_dir();
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data dir {}", data_dir.display()))?;
    let log_path = config.log_path();
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(log_file)),
        )
        .init();

    Ok(())
}

/// Load the config file and start logging
fn load_config() -> Result<Arc<AppConfig>> {
    let config = Arc::new(AppConfig::load()?);
    init_logging(&config)?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Run {
        file: None,
        count: 100,
    });

    // Handle commands. `config path` and `config init` never read the config
    // file, so a broken one can still be located and replaced.
    match command {
        Commands::Run { file, count } => commands::run::run(load_config()?, file, count),
        Commands::Keys => commands::keys::run(&*load_config()?),
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::path(),
            ConfigAction::Show => commands::config::show(&*load_config()?),
            ConfigAction::Init { force } => commands::config::init(force),
        },
    }
}
