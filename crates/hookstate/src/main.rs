use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hookstate::Session;
use hookstate_config::AppConfig;

/// Drive a counter with bounded undo/redo history from the terminal.
#[derive(Parser, Debug)]
#[command(name = "hookstate", version, about)]
struct Cli {
    /// Number of history entries to keep (overrides the config file).
    #[arg(long)]
    capacity: Option<usize>,

    /// Starting value of the counter.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    initial: i64,

    /// Path to the JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_or_create(&config_path);

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!(config = %config_path.display(), "Starting hookstate");

    let mut history = config.history;
    if let Some(capacity) = cli.capacity {
        history.capacity = capacity;
    }

    let mut session = Session::new(cli.initial, &history, config.show_previous)
        .context("Failed to create history store")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), stdout.lock())?;

    tracing::info!(changes = session.change_count(), "Session finished");
    Ok(())
}
