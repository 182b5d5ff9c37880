//! Hotseat - unified CLI.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use hotseat::{HotseatConfig, script};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { player1, player2 } => {
            let config = HotseatConfig::load(cli.config.as_deref())?.with_names(player1, player2);
            init_file_logging(config.log_file())?;
            info!("Starting hotseat TUI");
            tui::run(&config)
        }
        Command::Play {
            moves,
            player1,
            player2,
            json,
        } => {
            init_stderr_logging();
            let config = HotseatConfig::load(cli.config.as_deref())?.with_names(player1, player2);
            let stdout = std::io::stdout();
            script::run(
                &config,
                config.default_player1(),
                config.default_player2(),
                &moves,
                json,
                &mut stdout.lock(),
            )
        }
    }
}

/// `RUST_LOG` if set, otherwise `default`.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Logs to a file so output does not interfere with the TUI.
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Keeps stdout clean for the report.
fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .try_init();
}
