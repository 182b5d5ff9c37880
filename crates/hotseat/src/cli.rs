//! Command-line interface for hotseat.

use clap::{Parser, Subcommand};
use hotseat::script;
use std::path::PathBuf;

/// Hotseat - two-player tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "hotseat")]
#[command(about = "Two-player tic-tac-toe on one terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./hotseat.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui {
        /// Name of the X player
        #[arg(long)]
        player1: Option<String>,

        /// Name of the O player
        #[arg(long)]
        player2: Option<String>,
    },

    /// Replay a list of cells and print the result
    Play {
        /// Cells to play in order, comma separated: 0-8 or names like "center"
        #[arg(long, value_delimiter = ',', required = true, value_parser = script::parse_cell)]
        moves: Vec<usize>,

        /// Name of the X player
        #[arg(long)]
        player1: Option<String>,

        /// Name of the O player
        #[arg(long)]
        player2: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
