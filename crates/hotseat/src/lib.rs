//! Hotseat: two-player tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Engine**: [`hotseat_tictactoe`] owns the board, players and turns
//! - **Display**: [`DisplayController`] maps user intents onto the engine and
//!   keeps the status line
//! - **Script**: non-interactive replay of a move list
//! - **Config**: optional `hotseat.toml`

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod display;
pub mod script;

pub use config::{ConfigError, DEFAULT_CONFIG_PATH, HotseatConfig};
pub use display::DisplayController;
