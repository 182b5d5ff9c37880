//! Hotseat tic-tac-toe rule engine.
//!
//! Two people share one board. The engine owns the board, both players and
//! the turn order; a front end only calls into [`Game`] and draws what comes
//! back.
//!
//! # Example
//!
//! ```
//! use hotseat_tictactoe::{Game, RoundOutcome};
//!
//! let mut game = Game::new();
//! game.init_game("Ada", "Grace");
//!
//! assert_eq!(game.play_round(4)?, RoundOutcome::Continued);
//! assert!(!game.play_round(4)?.accepted());
//! # Ok::<(), hotseat_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
pub mod invariants;
mod outcome;
mod player;
mod position;
mod rules;
mod types;
mod view;

pub use board::Board;
pub use error::GameError;
pub use game::Game;
pub use outcome::{Phase, RejectReason, RoundOutcome};
pub use player::Player;
pub use position::Position;
pub use rules::{WIN_LINES, completed_line};
pub use types::{Marker, Square};
pub use view::SessionView;
