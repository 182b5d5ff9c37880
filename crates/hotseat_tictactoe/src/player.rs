//! A seated player and the cells they have claimed.

use crate::{Marker, Position, rules};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two people at the board.
///
/// Name and marker are fixed at creation; only the move list changes.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_more::Display)]
#[display("{name} ({marker})")]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker placed by this player.
    #[getter(copy)]
    marker: Marker,
    /// Claimed cells, in the order they were played.
    #[getter(skip)]
    moves: Vec<Position>,
}

impl Player {
    /// Creates a player with no moves yet.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, marker: Marker) -> Self {
        Self {
            name: name.as_ref().to_string(),
            marker,
            moves: Vec::new(),
        }
    }

    /// Appends a claimed cell. Duplicate protection is the board's job.
    pub fn record_move(&mut self, pos: Position) {
        self.moves.push(pos);
    }

    /// Returns a copy of the move list.
    pub fn moves(&self) -> Vec<Position> {
        self.moves.clone()
    }

    /// Number of moves played so far.
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Forgets all moves, keeping name and marker.
    pub fn reset(&mut self) {
        self.moves.clear();
    }

    /// True if the moves contain a complete win line.
    pub fn has_won(&self) -> bool {
        self.winning_line().is_some()
    }

    /// The first win line this player has completed.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::completed_line(&self.moves)
    }
}
