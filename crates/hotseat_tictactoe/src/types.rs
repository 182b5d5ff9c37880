//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Marker a player puts on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Marker {
    /// Marker of the first-named player (moves first).
    #[display("X")]
    X,
    /// Marker of the second-named player.
    #[display("O")]
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square claimed by a marker.
    Occupied(Marker),
}

impl Square {
    /// Returns the marker in this square, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Occupied(marker) => Some(marker),
        }
    }

    /// Returns true if nothing has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}
