//! The 3x3 grid.

use crate::{Marker, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Cells are write-once: [`Board::place`] refuses an occupied cell, and only
/// [`Board::reset`] empties cells again.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all nine squares.
    pub fn snapshot(&self) -> [Square; 9] {
        self.squares
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Writes `marker` into an empty cell.
    ///
    /// Returns `false` without touching the board when the cell is taken.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, marker: Marker) -> bool {
        if !self.is_empty(pos) {
            debug!(occupant = ?self.get(pos), "Cell already taken");
            return false;
        }
        self.squares[pos.to_index()] = Square::Occupied(marker);
        true
    }

    /// Empties every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Returns true iff every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// Positions that can still be played.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their 1-based key so the grid doubles as a keypad hint.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                let symbol = match self.squares[idx] {
                    Square::Empty => (idx + 1).to_string(),
                    Square::Occupied(marker) => marker.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
