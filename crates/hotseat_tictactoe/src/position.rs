//! Typed cell positions on the 3x3 board.

use crate::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the tic-tac-toe board, numbered 0-8 in row-major order.
///
/// Raw indices coming from the UI are turned into a `Position` once, at the
/// edge of the engine; past that point an out-of-range cell cannot exist.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Position {
    /// Top-left (position 0)
    #[display("Top-left")]
    TopLeft,
    /// Top-center (position 1)
    #[display("Top-center")]
    TopCenter,
    /// Top-right (position 2)
    #[display("Top-right")]
    TopRight,
    /// Middle-left (position 3)
    #[display("Middle-left")]
    MiddleLeft,
    /// Center (position 4)
    #[display("Center")]
    Center,
    /// Middle-right (position 5)
    #[display("Middle-right")]
    MiddleRight,
    /// Bottom-left (position 6)
    #[display("Bottom-left")]
    BottomLeft,
    /// Bottom-center (position 7)
    #[display("Bottom-center")]
    BottomCenter,
    /// Bottom-right (position 8)
    #[display("Bottom-right")]
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row (0-2) of this position.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column (0-2) of this position.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Parses a 0-8 number or a label such as "center" (case-insensitive).
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        <Position as strum::IntoEnumIterator>::iter().find(|pos| pos.to_string().eq_ignore_ascii_case(s))
    }
}

impl TryFrom<usize> for Position {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(GameError::InvalidIndex(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_for_corners() {
        assert_eq!(Position::TopLeft.to_index(), 0);
        assert_eq!(Position::Center.to_index(), 4);
        assert_eq!(Position::BottomRight.to_index(), 8);
        assert_eq!(Position::from_index(6), Some(Position::BottomLeft));
    }

    #[test]
    fn test_out_of_range_is_invalid_index() {
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::try_from(9), Err(GameError::InvalidIndex(9)));
        assert_eq!(
            Position::try_from(usize::MAX),
            Err(GameError::InvalidIndex(usize::MAX))
        );
    }

    #[test]
    fn test_row_and_col() {
        assert_eq!((Position::MiddleRight.row(), Position::MiddleRight.col()), (1, 2));
        assert_eq!((Position::BottomLeft.row(), Position::BottomLeft.col()), (2, 0));
    }

    #[test]
    fn test_parse_label_or_number() {
        assert_eq!(Position::from_label_or_number("4"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number(" top-right "), Some(Position::TopRight));
        assert_eq!(Position::from_label_or_number("CENTER"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number("10"), None);
        assert_eq!(Position::from_label_or_number("nowhere"), None);
    }

    #[test]
    fn test_display_is_the_label() {
        assert_eq!(Position::TopLeft.to_string(), "Top-left");
        assert_eq!(Position::BottomCenter.to_string(), "Bottom-center");
    }
}
