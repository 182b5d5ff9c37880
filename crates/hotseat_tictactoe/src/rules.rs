//! Win lines.

use crate::Position;

/// The eight lines that win the game: rows, then columns, then diagonals.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first win line fully contained in `moves`.
pub fn completed_line(moves: &[Position]) -> Option<[Position; 3]> {
    if moves.len() < 3 {
        return None;
    }
    WIN_LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| moves.contains(pos)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_line_with_two_moves() {
        assert_eq!(completed_line(&[Position::TopLeft, Position::TopCenter]), None);
    }

    #[test]
    fn test_line_found_regardless_of_order() {
        let moves = [Position::BottomLeft, Position::Center, Position::TopRight];
        assert_eq!(
            completed_line(&moves),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_scattered_moves_do_not_win() {
        let moves = [
            Position::TopLeft,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomCenter,
        ];
        assert_eq!(completed_line(&moves), None);
    }

    #[test]
    fn test_every_line_index_set() {
        let indices: Vec<[usize; 3]> = WIN_LINES
            .iter()
            .map(|line| line.map(Position::to_index))
            .collect();
        assert_eq!(
            indices,
            vec![
                [0, 1, 2],
                [3, 4, 5],
                [6, 7, 8],
                [0, 3, 6],
                [1, 4, 7],
                [2, 5, 8],
                [0, 4, 8],
                [2, 4, 6],
            ]
        );
    }
}
