//! Keyboard handling.

use crossterm::event::KeyCode;
use hotseat_tictactoe::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to another cell.
    Cursor(Position),
    /// Play a cell.
    Play(Position),
    /// Start a new game with the configured names.
    Start,
    /// Restart with the same players.
    Restart,
    /// Leave the program.
    Quit,
    /// Nothing to do.
    Ignore,
}

/// Maps a key to an action, given where the cursor is.
pub fn action_for(cursor: Position, key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('n') => Action::Start,
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Play(cursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map_or(Action::Ignore, Action::Play),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Action::Cursor(move_cursor(cursor, key))
        }
        _ => Action::Ignore,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Left), Position::BottomLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
    }

    #[test]
    fn test_digit_keys_are_one_based() {
        assert_eq!(
            action_for(Position::Center, KeyCode::Char('1')),
            Action::Play(Position::TopLeft)
        );
        assert_eq!(
            action_for(Position::Center, KeyCode::Char('9')),
            Action::Play(Position::BottomRight)
        );
        assert_eq!(action_for(Position::Center, KeyCode::Char('0')), Action::Ignore);
    }

    #[test]
    fn test_buttons() {
        assert_eq!(action_for(Position::Center, KeyCode::Enter), Action::Play(Position::Center));
        assert_eq!(action_for(Position::Center, KeyCode::Char('n')), Action::Start);
        assert_eq!(action_for(Position::Center, KeyCode::Char('r')), Action::Restart);
        assert_eq!(action_for(Position::Center, KeyCode::Esc), Action::Quit);
    }
}
