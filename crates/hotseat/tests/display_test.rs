//! Tests for the terminal-independent display controller.

use hotseat::display::WELCOME;
use hotseat::{DisplayController, HotseatConfig};
use hotseat_tictactoe::{GameError, Phase, Position, RejectReason};

fn display() -> DisplayController {
    DisplayController::new(&HotseatConfig::default())
}

#[test]
fn test_welcome_before_start() {
    let mut display = display();
    assert_eq!(display.status(), WELCOME);
    assert_eq!(display.select(4), Err(GameError::UninitializedSession));
    assert_eq!(display.notice(), Some(WELCOME));
    assert!(display.restart().is_err());
}

#[test]
fn test_start_shows_current_player() {
    let mut display = display();
    display.start("Alice", "Bob");
    assert_eq!(display.status(), "Current Player: Alice (X)");

    display.select(4).unwrap();
    assert_eq!(display.status(), "Current Player: Bob (O)");
    assert_eq!(display.cell_labels()[4], "X");
    assert_eq!(display.cell_labels()[0], "");
}

#[test]
fn test_blank_names_use_defaults() {
    let mut display = display();
    display.start("   ", "");
    assert_eq!(display.status(), "Current Player: Player 1 (X)");
    display.select(0).unwrap();
    assert_eq!(display.status(), "Current Player: Player 2 (O)");
}

#[test]
fn test_configured_defaults() {
    let config = HotseatConfig::default().with_names(Some("Ada".into()), Some("Grace".into()));
    let mut display = DisplayController::new(&config);
    display.start_with_defaults();
    assert_eq!(display.status(), "Current Player: Ada (X)");
}

#[test]
fn test_cli_names_match_typed_names() {
    let config = HotseatConfig::default().with_names(Some("  Ada ".into()), Some("\tGrace".into()));
    assert_eq!(config.default_player1(), "Ada");
    assert_eq!(config.default_player2(), "Grace");

    let mut from_config = DisplayController::new(&config);
    from_config.start_with_defaults();
    let mut typed = DisplayController::new(&HotseatConfig::default());
    typed.start("  Ada ", "\tGrace");
    assert_eq!(from_config.status(), typed.status());
    assert_eq!(from_config.game().view().players, typed.game().view().players);
}

#[test]
fn test_win_status_and_highlight() {
    let mut display = display();
    display.start("Alice", "Bob");
    for index in [0, 3, 1, 4, 2] {
        display.select(index).unwrap();
    }
    assert_eq!(display.status(), "Alice wins!");
    assert_eq!(
        display.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );

    let outcome = display.select(8).unwrap();
    assert_eq!(outcome.reason(), Some(RejectReason::GameOver));
    assert_eq!(display.status(), "Alice wins!");
    assert_eq!(display.notice(), Some("Game already over"));
}

#[test]
fn test_tie_status() {
    let mut display = display();
    display.start("Alice", "Bob");
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        display.select(index).unwrap();
    }
    assert_eq!(display.status(), "It's a tie!");
    assert_eq!(display.winning_line(), None);
}

#[test]
fn test_occupied_cell_keeps_status() {
    let mut display = display();
    display.start("Alice", "Bob");
    display.select(4).unwrap();
    let outcome = display.select(4).unwrap();

    assert!(!outcome.accepted());
    assert_eq!(display.status(), "Current Player: Bob (O)");
    assert_eq!(display.notice(), Some("Cell occupied"));

    display.select(0).unwrap();
    assert_eq!(display.notice(), None);
}

#[test]
fn test_invalid_index_is_reported() {
    let mut display = display();
    display.start("Alice", "Bob");
    assert_eq!(display.select(11), Err(GameError::InvalidIndex(11)));
    assert!(display.notice().unwrap().contains("11"));
}

#[test]
fn test_restart_keeps_players() {
    let mut display = display();
    display.start("Alice", "Bob");
    for index in [0, 3, 1, 4, 2] {
        display.select(index).unwrap();
    }
    display.restart().unwrap();

    assert_eq!(display.status(), "Current Player: Alice (X)");
    assert_eq!(display.game().phase(), Phase::InProgress);
    assert!(display.cell_labels().iter().all(String::is_empty));
}

#[test]
fn test_start_again_clears_board_and_renames() {
    let mut display = display();
    display.start("Alice", "Bob");
    display.select(4).unwrap();

    display.start("Carol", "Dave");
    assert_eq!(display.status(), "Current Player: Carol (X)");
    assert!(display.game().board().is_empty(Position::Center));
}
