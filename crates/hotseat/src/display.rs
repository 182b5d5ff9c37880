//! Presentation logic shared by the terminal UI and script mode.
//!
//! The controller turns user intents ("start", "restart", "play cell N")
//! into engine calls and keeps the status line in step with the result.
//! It knows nothing about terminals, so it can be driven from tests.

use crate::HotseatConfig;
use hotseat_tictactoe::{Game, GameError, Player, Position, RoundOutcome, Square};
use tracing::{debug, info, instrument, warn};

/// Status shown before the first game.
pub const WELCOME: &str = "Press 'n' to start a game";

/// Drives one [`Game`] on behalf of a front end.
#[derive(Debug, Clone)]
pub struct DisplayController {
    game: Game,
    default_names: (String, String),
    status: String,
    notice: Option<String>,
}

impl DisplayController {
    /// Creates a controller with no game started.
    #[instrument(skip(config))]
    pub fn new(config: &HotseatConfig) -> Self {
        Self {
            game: Game::new(),
            default_names: (
                config.default_player1().clone(),
                config.default_player2().clone(),
            ),
            status: WELCOME.to_string(),
            notice: None,
        }
    }

    /// The "start" button: clears the board and seats two players.
    ///
    /// Blank names fall back to the configured defaults.
    #[instrument(skip(self))]
    pub fn start(&mut self, name1: &str, name2: &str) {
        let name1 = pick_name(name1, &self.default_names.0);
        let name2 = pick_name(name2, &self.default_names.1);
        self.game.init_game(name1, name2);
        self.notice = None;
        self.refresh_turn_status();
        info!(status = %self.status, "Started game");
    }

    /// The "start" button with the default names.
    pub fn start_with_defaults(&mut self) {
        self.start("", "");
    }

    /// The "restart" button: same players, empty board, X to move.
    ///
    /// # Errors
    ///
    /// [`GameError::UninitializedSession`] if no game was ever started.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), GameError> {
        if let Err(e) = self.game.reset_game() {
            self.notice = Some(WELCOME.to_string());
            return Err(e);
        }
        self.notice = None;
        self.refresh_turn_status();
        Ok(())
    }

    /// A click on cell `index` (0-8).
    ///
    /// Rejected moves keep the current status and leave a short notice.
    ///
    /// # Errors
    ///
    /// Passes engine errors through after recording them as a notice.
    #[instrument(skip(self))]
    pub fn select(&mut self, index: usize) -> Result<RoundOutcome, GameError> {
        let outcome = match self.game.play_round(index) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "Move failed");
                self.notice = Some(match e {
                    GameError::UninitializedSession => WELCOME.to_string(),
                    ref other => other.to_string(),
                });
                return Err(e);
            }
        };

        match &outcome {
            RoundOutcome::Rejected { reason } => {
                debug!(%reason, "Move rejected");
                self.notice = Some(capitalize(&reason.to_string()));
            }
            RoundOutcome::Continued => {
                self.notice = None;
                self.refresh_turn_status();
            }
            RoundOutcome::Ended { winner } => {
                self.notice = None;
                self.status = match winner {
                    Some(name) => format!("{} wins!", name),
                    None => "It's a tie!".to_string(),
                };
                info!(status = %self.status, "Game over");
            }
        }
        Ok(outcome)
    }

    /// Main status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Transient message about the last rejected action.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Text for each of the nine cells: the marker, or blank.
    pub fn cell_labels(&self) -> [String; 9] {
        self.game.board().snapshot().map(|square| match square {
            Square::Empty => String::new(),
            Square::Occupied(marker) => marker.to_string(),
        })
    }

    /// Cells of the winning line, once someone has won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.game.winner().and_then(Player::winning_line)
    }

    /// The underlying session.
    pub fn game(&self) -> &Game {
        &self.game
    }

    fn refresh_turn_status(&mut self) {
        if let Ok(player) = self.game.current_player() {
            self.status = format!("Current Player: {} ({})", player.name(), player.marker());
        }
    }
}

fn pick_name<'a>(entered: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = entered.trim();
    if trimmed.is_empty() { fallback } else { trimmed }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_name_trims_and_falls_back() {
        assert_eq!(pick_name("  Ada ", "Player 1"), "Ada");
        assert_eq!(pick_name("   ", "Player 1"), "Player 1");
        assert_eq!(pick_name("", "Player 2"), "Player 2");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("cell occupied"), "Cell occupied");
        assert_eq!(capitalize(""), "");
    }
}
