//! Serializable snapshot of a session.

use crate::{Game, Marker, Phase, Player, RoundOutcome};
use serde::{Deserialize, Serialize};

/// Everything a front end needs to draw a session, detached from the `Game`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Lifecycle phase.
    pub phase: Phase,
    /// Cell contents in row-major order.
    pub cells: Vec<Option<Marker>>,
    /// Seated players, X first. Empty before the first game.
    pub players: Vec<Player>,
    /// Name of the player to move (or who moved last once ended).
    pub current_player: Option<String>,
    /// Name of the winner, if the game was won.
    pub winner: Option<String>,
    /// Result of the latest round, if any was played since the last start.
    pub last_outcome: Option<RoundOutcome>,
}

impl From<&Game> for SessionView {
    fn from(game: &Game) -> Self {
        Self {
            phase: game.phase(),
            cells: game.board().snapshot().iter().map(|s| s.marker()).collect(),
            players: game
                .players()
                .map(|(first, second)| vec![first.clone(), second.clone()])
                .unwrap_or_default(),
            current_player: game.current_player().ok().map(|p| p.name().clone()),
            winner: game.winner().map(|p| p.name().clone()),
            last_outcome: game.last_outcome().cloned(),
        }
    }
}

impl Game {
    /// Detached, serializable view of this session.
    pub fn view(&self) -> SessionView {
        SessionView::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_of_uninitialized_game() {
        let view = Game::new().view();
        assert_eq!(view.phase, Phase::Uninitialized);
        assert_eq!(view.cells, vec![None; 9]);
        assert!(view.players.is_empty());
        assert_eq!(view.current_player, None);
        assert_eq!(view.last_outcome, None);
    }

    #[test]
    fn test_view_after_win() {
        let (game, _) = Game::replay("Ada", "Grace", &[0, 3, 1, 4, 2]).unwrap();
        let view = game.view();
        assert_eq!(view.phase, Phase::Ended);
        assert_eq!(view.winner.as_deref(), Some("Ada"));
        assert_eq!(view.cells[3], Some(Marker::O));
        assert_eq!(view.players.len(), 2);
        assert_eq!(view.last_outcome.as_ref().and_then(RoundOutcome::winner), Some("Ada"));
    }
}
