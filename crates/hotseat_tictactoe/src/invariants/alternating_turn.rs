//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{Game, Marker, Phase, Square};

/// Invariant: players alternate, X first.
///
/// X has either as many marks on the board as O or exactly one more. While
/// the game runs, the active player is whoever is behind; once it has ended,
/// the active player is whoever moved last.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let squares = game.board().snapshot();
        let count = |marker| {
            squares
                .iter()
                .filter(|s| **s == Square::Occupied(marker))
                .count()
        };
        let (x_count, o_count) = (count(Marker::X), count(Marker::O));

        if x_count != o_count && x_count != o_count + 1 {
            return false;
        }

        let Ok(active) = game.current_player() else {
            return x_count == 0;
        };
        let behind = if x_count == o_count { Marker::X } else { Marker::O };

        match game.phase() {
            Phase::Uninitialized => false,
            Phase::InProgress => active.marker() == behind,
            Phase::Ended => active.marker() == behind.opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
