//! Board/move agreement: the grid and the players' move lists describe the same game.

use super::Invariant;
use crate::{Game, Square};

/// Invariant: every occupied cell belongs to exactly the player whose
/// marker it holds, and every recorded move is on the board.
pub struct BoardMatchesMovesInvariant;

impl Invariant<Game> for BoardMatchesMovesInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let Some((first, second)) = game.players() else {
            return board.snapshot().iter().all(|s| s.is_empty());
        };

        let recorded = first.move_count() + second.move_count();
        let occupied = board.snapshot().iter().filter(|s| !s.is_empty()).count();
        if recorded != occupied {
            return false;
        }

        [first, second].into_iter().all(|player| {
            player
                .moves()
                .into_iter()
                .all(|pos| board.get(pos) == Square::Occupied(player.marker()))
        })
    }

    fn description() -> &'static str {
        "Board cells match the players' recorded moves"
    }
}
