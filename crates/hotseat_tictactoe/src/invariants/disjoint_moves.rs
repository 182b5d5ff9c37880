//! Each cell is claimed at most once across both players.

use super::Invariant;
use crate::Game;
use std::collections::HashSet;

/// Invariant: no position appears twice in one move list, and the two
/// players' move lists share nothing.
pub struct DisjointMovesInvariant;

impl Invariant<Game> for DisjointMovesInvariant {
    fn holds(game: &Game) -> bool {
        let Some((first, second)) = game.players() else {
            return true;
        };

        let mut seen = HashSet::new();
        first
            .moves()
            .into_iter()
            .chain(second.moves())
            .all(|pos| seen.insert(pos))
    }

    fn description() -> &'static str {
        "Each cell is claimed by at most one move"
    }
}
