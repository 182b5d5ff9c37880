//! Session phases and the result of a single round.

use crate::Position;
use serde::{Deserialize, Serialize};

/// Lifecycle phase of a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display)]
pub enum Phase {
    /// No players have been seated yet.
    #[default]
    #[display("Uninitialized")]
    Uninitialized,
    /// Moves are being accepted.
    #[display("In progress")]
    InProgress,
    /// Someone won or the board filled up.
    #[display("Ended")]
    Ended,
}

/// Why a move was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RejectReason {
    /// The game already has a result.
    #[display("game already over")]
    GameOver,
    /// Someone already played this cell.
    #[display("cell occupied")]
    CellOccupied(Position),
}

/// What happened when a move was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RoundOutcome {
    /// The move was not applied; nothing changed.
    Rejected {
        /// Why the move was refused.
        reason: RejectReason,
    },
    /// The move was applied and the turn passed to the other player.
    Continued,
    /// The move was applied and finished the game.
    Ended {
        /// Name of the winner, or `None` for a draw.
        winner: Option<String>,
    },
}

impl RoundOutcome {
    /// True if the board changed.
    pub fn accepted(&self) -> bool {
        !matches!(self, RoundOutcome::Rejected { .. })
    }

    /// True if this move finished the game.
    pub fn ended(&self) -> bool {
        matches!(self, RoundOutcome::Ended { .. })
    }

    /// Winner's name when this move won the game.
    pub fn winner(&self) -> Option<&str> {
        match self {
            RoundOutcome::Ended { winner } => winner.as_deref(),
            _ => None,
        }
    }

    /// True if this move filled the board without a winner.
    pub fn is_draw(&self) -> bool {
        matches!(self, RoundOutcome::Ended { winner: None })
    }

    /// Rejection reason, if the move was refused.
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            RoundOutcome::Rejected { reason } => Some(*reason),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::Rejected { reason } => write!(f, "Rejected: {}", reason),
            RoundOutcome::Continued => write!(f, "Accepted"),
            RoundOutcome::Ended { winner: Some(name) } => write!(f, "{} wins!", name),
            RoundOutcome::Ended { winner: None } => write!(f, "It's a tie!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_for_each_variant() {
        let rejected = RoundOutcome::Rejected {
            reason: RejectReason::CellOccupied(Position::Center),
        };
        assert!(!rejected.accepted());
        assert!(!rejected.ended());
        assert_eq!(rejected.reason(), Some(RejectReason::CellOccupied(Position::Center)));

        assert!(RoundOutcome::Continued.accepted());
        assert!(!RoundOutcome::Continued.ended());
        assert_eq!(RoundOutcome::Continued.reason(), None);

        let won = RoundOutcome::Ended {
            winner: Some("Ada".to_string()),
        };
        assert!(won.accepted() && won.ended());
        assert_eq!(won.winner(), Some("Ada"));
        assert!(!won.is_draw());

        let draw = RoundOutcome::Ended { winner: None };
        assert!(draw.is_draw());
        assert_eq!(draw.winner(), None);
    }

    #[test]
    fn test_reason_text() {
        assert_eq!(RejectReason::GameOver.to_string(), "game already over");
        assert_eq!(
            RejectReason::CellOccupied(Position::TopLeft).to_string(),
            "cell occupied"
        );
    }
}
