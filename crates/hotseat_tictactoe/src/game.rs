//! The game controller: two seated players, one board, and the turn order.

use crate::invariants::{InvariantSet, SessionInvariants};
use crate::{Board, GameError, Marker, Phase, Player, Position, RejectReason, RoundOutcome};
use tracing::{debug, info, instrument, warn};

/// Both seats at the table. The first seat always plays X.
#[derive(Debug, Clone)]
struct Roster {
    first: Player,
    second: Player,
}

impl Roster {
    fn seat(&self, marker: Marker) -> &Player {
        match marker {
            Marker::X => &self.first,
            Marker::O => &self.second,
        }
    }

    fn seat_mut(&mut self, marker: Marker) -> &mut Player {
        match marker {
            Marker::X => &mut self.first,
            Marker::O => &mut self.second,
        }
    }
}

/// A single tic-tac-toe session.
///
/// The controller owns the board and both players; nothing else writes to
/// them. A fresh `Game` is [`Phase::Uninitialized`] until
/// [`init_game`](Game::init_game) seats two players.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    roster: Option<Roster>,
    active: Marker,
    phase: Phase,
    last_outcome: Option<RoundOutcome>,
}

impl Game {
    /// Creates an empty, uninitialized session.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            roster: None,
            active: Marker::X,
            phase: Phase::Uninitialized,
            last_outcome: None,
        }
    }

    /// Seats two new players and starts a game on an empty board.
    ///
    /// The first name plays X and moves first. Any previous session state,
    /// board included, is discarded.
    #[instrument(skip(self, name1, name2), fields(player1 = %name1.as_ref(), player2 = %name2.as_ref()))]
    pub fn init_game(&mut self, name1: impl AsRef<str>, name2: impl AsRef<str>) {
        self.board.reset();
        self.roster = Some(Roster {
            first: Player::new(name1, Marker::X),
            second: Player::new(name2, Marker::O),
        });
        self.active = Marker::X;
        self.phase = Phase::InProgress;
        self.last_outcome = None;
        info!("Game started");
    }

    /// Plays the active player's marker at cell `index` (0-8).
    ///
    /// Occupied cells and finished games come back as
    /// [`RoundOutcome::Rejected`] with nothing changed. A win is detected
    /// before a full board, so a ninth move that completes a line is a win.
    ///
    /// # Errors
    ///
    /// [`GameError::UninitializedSession`] before `init_game`,
    /// [`GameError::InvalidIndex`] when `index` is not a cell. Neither
    /// mutates the session.
    #[instrument(skip(self), fields(phase = %self.phase, active = %self.active))]
    pub fn play_round(&mut self, index: usize) -> Result<RoundOutcome, GameError> {
        let roster = self.roster.as_mut().ok_or_else(|| {
            warn!("Move requested before a game was started");
            GameError::UninitializedSession
        })?;
        let pos = Position::try_from(index).inspect_err(|_| {
            warn!("Move requested outside the board");
        })?;

        if self.phase == Phase::Ended {
            debug!("Move rejected, game is over");
            return Ok(self.settle(RoundOutcome::Rejected {
                reason: RejectReason::GameOver,
            }));
        }

        let player = roster.seat_mut(self.active);
        if !self.board.place(pos, player.marker()) {
            debug!(position = %pos, "Move rejected, cell occupied");
            return Ok(self.settle(RoundOutcome::Rejected {
                reason: RejectReason::CellOccupied(pos),
            }));
        }
        player.record_move(pos);

        let outcome = if player.has_won() {
            self.phase = Phase::Ended;
            info!(winner = %player.name(), marker = %player.marker(), "Game won");
            RoundOutcome::Ended {
                winner: Some(player.name().clone()),
            }
        } else if self.board.is_full() {
            self.phase = Phase::Ended;
            info!("Game drawn");
            RoundOutcome::Ended { winner: None }
        } else {
            self.active = self.active.opponent();
            debug!(position = %pos, next = %self.active, "Move accepted");
            RoundOutcome::Continued
        };

        if cfg!(debug_assertions) {
            self.verify()?;
        }

        Ok(self.settle(outcome))
    }

    /// Remembers `outcome` as the latest round and hands it back.
    fn settle(&mut self, outcome: RoundOutcome) -> RoundOutcome {
        self.last_outcome = Some(outcome.clone());
        outcome
    }

    /// Starts over with the same two players.
    ///
    /// Clears the board and both move lists and hands the first move back to
    /// X. Works from any phase once a game has been initialized.
    ///
    /// # Errors
    ///
    /// [`GameError::UninitializedSession`] if no players are seated.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn reset_game(&mut self) -> Result<(), GameError> {
        let roster = self
            .roster
            .as_mut()
            .ok_or(GameError::UninitializedSession)?;
        roster.first.reset();
        roster.second.reset();
        self.board.reset();
        self.active = Marker::X;
        self.phase = Phase::InProgress;
        self.last_outcome = None;
        info!("Game restarted");
        Ok(())
    }

    /// The player whose turn it is (or who made the final move).
    ///
    /// # Errors
    ///
    /// [`GameError::UninitializedSession`] if no players are seated.
    pub fn current_player(&self) -> Result<&Player, GameError> {
        self.roster
            .as_ref()
            .map(|roster| roster.seat(self.active))
            .ok_or(GameError::UninitializedSession)
    }

    /// The winning player, once the game has ended with a win.
    pub fn winner(&self) -> Option<&Player> {
        if self.phase != Phase::Ended {
            return None;
        }
        self.current_player().ok().filter(|player| player.has_won())
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Result of the latest `play_round` since the game was started or reset.
    pub fn last_outcome(&self) -> Option<&RoundOutcome> {
        self.last_outcome.as_ref()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, X first, once a game has been initialized.
    pub fn players(&self) -> Option<(&Player, &Player)> {
        self.roster
            .as_ref()
            .map(|roster| (&roster.first, &roster.second))
    }

    /// Starts a game and plays `indices` in order.
    ///
    /// Rejected moves are kept in the outcome list and play carries on, the
    /// same as a user clicking a taken cell.
    ///
    /// # Errors
    ///
    /// Stops at the first index that is not a cell.
    #[instrument(skip(name1, name2))]
    pub fn replay(
        name1: impl AsRef<str>,
        name2: impl AsRef<str>,
        indices: &[usize],
    ) -> Result<(Self, Vec<RoundOutcome>), GameError> {
        let mut game = Self::new();
        game.init_game(name1, name2);

        let outcomes = indices
            .iter()
            .map(|&index| game.play_round(index))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(moves = outcomes.len(), phase = %game.phase, "Replay finished");
        Ok((game, outcomes))
    }

    /// Checks every session invariant.
    fn verify(&self) -> Result<(), GameError> {
        SessionInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Session invariant violated");
            GameError::InvariantViolation(descriptions)
        })
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
