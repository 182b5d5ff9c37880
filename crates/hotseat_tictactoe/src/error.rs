//! Errors raised by the rule engine.
//!
//! Ordinary rejections (occupied cell, finished game) are not errors; they
//! come back as [`RoundOutcome::Rejected`](crate::RoundOutcome::Rejected).
//! A `GameError` means the call itself was malformed.

/// Error that can occur when driving a game session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The cell index is outside 0..=8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    InvalidIndex(#[error(not(source))] usize),

    /// No game has been started on this session yet.
    #[display("No game has been started; call init_game first")]
    UninitializedSession,

    /// A session invariant failed after a move (debug builds only).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
