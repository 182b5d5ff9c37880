//! Non-interactive play: replay a list of cells and report what happened.

use crate::{DisplayController, HotseatConfig};
use anyhow::{Context, Result};
use hotseat_tictactoe::{Position, RoundOutcome, SessionView};
use serde::Serialize;
use std::io::Write;
use tracing::{info, instrument};

/// One played cell and its result.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptStep {
    /// Cell index that was requested.
    pub index: usize,
    /// What the engine did with it.
    pub outcome: RoundOutcome,
    /// Status line after the move.
    pub status: String,
}

/// Full result of a scripted game.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptReport {
    /// Each move in order.
    pub steps: Vec<ScriptStep>,
    /// Final state of the session.
    pub session: SessionView,
    /// Status line after the last move.
    pub status: String,
    /// Final board as a text grid.
    #[serde(skip)]
    pub board: String,
}

/// Parses one `--moves` entry: a cell number, or a name such as `center`.
///
/// Numbers pass through unchecked; the engine reports cells off the board.
pub fn parse_cell(entry: &str) -> std::result::Result<usize, String> {
    let entry = entry.trim();
    if let Ok(index) = entry.parse::<usize>() {
        return Ok(index);
    }
    Position::from_label_or_number(entry)
        .map(Position::to_index)
        .ok_or_else(|| format!("'{}' is neither a cell number nor a cell name", entry))
}

/// Plays `moves` in a fresh game between `name1` and `name2`.
///
/// Rejected moves are reported and play carries on.
///
/// # Errors
///
/// Fails on the first index that is not a cell.
#[instrument(skip(config))]
pub fn play(config: &HotseatConfig, name1: &str, name2: &str, moves: &[usize]) -> Result<ScriptReport> {
    let mut display = DisplayController::new(config);
    display.start(name1, name2);

    let mut steps = Vec::with_capacity(moves.len());
    for (turn, &index) in moves.iter().enumerate() {
        let outcome = display
            .select(index)
            .with_context(|| format!("Move {} (cell {}) could not be played", turn + 1, index))?;
        steps.push(ScriptStep {
            index,
            outcome,
            status: display.status().to_string(),
        });
    }

    let final_status = display.status();
    info!(moves = steps.len(), status = %final_status, "Script finished");
    Ok(ScriptReport {
        steps,
        session: display.game().view(),
        status: display.status().to_string(),
        board: display.game().board().render(),
    })
}

/// Writes a report as plain text.
pub fn write_text(report: &ScriptReport, out: &mut impl Write) -> Result<()> {
    for (turn, step) in report.steps.iter().enumerate() {
        writeln!(out, "{:>2}. cell {} -> {}", turn + 1, step.index, step.outcome)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", report.board)?;
    writeln!(out)?;
    writeln!(out, "{}", report.status)?;
    Ok(())
}

/// Writes a report as pretty-printed JSON.
pub fn write_json(report: &ScriptReport, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).context("Failed to serialize report")?;
    writeln!(out)?;
    Ok(())
}

/// Plays the moves and prints the report to `out`.
#[instrument(skip(config, out))]
pub fn run(
    config: &HotseatConfig,
    name1: &str,
    name2: &str,
    moves: &[usize],
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let report = play(config, name1, name2, moves)?;
    if json {
        write_json(&report, out)
    } else {
        write_text(&report, out)
    }
}
