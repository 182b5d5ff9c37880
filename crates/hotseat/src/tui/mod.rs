//! Interactive terminal front end.

mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hotseat::{DisplayController, HotseatConfig};
use hotseat_tictactoe::Position;
use input::Action;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error, info, instrument};

/// Runs the TUI until the user quits, restoring the terminal afterwards.
pub fn run(config: &HotseatConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut display = DisplayController::new(config);
    let res = event_loop(&mut terminal, &mut display);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    res
}

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

#[instrument(skip_all)]
fn event_loop(terminal: &mut Tui, display: &mut DisplayController) -> Result<()> {
    let mut cursor = Position::Center;

    loop {
        terminal.draw(|frame| ui::draw(frame, display, cursor))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let action = input::action_for(cursor, key.code);
        debug!(?action, "Key pressed");
        match action {
            Action::Quit => {
                info!("User quit");
                return Ok(());
            }
            Action::Start => display.start_with_defaults(),
            // Failures are already shown to the user as a notice.
            Action::Restart => {
                let _ = display.restart();
            }
            Action::Play(pos) => {
                cursor = pos;
                let _ = display.select(pos.to_index());
            }
            Action::Cursor(pos) => cursor = pos,
            Action::Ignore => {}
        }
    }
}
