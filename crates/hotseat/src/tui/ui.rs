//! Stateless UI rendering for the hotseat board.

use hotseat::DisplayController;
use hotseat_tictactoe::Position;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP: &str = "arrows/Enter or 1-9: play   n: new game   r: restart   q: quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, display: &DisplayController, cursor: Position) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(4), // Status + notice
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Hotseat - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], display, cursor);

    let mut lines = vec![Line::from(Span::styled(
        display.status(),
        Style::default().fg(Color::Yellow),
    ))];
    if let Some(notice) = display.notice() {
        lines.push(Line::from(Span::styled(notice, Style::default().fg(Color::Red))));
    }
    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, display: &DisplayController, cursor: Position) {
    let board_area = center_rect(area, 38, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let labels = display.cell_labels();
    let winning = display.winning_line();

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(chunk);

        for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            let index = row * 3 + col;
            let Some(pos) = Position::from_index(index) else {
                continue;
            };
            let highlighted = winning.is_some_and(|line| line.contains(&pos));
            draw_cell(frame, cell_area, &labels[index], index, pos == cursor, highlighted);
        }
        draw_separator_vertical(frame, cols[1]);
        draw_separator_vertical(frame, cols[3]);
    }

    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, label: &str, index: usize, under_cursor: bool, winning: bool) {
    let (symbol, base_style) = match label {
        "X" => (" X ".to_string(), Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        "O" => (" O ".to_string(), Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        _ => (format!(" {} ", index + 1), Style::default().fg(Color::DarkGray)),
    };

    let style = if winning {
        base_style.bg(Color::Green)
    } else if under_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    // Vertically center inside the three-line cell.
    let inner = Rect {
        y: area.y + area.height / 2,
        height: 1.min(area.height),
        ..area
    };
    frame.render_widget(paragraph, inner);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
