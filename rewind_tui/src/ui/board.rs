//! Tic-tac-toe board rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use rewind_tictactoe::{GameView, Mark, Position, Square};

/// Renders the board, highlighting the winning line and the cell cursor.
pub fn render_board(f: &mut Frame, area: Rect, view: &GameView, cursor: Position) {
    let board_area = center_rect(area, 40, 11);
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

    render_row(f, rows[0], view, cursor, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], view, cursor, 3);
    render_separator(f, rows[3]);
    render_row(f, rows[4], view, cursor, 6);
}

fn render_row(f: &mut Frame, area: Rect, view: &GameView, cursor: Position, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(f, cols[0], view, cursor, start);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], view, cursor, start + 1);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], view, cursor, start + 2);
}

fn render_square(f: &mut Frame, area: Rect, view: &GameView, cursor: Position, idx: usize) {
    let Some(pos) = Position::from_index(idx) else {
        return;
    };

    let (text, mut style) = match view.board.get(pos) {
        Square::Empty => (
            format!("{}", idx + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let winning = view
        .winning_line
        .is_some_and(|line| line.contains(&pos));
    if winning {
        style = style.fg(Color::Green);
    }
    if pos == cursor {
        style = style.bg(Color::DarkGray).fg(Color::White);
    }

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
