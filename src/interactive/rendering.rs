//! TUI rendering with ratatui
//!
//! The board on the left, keyboard and statistics on the right, toast
//! line at the bottom. All color decisions live here; the app layer only
//! exposes state.

use super::app::App;
use crate::core::{Verdict, WORD_LEN};
use crate::game::{Cell, CellState, MAX_GUESSES, Phase};
use crate::output::distribution_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Board + side panel
            Constraint::Length(3),  // Toast / hints
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard + stats
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Keyboard
            Constraint::Min(9),     // Statistics
        ])
        .split(main_chunks[1]);

    render_keyboard(f, app, side_chunks[0]);
    render_statistics(f, app, side_chunks[1]);

    render_toast(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE: six tries, five letters")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        Verdict::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        Verdict::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn cell_span(cell: &Cell, flipping: bool) -> Span<'static> {
    let letter = cell
        .letter
        .map_or(' ', |b| (b as char).to_ascii_uppercase());
    let text = format!(" {letter} ");

    let style = match cell.state {
        CellState::Empty => Style::default().fg(Color::DarkGray),
        CellState::Filled => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        CellState::Scored(verdict) => verdict_style(verdict).add_modifier(Modifier::BOLD),
    };
    let style = if flipping {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };

    Span::styled(text, style)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();
    let revealing_row = round.pending_reveal().map(|r| r.row);

    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);
    for (row_idx, row) in round.cells().iter().enumerate() {
        let mut spans = Vec::with_capacity(WORD_LEN * 2 + 1);
        let shaking = app.shaking_row() == Some(row_idx);
        spans.push(Span::raw(if shaking { "» " } else { "  " }));

        for (col_idx, cell) in row.iter().enumerate() {
            let flipping =
                revealing_row == Some(row_idx) && app.flipping_col() == Some(col_idx);
            spans.push(cell_span(cell, flipping));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let title = if round.phase() == Phase::Locked {
        " Board (Enter for a new round) "
    } else {
        " Board "
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.round().keyboard();

    let lines: Vec<Line> = KEY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|letter| {
                    let style = match keyboard.verdict(letter) {
                        Some(verdict) => verdict_style(verdict),
                        None => Style::default().fg(Color::White),
                    };
                    let key = (letter as char).to_ascii_uppercase();
                    [Span::styled(key.to_string(), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.session.stats();
    let max = stats.distribution.iter().copied().max().unwrap_or(0);

    let mut lines = vec![
        Line::from(format!(
            "Played {}   Win rate {}%",
            stats.played,
            stats.win_rate()
        )),
        Line::from(format!(
            "Streak {}   Best streak {}",
            stats.current_streak, stats.max_streak
        )),
        Line::default(),
    ];
    for (i, &count) in stats.distribution.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", i + 1)),
            Span::styled(
                distribution_bar(count, max, 16),
                Style::default().fg(Color::Green),
            ),
            Span::raw(format!(" {count}")),
        ]));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_toast(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match app.toast() {
        Some(message) => (
            message.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        None => (
            "Type a word, Enter to guess, Backspace to erase. Ctrl-N new round, Esc quit."
                .to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let widget = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(widget, area);
}
