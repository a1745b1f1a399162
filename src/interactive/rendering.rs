//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{Mark, WORD_LENGTH};
use crate::game::Session;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("WORDLE ({} mode)", app.config.mode))
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

const fn tile_color(mark: Mark) -> Color {
    match mark {
        Mark::Hit => Color::Green,
        Mark::Present => Color::Yellow,
        Mark::Miss => Color::DarkGray,
    }
}

fn tile(letter: char, bg: Option<Color>) -> Span<'static> {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    let style = bg.map_or_else(
        || Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        |bg| {
            Style::default()
                .fg(Color::Black)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        },
    );
    Span::styled(text, style)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(app.game.max_turns());

    for row in &app.rows {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for (letter, mark) in row.guess.chars().zip(row.pattern.marks()) {
            spans.push(tile(letter, Some(tile_color(mark))));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if !app.game.is_over() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        let typed = app.input_buffer.chars().chain(std::iter::repeat('_'));
        for letter in typed.take(WORD_LENGTH) {
            spans.push(tile(letter, None));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    while lines.len() < app.game.max_turns() {
        lines.push(Line::from(
            Span::raw(" · ".repeat(WORD_LENGTH)).style(Style::default().fg(Color::DarkGray)),
        ));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Mode: {}", app.config.mode)).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let turns = Paragraph::new(format!(
        "Turns: {}/{}",
        app.game.turns_used(),
        app.game.max_turns()
    ))
    .alignment(Alignment::Center);
    f.render_widget(turns, chunks[1]);

    let stats = Paragraph::new(format!(
        "Won: {}/{}",
        app.stats.games_won, app.stats.total_games
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[2]);

    let help_text = if app.game.is_over() {
        "n: New Game | q/Esc: Quit"
    } else {
        "Enter: Submit | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
