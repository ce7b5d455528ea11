//! Stateless UI rendering for the menu and game screens.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strictly_hangman::{Language, WordSource};
use strictly_hangman::game::{GameStatus, Snapshot};

use super::app::{App, Screen};
use super::gallows;

/// Renders the active screen.
pub fn draw<S: WordSource>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Body
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Hangman")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let help = match app.screen() {
        Screen::Menu => {
            draw_menu(frame, chunks[1], app);
            "↑/↓ choose language · Enter start · q quit"
        }
        Screen::Game => {
            if let Some(snapshot) = app.snapshot() {
                draw_game(frame, chunks[1], &snapshot, app.language());
            }
            "type a letter to guess · Enter continue after a round · Esc menu · Ctrl+C quit"
        }
    };

    let status = Paragraph::new(app.message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_menu<S: WordSource>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let items: Vec<ListItem> = app
        .languages()
        .iter()
        .map(|language| ListItem::new(language.to_string()))
        .collect();

    let list = List::new(items)
        .block(Block::default().title("Word language").borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected()));
    frame.render_stateful_widget(list, center_rect(area, 36, 10), &mut state);
}

fn draw_game(frame: &mut Frame, area: Rect, snapshot: &Snapshot, language: Option<Language>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(20)])
        .split(area);

    let stage = gallows::stage(snapshot.mistakes_used(), snapshot.mistake_budget().get());
    let figure_color = match snapshot.status() {
        GameStatus::Lost => Color::Red,
        GameStatus::Won => Color::Green,
        GameStatus::InProgress => Color::White,
    };
    let figure = Paragraph::new(gallows::drawing(stage))
        .style(Style::default().fg(figure_color))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(figure, cols[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Word
            Constraint::Length(3), // Wrong letters
            Constraint::Length(1), // Remaining
        ])
        .split(cols[1]);

    let word = Paragraph::new(snapshot.display_word())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().title(word_title(language)).borders(Borders::ALL));
    frame.render_widget(word, rows[0]);

    let wrong = Paragraph::new(Line::from(wrong_letter_slots(snapshot)))
        .alignment(Alignment::Center)
        .block(Block::default().title("Wrong letters").borders(Borders::ALL));
    frame.render_widget(wrong, rows[1]);

    let remaining = Paragraph::new(format!("Mistakes remaining: {}", snapshot.mistakes_remaining()))
        .alignment(Alignment::Center);
    frame.render_widget(remaining, rows[2]);
}

fn word_title(language: Option<Language>) -> String {
    match language {
        Some(language) => format!("Word ({})", language),
        None => "Word".to_string(),
    }
}

/// One slot per unit of budget, filled left to right with wrong letters.
fn wrong_letter_slots(snapshot: &Snapshot) -> Vec<Span<'static>> {
    (0..snapshot.mistake_budget().get())
        .map(|i| match snapshot.wrong_letters().get(i) {
            Some(letter) => Span::styled(
                format!("[{}]", letter),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            None => Span::styled("[ ]", Style::default().fg(Color::DarkGray)),
        })
        .collect()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
