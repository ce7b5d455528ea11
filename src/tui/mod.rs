//! Terminal UI for Strictly Hangman

mod app;
mod gallows;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::Path;
use strictly_hangman::{Language, RoundController, WordSource};
use tokio::time::Duration;
use tracing::{error, info, instrument};

use app::{App, Transition};

/// Run the TUI until the player quits.
///
/// With `language` set the menu is skipped and a round starts right away.
pub async fn run_tui<S: WordSource>(
    rounds: RoundController<S>,
    language: Option<Language>,
    log_file: &Path,
) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,strictly_hangman=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Strictly Hangman TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(rounds);
    let res = run_app(&mut terminal, &mut app, language).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    info!("Strictly Hangman TUI stopped");

    res
}

#[instrument(skip_all)]
async fn run_app<B, S>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
    language: Option<Language>,
) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: Send + Sync + 'static,
    S: WordSource,
{
    if language.is_some() {
        app.set_loading();
        terminal.draw(|f| ui::draw(f, app))?;
        app.begin(language).await;
    }

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Skip key release events (crossterm fires both press and release).
        if key.kind == KeyEventKind::Release {
            continue;
        }

        match app.handle_key(key) {
            Transition::Stay => {}
            Transition::Begin(language) => {
                app.set_loading();
                terminal.draw(|f| ui::draw(f, app))?;
                app.begin(language).await;
            }
            Transition::Acknowledge => {
                app.set_loading();
                terminal.draw(|f| ui::draw(f, app))?;
                app.acknowledge().await;
            }
            Transition::Quit => return Ok(()),
        }
    }
}
