//! Strictly Hangman - CLI
//!
//! Play hangman in the terminal, fetch a random word, or list languages.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_hangman::game::MistakeBudget;
use strictly_hangman::{
    AfterRound, FixedWordSource, HangmanConfig, HttpWordSource, Language, RoundController,
    WordSource,
};
use strum::IntoEnumIterator;
use tracing::{info, instrument};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            language,
            budget,
            word,
            after_round,
        } => run_play(config, language, budget, word, after_round).await,
        Command::Word { language, config } => run_word(config, language).await,
        Command::Languages => run_languages(),
    }
}

/// Run the terminal game
async fn run_play(
    config_path: PathBuf,
    language: Option<Language>,
    budget: Option<usize>,
    words: Vec<String>,
    after_round: Option<AfterRound>,
) -> Result<()> {
    let mut config = HangmanConfig::load_or_default(&config_path)?.with_language(language);
    if let Some(budget) = budget {
        config = config.with_mistake_budget(MistakeBudget::new(budget)?);
    }
    if let Some(after_round) = after_round {
        config = config.with_after_round(after_round);
    }

    let log_file = config.log_file().clone();
    if words.is_empty() {
        let source = HttpWordSource::new(config.word_api_url())?;
        let rounds = RoundController::from_config(source, &config);
        tui::run_tui(rounds, *config.language(), &log_file).await
    } else {
        // Fixed words ignore the language, so skip the menu.
        let start = (*config.language()).or(Some(Language::English));
        let rounds = RoundController::from_config(FixedWordSource::new(words), &config);
        tui::run_tui(rounds, start, &log_file).await
    }
}

/// Fetch one word and print it
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_word(config_path: PathBuf, language: Option<Language>) -> Result<()> {
    initialize_stderr_tracing();

    let config = HangmanConfig::load_or_default(&config_path)?.with_language(language);
    let source = HttpWordSource::new(config.word_api_url())?;

    info!(language = ?config.language(), "Fetching word");
    let word = source.fetch_random_word(*config.language()).await?;
    println!("{}", word);
    Ok(())
}

/// List supported languages and their API codes
fn run_languages() -> Result<()> {
    for language in Language::iter() {
        println!(
            "{:<22} {}",
            language.to_string(),
            language.api_code().unwrap_or("(default)")
        );
    }
    Ok(())
}

#[instrument]
fn initialize_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,strictly_hangman=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Tracing initialized");
}
