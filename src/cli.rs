//! Command-line interface for strictly_hangman.

use clap::{Parser, Subcommand};
use strictly_hangman::{AfterRound, Language};

/// Strictly Hangman - guess the word before the gallows is complete
#[derive(Parser, Debug)]
#[command(name = "strictly_hangman")]
#[command(about = "Hangman in the terminal with words from a random-word API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play hangman in the terminal UI
    Play {
        /// Path to the TOML config file
        #[arg(short, long, default_value = "hangman.toml")]
        config: std::path::PathBuf,

        /// Word language (name or code, e.g. "es"); skips the language menu
        #[arg(short, long)]
        language: Option<Language>,

        /// Distinct wrong letters allowed per round
        #[arg(short, long)]
        budget: Option<usize>,

        /// Play offline with this word instead of fetching one (repeatable)
        #[arg(short, long)]
        word: Vec<String>,

        /// What to do after a round ends
        #[arg(long, value_parser = parse_after_round)]
        after_round: Option<AfterRound>,
    },

    /// Fetch one random word and print it
    Word {
        /// Word language (name or code)
        #[arg(short, long)]
        language: Option<Language>,

        /// Path to the TOML config file
        #[arg(short, long, default_value = "hangman.toml")]
        config: std::path::PathBuf,
    },

    /// List supported word languages
    Languages,
}

fn parse_after_round(s: &str) -> Result<AfterRound, String> {
    match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
        "newword" | "new" => Ok(AfterRound::NewWord),
        "sameword" | "same" | "retry" => Ok(AfterRound::SameWord),
        other => Err(format!("expected \"new-word\" or \"same-word\", got {:?}", other)),
    }
}
