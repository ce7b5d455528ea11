//! Strictly Hangman library - word source, configuration and round flow
//!
//! The rules of the game live in [`strictly_hangman_core`]; this crate wires
//! them to the outside world.
//!
//! # Architecture
//!
//! - **Language**: word languages offered by the random-word API
//! - **Word source**: where words come from (HTTP API or a fixed list)
//! - **Config**: TOML configuration with CLI overrides
//! - **Round**: the controller that starts, plays and acknowledges rounds
//!
//! # Example
//!
//! ```no_run
//! use strictly_hangman::{AfterRound, FixedWordSource, RoundController};
//! use strictly_hangman::game::MistakeBudget;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let source = FixedWordSource::new(["ferris"]);
//! let mut rounds = RoundController::new(source, MistakeBudget::DEFAULT, AfterRound::NewWord);
//!
//! rounds.begin(None).await?;
//! let outcome = rounds.guess("r")?;
//! assert_eq!(outcome.snapshot().revealed_word(), "__RR__");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod language;
mod round;
mod word_source;

/// Re-export of the game rules crate.
pub use strictly_hangman_core as game;

// Crate-level exports - Configuration
pub use config::{AfterRound, ConfigError, HangmanConfig};

// Crate-level exports - Languages
pub use language::{Language, UnknownLanguage};

// Crate-level exports - Round flow
pub use round::{RoundController, RoundError};

// Crate-level exports - Word sources
pub use word_source::{
    DEFAULT_WORD_API_URL, FetchError, FixedWordSource, HttpWordSource, WordSource,
    parse_word_response,
};
