//! Game configuration loaded from TOML.

use crate::language::Language;
use crate::word_source::DEFAULT_WORD_API_URL;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_hangman_core::MistakeBudget;
use tracing::{debug, info, instrument};

/// What happens after the player acknowledges a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum AfterRound {
    /// Fetch a fresh word for the next round.
    #[default]
    #[strum(to_string = "new word")]
    NewWord,
    /// Play the same word again.
    #[strum(to_string = "same word")]
    SameWord,
}

/// Configuration for a hangman game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HangmanConfig {
    /// Endpoint of the random-word API.
    #[serde(default = "default_word_api_url")]
    word_api_url: String,

    /// Preselected word language; the menu asks when unset.
    #[serde(default)]
    language: Option<Language>,

    /// Distinct wrong letters allowed per round.
    #[serde(default)]
    mistake_budget: MistakeBudget,

    /// Policy for the round after an acknowledged outcome.
    #[serde(default)]
    after_round: AfterRound,

    /// File the TUI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_word_api_url() -> String {
    DEFAULT_WORD_API_URL.to_string()
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_hangman.log")
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self {
            word_api_url: default_word_api_url(),
            language: None,
            mistake_budget: MistakeBudget::DEFAULT,
            after_round: AfterRound::default(),
            log_file: default_log_file(),
        }
    }
}

impl HangmanConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(budget = %config.mistake_budget, after_round = %config.after_round, "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the word language.
    pub fn with_language(mut self, language: Option<Language>) -> Self {
        if language.is_some() {
            self.language = language;
        }
        self
    }

    /// Overrides the mistake budget.
    pub fn with_mistake_budget(mut self, mistake_budget: MistakeBudget) -> Self {
        self.mistake_budget = mistake_budget;
        self
    }

    /// Overrides the after-round policy.
    pub fn with_after_round(mut self, after_round: AfterRound) -> Self {
        self.after_round = after_round;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
