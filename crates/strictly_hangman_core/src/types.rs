//! Core domain types for hangman.

use super::action::{Letter, SessionError};
use serde::{Deserialize, Serialize};

/// Display marker for an unrevealed position.
pub const PLACEHOLDER: char = '_';

/// Current status of a round.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIs,
)]
pub enum GameStatus {
    /// Round is ongoing.
    #[strum(to_string = "in progress")]
    InProgress,
    /// Every letter of the word has been revealed.
    #[strum(to_string = "won")]
    Won,
    /// The mistake budget is exhausted.
    #[strum(to_string = "lost")]
    Lost,
}

impl GameStatus {
    /// Returns true once the round has reached Won or Lost.
    pub fn is_terminal(self) -> bool {
        !self.is_in_progress()
    }
}

/// Number of distinct wrong letters allowed before a round is lost.
///
/// Always between 1 and [`MistakeBudget::MAX`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "usize", into = "usize")]
#[display("{}", _0)]
pub struct MistakeBudget(usize);

impl MistakeBudget {
    /// Budget used when none is configured: the six drawings of the gallows.
    pub const DEFAULT: Self = Self(6);

    /// Largest budget accepted: one wrong guess per letter of the alphabet.
    pub const MAX: usize = 26;

    /// Creates a budget, rejecting zero and anything above [`Self::MAX`].
    pub fn new(value: usize) -> Result<Self, SessionError> {
        if value == 0 || value > Self::MAX {
            return Err(SessionError::InvalidBudget(value));
        }
        Ok(Self(value))
    }

    /// Returns the budget as a plain count.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for MistakeBudget {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for MistakeBudget {
    type Error = SessionError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MistakeBudget> for usize {
    fn from(budget: MistakeBudget) -> Self {
        budget.0
    }
}

/// Immutable view of a round, handed to whatever renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    revealed: Vec<Option<char>>,
    wrong_letters: Vec<Letter>,
    mistakes_used: usize,
    mistake_budget: MistakeBudget,
    status: GameStatus,
}

impl Snapshot {
    pub(crate) fn new(
        revealed: Vec<Option<char>>,
        wrong_letters: Vec<Letter>,
        mistake_budget: MistakeBudget,
        status: GameStatus,
    ) -> Self {
        Self {
            mistakes_used: wrong_letters.len(),
            revealed,
            wrong_letters,
            mistake_budget,
            status,
        }
    }

    /// Revealed positions; `None` is an unrevealed position.
    pub fn revealed(&self) -> &[Option<char>] {
        &self.revealed
    }

    /// Wrong letters in the order they were guessed.
    pub fn wrong_letters(&self) -> &[Letter] {
        &self.wrong_letters
    }

    /// Number of distinct wrong letters so far.
    pub fn mistakes_used(&self) -> usize {
        self.mistakes_used
    }

    /// The budget the round was started with.
    pub fn mistake_budget(&self) -> MistakeBudget {
        self.mistake_budget
    }

    /// Wrong guesses left before the round is lost.
    pub fn mistakes_remaining(&self) -> usize {
        self.mistake_budget.get().saturating_sub(self.mistakes_used)
    }

    /// Status of the round when the snapshot was taken.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Renders the word compactly, e.g. `C__`.
    pub fn revealed_word(&self) -> String {
        self.revealed
            .iter()
            .map(|c| c.unwrap_or(PLACEHOLDER))
            .collect()
    }

    /// Renders the word with spacing for display, e.g. `C _ _`.
    pub fn display_word(&self) -> String {
        self.revealed
            .iter()
            .map(|c| c.unwrap_or(PLACEHOLDER).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
