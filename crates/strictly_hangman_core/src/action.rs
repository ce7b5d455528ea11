//! First-class guess types for hangman.
//!
//! A guess is validated into a [`Letter`] before it ever reaches the
//! session, so a rejected guess can never touch game state.

use super::types::{GameStatus, Snapshot};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single alphabetic character, stored uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "char", into = "char")]
#[display("{}", _0)]
pub struct Letter(char);

impl Letter {
    /// Creates a letter from a character, or `None` if it is not alphabetic.
    pub fn new(c: char) -> Option<Self> {
        c.is_alphabetic().then(|| Self(normalize(c)))
    }

    /// Parses raw player input, which must be exactly one alphabetic character.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, SessionError> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::new(c).ok_or_else(|| SessionError::InvalidGuess(input.to_string()))
            }
            _ => Err(SessionError::InvalidGuess(input.to_string())),
        }
    }

    /// Returns the normalized character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = SessionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c).ok_or_else(|| SessionError::InvalidGuess(c.to_string()))
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}

/// Uppercases a character without changing word length.
///
/// Characters whose uppercase form is several characters (such as `ß`)
/// are kept as they are so positions stay aligned.
pub fn normalize(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// What a single accepted guess did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessFeedback {
    /// The letter occurs in the word; every occurrence was revealed.
    Hit {
        /// Number of positions revealed by this guess.
        revealed: usize,
    },
    /// The letter does not occur in the word and cost one mistake.
    Miss,
    /// The letter was already tried; nothing changed.
    Repeat,
}

/// Result of a guess: the feedback plus the state after it.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GuessOutcome {
    /// What the guess did.
    feedback: GuessFeedback,
    /// Display state after the guess.
    snapshot: Snapshot,
}

impl GuessOutcome {
    pub(crate) fn new(feedback: GuessFeedback, snapshot: Snapshot) -> Self {
        Self { feedback, snapshot }
    }

    /// Status of the round after the guess.
    pub fn status(&self) -> GameStatus {
        self.snapshot.status()
    }
}

/// Error that can occur when starting a round or applying a guess.
///
/// Every variant is raised before any state is mutated, so callers can
/// re-prompt and carry on with the same session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The word is empty or has no alphabetic characters.
    #[display("Invalid word {:?}: it must contain at least one letter", _0)]
    InvalidWord(String),

    /// The guess is not exactly one alphabetic character.
    #[display("Invalid guess {:?}: enter a single letter", _0)]
    InvalidGuess(String),

    /// The round is already over.
    #[display("Round is already {}", _0)]
    InvalidState(GameStatus),

    /// The mistake budget is zero or above the maximum.
    #[display("Mistake budget must be between 1 and 26, got {}", _0)]
    InvalidBudget(usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SessionError {}
