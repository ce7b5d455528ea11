//! Game session and rules for hangman.

use super::action::{GuessFeedback, GuessOutcome, Letter, SessionError, normalize};
use super::contracts::{Contract, GuessContract, SessionInProgress};
use super::invariants::{HangmanInvariants, InvariantSet};
use super::types::{GameStatus, MistakeBudget, Snapshot};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// One round of hangman for a single secret word.
///
/// The session owns all mutable round state. `Won` and `Lost` are
/// absorbing: the only way out is [`GameSession::start`] or
/// [`GameSession::restart`].
///
/// Deserialization re-validates the word and every session invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSession")]
pub struct GameSession {
    pub(crate) secret_word: Vec<char>,
    pub(crate) revealed: Vec<Option<char>>,
    pub(crate) wrong_letters: Vec<Letter>,
    pub(crate) guessed: Vec<Letter>,
    pub(crate) mistake_budget: MistakeBudget,
    pub(crate) status: GameStatus,
}

impl GameSession {
    /// Starts a round for `word`.
    ///
    /// The word is trimmed and uppercased. Positions holding non-letters
    /// (hyphens, apostrophes) start out revealed since they cannot be guessed.
    #[instrument(skip(word), fields(word_len = word.chars().count(), %mistake_budget))]
    pub fn start(word: &str, mistake_budget: MistakeBudget) -> Result<Self, SessionError> {
        let secret_word = normalize_word(word)?;
        let revealed = secret_word
            .iter()
            .map(|&c| (!c.is_alphabetic()).then_some(c))
            .collect();

        info!("Round started");
        Ok(Self {
            secret_word,
            revealed,
            wrong_letters: Vec::new(),
            guessed: Vec::new(),
            mistake_budget,
            status: GameStatus::InProgress,
        })
    }

    /// Starts a round with the default budget of six mistakes.
    pub fn with_default_budget(word: &str) -> Result<Self, SessionError> {
        Self::start(word, MistakeBudget::DEFAULT)
    }

    /// Resets this session in place for a new word.
    ///
    /// On error the current round is left untouched.
    #[instrument(skip(self, word))]
    pub fn restart(&mut self, word: &str, mistake_budget: MistakeBudget) -> Result<(), SessionError> {
        *self = Self::start(word, mistake_budget)?;
        Ok(())
    }

    /// Starts the same word over with the same budget.
    #[instrument(skip(self))]
    pub fn replay_same_word(&mut self) {
        debug!("Replaying same word");
        self.revealed = self
            .secret_word
            .iter()
            .map(|&c| (!c.is_alphabetic()).then_some(c))
            .collect();
        self.wrong_letters.clear();
        self.guessed.clear();
        self.status = GameStatus::InProgress;
    }

    /// Submits raw player input as a guess.
    ///
    /// Fails with [`SessionError::InvalidState`] on a finished round and
    /// [`SessionError::InvalidGuess`] unless the input is exactly one letter.
    /// Neither failure changes the session.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, SessionError> {
        SessionInProgress::check(self)?;
        let letter = Letter::parse(input).inspect_err(|e| warn!(error = %e, "Guess rejected"))?;
        self.guess_letter(letter)
    }

    /// Applies an already validated letter.
    #[instrument(skip(self), fields(%letter))]
    pub fn guess_letter(&mut self, letter: Letter) -> Result<GuessOutcome, SessionError> {
        GuessContract::pre(self, &letter)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let feedback = self.apply(letter);
        self.update_status();

        #[cfg(debug_assertions)]
        GuessContract::post(&before, self)?;

        debug!(?feedback, status = %self.status, "Guess applied");
        Ok(GuessOutcome::new(feedback, self.snapshot()))
    }

    /// Returns the current display state. Callable at any time.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.revealed.clone(),
            self.wrong_letters.clone(),
            self.mistake_budget,
            self.status,
        )
    }

    /// Returns the status of the round.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the round is won or lost.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the normalized secret word.
    ///
    /// Meant for showing the answer once the round is over.
    pub fn secret_word(&self) -> String {
        self.secret_word.iter().collect()
    }

    /// Returns every distinct letter accepted so far, in guess order.
    pub fn guessed(&self) -> &[Letter] {
        &self.guessed
    }

    /// Returns wrong letters in guess order.
    pub fn wrong_letters(&self) -> &[Letter] {
        &self.wrong_letters
    }

    /// Returns the budget the round was started with.
    pub fn mistake_budget(&self) -> MistakeBudget {
        self.mistake_budget
    }

    /// Returns the number of distinct wrong letters.
    pub fn mistakes_used(&self) -> usize {
        self.wrong_letters.len()
    }

    /// Returns how many wrong letters remain before the round is lost.
    pub fn mistakes_remaining(&self) -> usize {
        self.mistake_budget.get().saturating_sub(self.mistakes_used())
    }

    /// Returns true while some position is still hidden.
    pub(crate) fn has_placeholder(&self) -> bool {
        self.revealed.iter().any(Option::is_none)
    }

    fn apply(&mut self, letter: Letter) -> GuessFeedback {
        if self.guessed.contains(&letter) {
            debug!("Letter already tried");
            return GuessFeedback::Repeat;
        }
        self.guessed.push(letter);

        let target = letter.as_char();
        let mut revealed = 0;
        for (slot, &c) in self.revealed.iter_mut().zip(&self.secret_word) {
            if c == target && slot.is_none() {
                *slot = Some(c);
                revealed += 1;
            }
        }

        if revealed > 0 {
            GuessFeedback::Hit { revealed }
        } else {
            self.wrong_letters.push(letter);
            GuessFeedback::Miss
        }
    }

    fn update_status(&mut self) {
        if !self.has_placeholder() {
            info!("Round won");
            self.status = GameStatus::Won;
        } else if self.mistakes_used() >= self.mistake_budget.get() {
            info!("Round lost");
            self.status = GameStatus::Lost;
        }
    }
}

/// Unchecked session fields as they appear on the wire.
#[derive(Deserialize)]
struct RawSession {
    secret_word: Vec<char>,
    revealed: Vec<Option<char>>,
    wrong_letters: Vec<Letter>,
    guessed: Vec<Letter>,
    mistake_budget: MistakeBudget,
    status: GameStatus,
}

impl TryFrom<RawSession> for GameSession {
    type Error = SessionError;

    #[instrument(skip(raw), fields(word_len = raw.secret_word.len(), status = %raw.status))]
    fn try_from(raw: RawSession) -> Result<Self, Self::Error> {
        let word: String = raw.secret_word.iter().collect();
        if normalize_word(&word)? != raw.secret_word {
            warn!("Stored word is not normalized");
            return Err(SessionError::InvalidWord(word));
        }

        let session = Self {
            secret_word: raw.secret_word,
            revealed: raw.revealed,
            wrong_letters: raw.wrong_letters,
            guessed: raw.guessed,
            mistake_budget: raw.mistake_budget,
            status: raw.status,
        };

        HangmanInvariants::check_all(&session).map_err(|violations| {
            let descriptions: Vec<_> = violations.into_iter().map(|v| v.description).collect();
            warn!(?descriptions, "Stored session rejected");
            SessionError::InvariantViolation(descriptions.join("; "))
        })?;

        Ok(session)
    }
}

/// Trims and uppercases a word, rejecting words without any letter.
fn normalize_word(word: &str) -> Result<Vec<char>, SessionError> {
    let chars: Vec<char> = word.trim().chars().map(normalize).collect();
    if !chars.iter().any(|c| c.is_alphabetic()) {
        return Err(SessionError::InvalidWord(word.to_string()));
    }
    Ok(chars)
}
