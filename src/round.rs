//! Round controller: drives successive rounds from a word source.
//!
//! The controller is the caller the game core expects: it gets a word,
//! starts a [`GameSession`], forwards guesses, and on acknowledgement of a
//! finished round either fetches a new word or replays the same one.

use crate::config::{AfterRound, HangmanConfig};
use crate::language::Language;
use crate::word_source::{FetchError, WordSource};
use derive_more::{Display, From};
use strictly_hangman_core::{GameSession, GuessOutcome, MistakeBudget, SessionError, Snapshot};
use tracing::{debug, info, instrument, warn};

/// Error raised while driving rounds.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum RoundError {
    /// The word source had no word for us.
    #[display("{}", _0)]
    Fetch(FetchError),

    /// The session rejected the word or the guess.
    #[display("{}", _0)]
    Session(SessionError),

    /// No round has been started.
    #[display("No round in progress")]
    #[from(ignore)]
    NoActiveRound,

    /// The round must be finished before it can be acknowledged.
    #[display("Round is not over yet")]
    #[from(ignore)]
    RoundNotOver,
}

impl std::error::Error for RoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RoundError::Fetch(e) => Some(e),
            RoundError::Session(e) => Some(e),
            RoundError::NoActiveRound | RoundError::RoundNotOver => None,
        }
    }
}

/// Drives rounds of hangman against a word source.
#[derive(Debug)]
pub struct RoundController<S> {
    source: S,
    mistake_budget: MistakeBudget,
    after_round: AfterRound,
    language: Option<Language>,
    session: Option<GameSession>,
    rounds_played: usize,
}

impl<S: WordSource> RoundController<S> {
    /// Creates a controller with the given source and policy.
    pub fn new(source: S, mistake_budget: MistakeBudget, after_round: AfterRound) -> Self {
        Self {
            source,
            mistake_budget,
            after_round,
            language: None,
            session: None,
            rounds_played: 0,
        }
    }

    /// Creates a controller from configuration.
    pub fn from_config(source: S, config: &HangmanConfig) -> Self {
        let mut controller = Self::new(source, *config.mistake_budget(), *config.after_round());
        controller.language = *config.language();
        controller
    }

    /// Fetches a word in `language` and starts a round with it.
    ///
    /// A fetch failure leaves the controller without a round; there is no retry.
    #[instrument(skip(self))]
    pub async fn begin(&mut self, language: Option<Language>) -> Result<Snapshot, RoundError> {
        self.language = language;
        self.session = None;
        self.start_with_new_word().await
    }

    /// Forwards a guess to the current round.
    #[instrument(skip(self))]
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, RoundError> {
        let session = self.session.as_mut().ok_or(RoundError::NoActiveRound)?;
        Ok(session.guess(input)?)
    }

    /// Confirms a finished round and sets up the next one.
    #[instrument(skip(self), fields(after_round = %self.after_round))]
    pub async fn acknowledge(&mut self) -> Result<Snapshot, RoundError> {
        let session = self.session.as_mut().ok_or(RoundError::NoActiveRound)?;
        if !session.is_over() {
            warn!("Acknowledge before round finished");
            return Err(RoundError::RoundNotOver);
        }
        info!(status = %session.status(), "Round acknowledged");

        match self.after_round {
            AfterRound::SameWord => {
                session.replay_same_word();
                self.rounds_played += 1;
                Ok(session.snapshot())
            }
            AfterRound::NewWord => self.start_with_new_word().await,
        }
    }

    /// Drops the current round, as when the player backs out to the menu.
    #[instrument(skip(self))]
    pub fn abandon(&mut self) {
        if self.session.take().is_some() {
            debug!("Round abandoned");
        }
    }

    /// Returns the current round, if any.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Returns the language rounds are fetched in.
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// Returns how many rounds have been started.
    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    async fn start_with_new_word(&mut self) -> Result<Snapshot, RoundError> {
        let word = self.source.fetch_random_word(self.language).await?;
        let session = GameSession::start(&word, self.mistake_budget)?;
        let snapshot = session.snapshot();
        self.session = Some(session);
        self.rounds_played += 1;
        debug!(rounds_played = self.rounds_played, "Round ready");
        Ok(snapshot)
    }
}
