//! Contract-based validation for hangman guesses.
//!
//! Contracts formalize Hoare-style reasoning: {P} guess {Q}

use super::action::{Letter, SessionError};
use super::invariants::{HangmanInvariants, InvariantSet};
use super::rules::GameSession;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), SessionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), SessionError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the round has not reached Won or Lost.
pub struct SessionInProgress;

impl SessionInProgress {
    /// Fails with [`SessionError::InvalidState`] on a finished round.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), SessionError> {
        if session.is_over() {
            warn!(status = %session.status(), "Guess on finished round");
            Err(SessionError::InvalidState(session.status()))
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: a guess only ever adds to what was revealed or missed.
///
/// Revealed positions stay revealed with the same character, earlier
/// wrong letters keep their order, and a finished round never changes.
pub struct RevealIsMonotonic;

impl RevealIsMonotonic {
    /// Returns true if `after` extends `before`.
    pub fn holds(before: &GameSession, after: &GameSession) -> bool {
        if before.is_over() {
            return before == after;
        }
        let revealed_kept = before
            .revealed
            .iter()
            .zip(&after.revealed)
            .all(|(b, a)| b.is_none() || b == a);
        let misses_kept = after.wrong_letters.starts_with(&before.wrong_letters);
        let budget_kept = before.mistake_budget == after.mistake_budget
            && before.secret_word == after.secret_word;

        revealed_kept && misses_kept && budget_kept
    }
}

// ─────────────────────────────────────────────────────────────
//  Guess contract
// ─────────────────────────────────────────────────────────────

/// Contract for guess actions.
///
/// Preconditions:
/// - Round is in progress
///
/// Postconditions:
/// - All session invariants hold
/// - Reveal state grew monotonically
pub struct GuessContract;

impl Contract<GameSession, Letter> for GuessContract {
    fn pre(session: &GameSession, _letter: &Letter) -> Result<(), SessionError> {
        SessionInProgress::check(session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), SessionError> {
        let mut descriptions = match HangmanInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations.into_iter().map(|v| v.description).collect(),
        };
        if !RevealIsMonotonic::holds(before, after) {
            descriptions.push("Reveal state only grows".to_string());
        }

        if descriptions.is_empty() {
            Ok(())
        } else {
            warn!(?descriptions, "Postcondition failed");
            Err(SessionError::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions.join("; ")
            )))
        }
    }
}
