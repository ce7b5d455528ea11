//! First-class invariants for hangman.
//!
//! Invariants are logical properties that must hold for every session,
//! whatever guesses were made. They are checked after each guess in debug
//! builds and can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to three invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<_> = [$(($inv::holds(state), $inv::description())),+]
                    .into_iter()
                    .filter(|(holds, _)| !holds)
                    .map(|(_, description)| InvariantViolation::new(description))
                    .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1);
impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

pub mod history_consistent;
pub mod revealed_length;
pub mod status_consistent;

pub use history_consistent::HistoryConsistentInvariant;
pub use revealed_length::RevealedLengthInvariant;
pub use status_consistent::StatusConsistentInvariant;

/// All hangman invariants as a composable set.
pub type HangmanInvariants = (
    RevealedLengthInvariant,
    StatusConsistentInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameSession, MistakeBudget};

    #[test]
    fn test_invariant_set_holds_for_new_round() {
        let session = GameSession::start("hangman", MistakeBudget::DEFAULT).expect("valid word");
        assert!(HangmanInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_guesses() {
        let mut session =
            GameSession::start("hangman", MistakeBudget::DEFAULT).expect("valid word");
        for input in ["a", "z", "n", "q", "a"] {
            session.guess(input).expect("valid guess");
        }
        assert!(HangmanInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut session =
            GameSession::start("hangman", MistakeBudget::DEFAULT).expect("valid word");
        session.guess("a").expect("valid guess");

        // Drop a position and forget the guess that revealed it
        session.revealed.pop();
        session.guessed.clear();

        let violations = HangmanInvariants::check_all(&session).unwrap_err();
        assert!(violations.len() >= 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let session = GameSession::start("hangman", MistakeBudget::DEFAULT).expect("valid word");

        type TwoInvariants = (RevealedLengthInvariant, StatusConsistentInvariant);
        assert!(TwoInvariants::check_all(&session).is_ok());
    }
}
