//! Pure hangman game logic.
//!
//! A [`GameSession`] owns one round: the secret word, the revealed
//! positions, the wrong letters and the mistake budget. It performs no I/O;
//! words come from whoever calls [`GameSession::start`], and rendering is
//! left to whoever reads [`GameSession::snapshot`].
//!
//! # Example
//!
//! ```
//! use strictly_hangman_core::{GameSession, GameStatus, MistakeBudget};
//!
//! let mut session = GameSession::start("cat", MistakeBudget::DEFAULT)?;
//! session.guess("c")?;
//! session.guess("a")?;
//! let outcome = session.guess("t")?;
//!
//! assert_eq!(outcome.snapshot().revealed_word(), "CAT");
//! assert_eq!(outcome.status(), GameStatus::Won);
//! # Ok::<(), strictly_hangman_core::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod invariants;
mod rules;
mod types;

pub use action::{GuessFeedback, GuessOutcome, Letter, SessionError, normalize};
pub use contracts::{Contract, GuessContract, RevealIsMonotonic, SessionInProgress};
pub use invariants::{
    HangmanInvariants, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    RevealedLengthInvariant, StatusConsistentInvariant,
};
pub use rules::GameSession;
pub use types::{GameStatus, MistakeBudget, PLACEHOLDER, Snapshot};
