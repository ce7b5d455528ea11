//! Revealed length invariant: one display slot per character of the word.

use super::Invariant;
use crate::GameSession;

/// Invariant: the revealed sequence is exactly as long as the secret word.
pub struct RevealedLengthInvariant;

impl Invariant<GameSession> for RevealedLengthInvariant {
    fn holds(session: &GameSession) -> bool {
        session.revealed.len() == session.secret_word.len()
    }

    fn description() -> &'static str {
        "Revealed sequence has the same length as the secret word"
    }
}
