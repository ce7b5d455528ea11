//! History consistency invariant: reveal state follows from the guesses.

use super::Invariant;
use crate::GameSession;

/// Invariant: replaying the guessed letters reproduces the session.
///
/// A position is revealed iff it is a non-letter or its letter was guessed,
/// and the wrong letters are exactly the guesses absent from the word,
/// in guess order and without duplicates.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        if session.revealed.len() != session.secret_word.len() {
            return false;
        }

        let unique = session
            .guessed
            .iter()
            .enumerate()
            .all(|(i, letter)| !session.guessed[..i].contains(letter));
        if !unique {
            return false;
        }

        let reveal_matches = session
            .secret_word
            .iter()
            .zip(&session.revealed)
            .all(|(&c, &shown)| {
                let expected = (!c.is_alphabetic()
                    || session.guessed.iter().any(|l| l.as_char() == c))
                .then_some(c);
                shown == expected
            });

        let expected_wrong: Vec<_> = session
            .guessed
            .iter()
            .filter(|l| !session.secret_word.contains(&l.as_char()))
            .copied()
            .collect();

        reveal_matches && expected_wrong == session.wrong_letters
    }

    fn description() -> &'static str {
        "Reveal state and wrong letters follow from the guess history"
    }
}
