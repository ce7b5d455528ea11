//! Status consistency invariant: the status agrees with the board.

use super::Invariant;
use crate::{GameSession, GameStatus};

/// Invariant: status is derived from reveal state and mistakes.
///
/// - `Won` iff no placeholder remains
/// - `Lost` iff mistakes used equals the budget
/// - mistakes never exceed the budget
pub struct StatusConsistentInvariant;

impl Invariant<GameSession> for StatusConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let hidden = session.has_placeholder();
        let used = session.mistakes_used();
        let budget = session.mistake_budget().get();

        if used > budget {
            return false;
        }

        match session.status() {
            GameStatus::Won => !hidden && used < budget,
            GameStatus::Lost => hidden && used == budget,
            GameStatus::InProgress => hidden && used < budget,
        }
    }

    fn description() -> &'static str {
        "Status matches reveal state and mistakes used"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MistakeBudget;

    #[test]
    fn test_in_progress_holds() {
        let mut session = GameSession::start("owl", MistakeBudget::DEFAULT).expect("valid word");
        session.guess("o").expect("valid guess");
        assert!(StatusConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_won_holds() {
        let mut session = GameSession::start("owl", MistakeBudget::DEFAULT).expect("valid word");
        for input in ["o", "w", "l"] {
            session.guess(input).expect("valid guess");
        }
        assert_eq!(session.status(), GameStatus::Won);
        assert!(StatusConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_premature_win_violates() {
        let mut session = GameSession::start("owl", MistakeBudget::DEFAULT).expect("valid word");
        session.status = GameStatus::Won;
        assert!(!StatusConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_missed_loss_violates() {
        let mut session =
            GameSession::start("owl", MistakeBudget::new(2).expect("positive")).expect("valid word");
        session.guess("x").expect("valid guess");
        session.guess("y").expect("valid guess");
        assert_eq!(session.status(), GameStatus::Lost);

        session.status = GameStatus::InProgress;
        assert!(!StatusConsistentInvariant::holds(&session));
    }
}
