//! Tests for the hangman session state machine.

use strictly_hangman_core::{
    GameSession, GameStatus, GuessFeedback, HangmanInvariants, InvariantSet, Letter, MistakeBudget,
    SessionError,
};

fn budget(n: usize) -> MistakeBudget {
    MistakeBudget::new(n).expect("positive budget")
}

#[test]
fn test_new_round_is_all_placeholders() {
    for (word, n) in [("cat", 6), ("Zebra", 1), ("mississippi", 3)] {
        let session = GameSession::start(word, budget(n)).expect("valid word");
        let snapshot = session.snapshot();

        assert!(snapshot.revealed().iter().all(Option::is_none));
        assert_eq!(snapshot.revealed().len(), word.len());
        assert!(snapshot.wrong_letters().is_empty());
        assert_eq!(snapshot.mistakes_remaining(), n);
        assert_eq!(snapshot.status(), GameStatus::InProgress);
    }
}

#[test]
fn test_cat_scenario() {
    let mut session = GameSession::start("CAT", budget(6)).expect("valid word");

    let outcome = session.guess("C").expect("valid guess");
    assert_eq!(outcome.snapshot().revealed_word(), "C__");
    assert_eq!(*outcome.feedback(), GuessFeedback::Hit { revealed: 1 });

    let outcome = session.guess("Z").expect("valid guess");
    assert_eq!(*outcome.feedback(), GuessFeedback::Miss);
    assert_eq!(outcome.snapshot().wrong_letters(), [Letter::new('Z').unwrap()]);
    assert_eq!(outcome.snapshot().mistakes_remaining(), 5);

    let outcome = session.guess("A").expect("valid guess");
    assert_eq!(outcome.snapshot().revealed_word(), "CA_");

    let outcome = session.guess("T").expect("valid guess");
    assert_eq!(outcome.snapshot().revealed_word(), "CAT");
    assert_eq!(outcome.status(), GameStatus::Won);
}

#[test]
fn test_dog_scenario_loses_on_budget() {
    let mut session = GameSession::start("DOG", budget(2)).expect("valid word");

    let outcome = session.guess("X").expect("valid guess");
    assert_eq!(outcome.status(), GameStatus::InProgress);

    let outcome = session.guess("Y").expect("valid guess");
    assert_eq!(outcome.status(), GameStatus::Lost);

    let wrong: String = outcome
        .snapshot()
        .wrong_letters()
        .iter()
        .map(|l| l.as_char())
        .collect();
    assert_eq!(wrong, "XY");
    assert_eq!(outcome.snapshot().mistakes_remaining(), 0);
}

#[test]
fn test_guessing_every_letter_wins() {
    let word = "mississippi";
    let mut session = GameSession::start(word, budget(6)).expect("valid word");

    let mut distinct: Vec<char> = word.chars().collect();
    distinct.sort_unstable();
    distinct.dedup();

    for c in distinct {
        session.guess(&c.to_string()).expect("valid guess");
    }

    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.snapshot().revealed_word(), "MISSISSIPPI");
    assert_eq!(session.mistakes_used(), 0);
}

#[test]
fn test_lost_only_after_last_miss() {
    let mut session = GameSession::start("moon", budget(4)).expect("valid word");

    for (i, input) in ["a", "b", "c", "d"].into_iter().enumerate() {
        let outcome = session.guess(input).expect("valid guess");
        if i < 3 {
            assert_eq!(outcome.status(), GameStatus::InProgress, "lost after {} misses", i + 1);
        } else {
            assert_eq!(outcome.status(), GameStatus::Lost);
        }
    }
}

#[test]
fn test_hit_reveals_every_occurrence() {
    let mut session = GameSession::start("banana", budget(6)).expect("valid word");
    let outcome = session.guess("a").expect("valid guess");

    assert_eq!(*outcome.feedback(), GuessFeedback::Hit { revealed: 3 });
    assert_eq!(outcome.snapshot().revealed_word(), "_A_A_A");
    assert_eq!(outcome.snapshot().display_word(), "_ A _ A _ A");
}

#[test]
fn test_repeats_are_free() {
    let mut session = GameSession::start("banana", budget(6)).expect("valid word");

    session.guess("q").expect("valid guess");
    session.guess("n").expect("valid guess");
    let before = session.snapshot();

    for input in ["q", "Q", "n", "N"] {
        let outcome = session.guess(input).expect("valid guess");
        assert_eq!(*outcome.feedback(), GuessFeedback::Repeat);
    }

    assert_eq!(session.snapshot(), before);
    assert_eq!(session.mistakes_used(), 1);
}

#[test]
fn test_lowercase_and_uppercase_match() {
    let mut session = GameSession::start("Apple", budget(6)).expect("valid word");
    session.guess("p").expect("valid guess");
    assert_eq!(session.snapshot().revealed_word(), "_PP__");
    assert_eq!(session.secret_word(), "APPLE");
}

#[test]
fn test_finished_round_rejects_guesses() {
    let mut won = GameSession::start("ox", budget(6)).expect("valid word");
    won.guess("o").expect("valid guess");
    won.guess("x").expect("valid guess");

    let mut lost = GameSession::start("ox", budget(1)).expect("valid word");
    lost.guess("z").expect("valid guess");

    for (session, status) in [(&mut won, GameStatus::Won), (&mut lost, GameStatus::Lost)] {
        let before = session.snapshot();
        for input in ["a", "o", "", "ab"] {
            assert_eq!(session.guess(input), Err(SessionError::InvalidState(status)));
        }
        assert_eq!(session.snapshot(), before);
    }
}

#[test]
fn test_invalid_guesses_leave_state_unchanged() {
    let mut session = GameSession::start("cat", budget(6)).expect("valid word");
    session.guess("c").expect("valid guess");
    let before = session.clone();

    for input in ["", "ab", "1", "-", " ", " a", "ça va"] {
        assert_eq!(
            session.guess(input),
            Err(SessionError::InvalidGuess(input.to_string()))
        );
    }

    assert_eq!(session, before);
}

#[test]
fn test_invalid_words_rejected() {
    for word in ["", "   ", "123", "--'"] {
        assert_eq!(
            GameSession::start(word, budget(6)),
            Err(SessionError::InvalidWord(word.to_string()))
        );
    }
}

#[test]
fn test_zero_budget_rejected() {
    assert_eq!(MistakeBudget::new(0), Err(SessionError::InvalidBudget(0)));
    assert_eq!(MistakeBudget::default().get(), 6);
}

#[test]
fn test_oversized_budget_rejected() {
    assert_eq!(MistakeBudget::new(MistakeBudget::MAX).map(MistakeBudget::get), Ok(26));
    assert_eq!(MistakeBudget::new(27), Err(SessionError::InvalidBudget(27)));
    assert_eq!(
        MistakeBudget::new(usize::MAX),
        Err(SessionError::InvalidBudget(usize::MAX))
    );
}

#[test]
fn test_word_is_trimmed_and_punctuation_revealed() {
    let mut session = GameSession::start("  self-made \n", budget(6)).expect("valid word");
    assert_eq!(session.snapshot().revealed_word(), "____-____");

    for input in ["s", "e", "l", "f", "m", "a", "d"] {
        session.guess(input).expect("valid guess");
    }
    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.secret_word(), "SELF-MADE");
}

#[test]
fn test_non_ascii_letters() {
    let mut session = GameSession::start("straße", budget(6)).expect("valid word");
    session.guess("ß").expect("valid guess");
    session.guess("é").expect("valid guess");

    assert_eq!(session.snapshot().revealed_word(), "____ß_");
    assert_eq!(session.wrong_letters(), [Letter::new('É').unwrap()]);
}

#[test]
fn test_restart_resets_round() {
    let mut session = GameSession::start("ox", budget(1)).expect("valid word");
    session.guess("z").expect("valid guess");
    assert!(session.is_over());

    session.restart("fox", budget(3)).expect("valid word");
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.snapshot().revealed_word(), "___");
    assert_eq!(session.mistakes_remaining(), 3);
    assert!(session.guessed().is_empty());
}

#[test]
fn test_failed_restart_keeps_round() {
    let mut session = GameSession::start("ox", budget(6)).expect("valid word");
    session.guess("o").expect("valid guess");
    let before = session.clone();

    assert!(session.restart("42", budget(6)).is_err());
    assert_eq!(session, before);
}

#[test]
fn test_replay_same_word() {
    let mut session = GameSession::start("dog", budget(2)).expect("valid word");
    session.guess("x").expect("valid guess");
    session.guess("d").expect("valid guess");
    session.guess("y").expect("valid guess");
    assert_eq!(session.status(), GameStatus::Lost);

    session.replay_same_word();
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.snapshot().revealed_word(), "___");
    assert_eq!(session.mistakes_remaining(), 2);
    assert_eq!(session.secret_word(), "DOG");
    assert!(HangmanInvariants::check_all(&session).is_ok());
}

#[test]
fn test_session_survives_serde() {
    let mut session = GameSession::start("cat", budget(6)).expect("valid word");
    session.guess("c").expect("valid guess");
    session.guess("z").expect("valid guess");

    let json = serde_json::to_string(&session).expect("serialize");
    let restored: GameSession = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, session);
}

#[test]
fn test_deserialize_rejects_empty_word() {
    let json = r#"{
        "secret_word": [],
        "revealed": [],
        "wrong_letters": [],
        "guessed": [],
        "mistake_budget": 6,
        "status": "InProgress"
    }"#;
    assert!(serde_json::from_str::<GameSession>(json).is_err());
}

#[test]
fn test_deserialize_rejects_inconsistent_state() {
    let short_reveal = r#"{
        "secret_word": ["C", "A", "T"],
        "revealed": [null],
        "wrong_letters": [],
        "guessed": [],
        "mistake_budget": 6,
        "status": "Won"
    }"#;
    assert!(serde_json::from_str::<GameSession>(short_reveal).is_err());

    let unearned_reveal = r#"{
        "secret_word": ["C", "A", "T"],
        "revealed": ["C", null, null],
        "wrong_letters": [],
        "guessed": [],
        "mistake_budget": 6,
        "status": "InProgress"
    }"#;
    assert!(serde_json::from_str::<GameSession>(unearned_reveal).is_err());

    let lowercase_word = r#"{
        "secret_word": ["c", "a", "t"],
        "revealed": [null, null, null],
        "wrong_letters": [],
        "guessed": [],
        "mistake_budget": 6,
        "status": "InProgress"
    }"#;
    assert!(serde_json::from_str::<GameSession>(lowercase_word).is_err());

    let over_budget = r#"{
        "secret_word": ["C", "A", "T"],
        "revealed": [null, null, null],
        "wrong_letters": ["X"],
        "guessed": ["X"],
        "mistake_budget": 1,
        "status": "InProgress"
    }"#;
    assert!(serde_json::from_str::<GameSession>(over_budget).is_err());
}
