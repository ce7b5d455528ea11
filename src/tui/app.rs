//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strictly_hangman::game::{GameStatus, GuessFeedback, SessionError, Snapshot};
use strictly_hangman::{Language, RoundController, RoundError, WordSource};
use tracing::{debug, info, instrument, warn};

/// Screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Language selection.
    Menu,
    /// A round in progress or awaiting acknowledgement.
    Game,
}

/// What a key press asks the event loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing beyond redrawing.
    Stay,
    /// Fetch a word and start a round.
    Begin(Option<Language>),
    /// Confirm the finished round and set up the next one.
    Acknowledge,
    /// Leave the application.
    Quit,
}

/// Main application state.
pub struct App<S> {
    rounds: RoundController<S>,
    screen: Screen,
    languages: Vec<Language>,
    selected: usize,
    message: String,
}

impl<S: WordSource> App<S> {
    /// Creates the application on the language menu.
    pub fn new(rounds: RoundController<S>) -> Self {
        let languages = Language::all();
        let selected = rounds
            .language()
            .and_then(|l| languages.iter().position(|&x| x == l))
            .unwrap_or(0);
        Self {
            rounds,
            screen: Screen::Menu,
            languages,
            selected,
            message: "Choose a language and press Enter".to_string(),
        }
    }

    /// Returns the active screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns the languages offered on the menu.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Returns the highlighted menu entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Returns the status line.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the display state of the current round, if any.
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.rounds.session().map(|s| s.snapshot())
    }

    /// Returns the language of the current round.
    pub fn language(&self) -> Option<Language> {
        self.rounds.language()
    }

    /// Sets the status line shown while a word is being fetched.
    pub fn set_loading(&mut self) {
        self.message = "Loading word...".to_string();
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(screen = ?self.screen))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Transition {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("User quit");
            return Transition::Quit;
        }

        match self.screen {
            Screen::Menu => self.handle_menu_key(key.code),
            Screen::Game => self.handle_game_key(key.code),
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) -> Transition {
        match code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Transition::Stay
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(self.languages.len().saturating_sub(1));
                Transition::Stay
            }
            KeyCode::Enter => Transition::Begin(self.languages.get(self.selected).copied()),
            KeyCode::Char('q') | KeyCode::Esc => Transition::Quit,
            _ => Transition::Stay,
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) -> Transition {
        let over = self.rounds.session().is_some_and(|s| s.is_over());
        match code {
            KeyCode::Esc => {
                self.rounds.abandon();
                self.screen = Screen::Menu;
                self.message = "Choose a language and press Enter".to_string();
                Transition::Stay
            }
            KeyCode::Enter if over => Transition::Acknowledge,
            KeyCode::Char(c) if !over => {
                self.guess(c);
                Transition::Stay
            }
            KeyCode::Char(_) => {
                self.message = "Press Enter to continue".to_string();
                Transition::Stay
            }
            _ => Transition::Stay,
        }
    }

    fn guess(&mut self, c: char) {
        match self.rounds.guess(&c.to_string()) {
            Ok(outcome) => {
                let letter = c.to_uppercase();
                self.message = match (outcome.status(), outcome.feedback()) {
                    (GameStatus::InProgress, GuessFeedback::Hit { .. }) => "Good guess!".to_string(),
                    (GameStatus::InProgress, GuessFeedback::Miss) => {
                        format!("There is no {} in the word.", letter)
                    }
                    (GameStatus::InProgress, GuessFeedback::Repeat) => {
                        format!("You already tried {}.", letter)
                    }
                    (status, _) => self.outcome_message(status),
                };
            }
            Err(RoundError::Session(SessionError::InvalidGuess(input))) => {
                debug!(%input, "Invalid guess");
                self.message = "Please enter a single letter.".to_string();
            }
            Err(e) => {
                warn!(error = %e, "Guess failed");
                self.message = e.to_string();
            }
        }
    }

    fn outcome_message(&self, status: GameStatus) -> String {
        let word = self
            .rounds
            .session()
            .map(|s| s.secret_word())
            .unwrap_or_default();
        match status {
            GameStatus::Won => format!("You found it: {}! Press Enter for the next round.", word),
            GameStatus::Lost => {
                format!("Out of guesses! The word was {}. Press Enter to continue.", word)
            }
            GameStatus::InProgress => String::new(),
        }
    }

    /// Fetches a word and starts a round.
    #[instrument(skip(self))]
    pub async fn begin(&mut self, language: Option<Language>) {
        match self.rounds.begin(language).await {
            Ok(_) => {
                self.screen = Screen::Game;
                self.message = "Type a letter to guess".to_string();
            }
            Err(e) => self.fetch_failed(e),
        }
    }

    /// Confirms a finished round and sets up the next one.
    #[instrument(skip(self))]
    pub async fn acknowledge(&mut self) {
        match self.rounds.acknowledge().await {
            Ok(_) => {
                self.screen = Screen::Game;
                self.message = "New round! Type a letter to guess".to_string();
            }
            Err(e) => self.fetch_failed(e),
        }
    }

    fn fetch_failed(&mut self, error: RoundError) {
        warn!(error = %error, "Could not start round");
        self.rounds.abandon();
        self.screen = Screen::Menu;
        self.message = "Could not load a word. Try again.".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_hangman::game::MistakeBudget;
    use strictly_hangman::{AfterRound, FixedWordSource};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(words: &[&str], budget: usize) -> App<FixedWordSource> {
        let rounds = RoundController::new(
            FixedWordSource::new(words.iter().copied()),
            MistakeBudget::new(budget).expect("positive"),
            AfterRound::NewWord,
        );
        App::new(rounds)
    }

    #[test]
    fn test_menu_navigation() {
        let mut app = app(&["cat"], 6);
        assert_eq!(app.handle_key(key(KeyCode::Up)), Transition::Stay);
        assert_eq!(app.selected(), 0);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(
            app.handle_key(key(KeyCode::Enter)),
            Transition::Begin(Some(Language::German))
        );
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Transition::Quit);
    }

    #[tokio::test]
    async fn test_round_flow() {
        let mut app = app(&["ox", "bee"], 6);
        app.begin(Some(Language::English)).await;
        assert_eq!(app.screen(), Screen::Game);

        app.handle_key(key(KeyCode::Char('z')));
        assert_eq!(app.message(), "There is no Z in the word.");
        app.handle_key(key(KeyCode::Char('z')));
        assert_eq!(app.message(), "You already tried Z.");
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.message(), "Please enter a single letter.");

        app.handle_key(key(KeyCode::Char('o')));
        app.handle_key(key(KeyCode::Char('x')));
        assert!(app.message().starts_with("You found it: OX!"));

        assert_eq!(app.handle_key(key(KeyCode::Enter)), Transition::Acknowledge);
        app.acknowledge().await;
        let snapshot = app.snapshot().expect("round started");
        assert_eq!(snapshot.revealed_word(), "___");
    }

    #[tokio::test]
    async fn test_fetch_failure_returns_to_menu() {
        let mut app = app(&[], 6);
        app.begin(None).await;
        assert_eq!(app.screen(), Screen::Menu);
        assert_eq!(app.message(), "Could not load a word. Try again.");
        assert!(app.snapshot().is_none());
    }

    #[tokio::test]
    async fn test_escape_abandons_round() {
        let mut app = app(&["ox"], 6);
        app.begin(None).await;
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.screen(), Screen::Menu);
        assert!(app.snapshot().is_none());
    }
}
