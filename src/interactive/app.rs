//! TUI application state and logic

use crate::dictionary::Dictionary;
use crate::game::{GameSession, Outcome, RootWordPolicy, SessionError, ValidationError};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Where new root words come from
pub struct WordSource<'a, D: ?Sized> {
    pub pool: &'a [String],
    pub dictionary: &'a D,
    pub policy: &'a RootWordPolicy,
    pub language: &'a str,
}

/// Application state
pub struct App<'a, D: Dictionary + ?Sized> {
    pub session: GameSession<&'a D>,
    pub source: WordSource<'a, D>,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub games_started: usize,
    pub should_quit: bool,
}

/// Modal box describing a rejected word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl From<&ValidationError> for Alert {
    fn from(err: &ValidationError) -> Self {
        Self {
            title: err.title().to_string(),
            message: err.message().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, D: Dictionary + ?Sized> App<'a, D> {
    /// Start the first game
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if no root word can be chosen.
    pub fn new(source: WordSource<'a, D>) -> Result<Self, SessionError> {
        let session = Self::start_session(&source)?;

        let mut app = Self {
            session,
            source,
            input_buffer: String::new(),
            alert: None,
            messages: Vec::new(),
            games_started: 1,
            should_quit: false,
        };
        app.add_message(
            "Make words from the letters above. Enter submits, Ctrl-N starts over.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    fn start_session(source: &WordSource<'a, D>) -> Result<GameSession<&'a D>, SessionError> {
        GameSession::new_session(source.pool, source.dictionary, source.policy)
            .map(|session| session.with_language(source.language))
    }

    /// Submit whatever is in the input buffer
    ///
    /// The buffer is cleared on acceptance and kept on rejection so the
    /// player can fix the word.
    pub fn submit(&mut self) {
        let input = self.input_buffer.clone();

        let result = match self.session.submit_word(&input) {
            Ok(Outcome::Ignored) => None,
            Ok(Outcome::Accepted(accepted)) => Some(Ok(accepted.word)),
            Err(err) => Some(Err(err)),
        };

        match result {
            None => {}
            Some(Ok(word)) => {
                self.input_buffer.clear();
                self.add_message(&format!("Found '{word}'"), MessageStyle::Success);
            }
            Some(Err(err)) => {
                self.alert = Some(Alert::from(&err));
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn new_game(&mut self) {
        match Self::start_session(&self.source) {
            Ok(session) => {
                self.session = session;
                self.games_started += 1;
                self.input_buffer.clear();
                self.alert = None;
                self.messages.clear();
                self.add_message(
                    &format!("New root word: {}", self.session.root_word().text().to_uppercase()),
                    MessageStyle::Info,
                );
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        if self.alert.is_some() {
            // The alert is modal until dismissed
            if matches!(code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_alert();
            }
            return;
        }

        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary + ?Sized>(app: App<'_, D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, D: Dictionary + ?Sized>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, D>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;

    fn type_word<D: Dictionary + ?Sized>(app: &mut App<'_, D>, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    }

    fn with_app(test: impl FnOnce(&mut App<'_, WordListDictionary>)) {
        let pool = vec!["silkworm".to_string()];
        let dictionary = WordListDictionary::from_words(["silk", "ilk", "worm"]);
        let policy = RootWordPolicy::Strict;
        let mut app = App::new(WordSource {
            pool: &pool,
            dictionary: &dictionary,
            policy: &policy,
            language: "en",
        })
        .unwrap();
        test(&mut app);
    }

    #[test]
    fn accepted_word_clears_input() {
        with_app(|app| {
            type_word(app, "Silk");
            assert!(app.input_buffer.is_empty());
            assert!(app.alert.is_none());
            assert_eq!(app.session.used_words().to_vec(), vec!["silk"]);
        });
    }

    #[test]
    fn rejection_opens_alert_and_keeps_input() {
        with_app(|app| {
            type_word(app, "mills");
            assert_eq!(app.input_buffer, "mills");
            let alert = app.alert.clone().unwrap();
            assert_eq!(alert.title, "Word not possible");
            assert!(app.session.used_words().is_empty());
        });
    }

    #[test]
    fn alert_is_modal_until_dismissed() {
        with_app(|app| {
            type_word(app, "silkworm");
            assert!(app.alert.is_some());

            app.handle_key(KeyCode::Char('x'), KeyModifiers::NONE);
            assert_eq!(app.input_buffer, "silkworm");

            app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
            assert!(app.alert.is_none());
            assert!(!app.should_quit);
        });
    }

    #[test]
    fn blank_submission_does_nothing() {
        with_app(|app| {
            type_word(app, "   ");
            assert!(app.alert.is_none());
            assert!(app.session.used_words().is_empty());
        });
    }

    #[test]
    fn new_game_resets_words() {
        with_app(|app| {
            type_word(app, "silk");
            app.handle_key(KeyCode::Char('n'), KeyModifiers::CONTROL);
            assert_eq!(app.games_started, 2);
            assert!(app.session.used_words().is_empty());
            assert_eq!(app.session.root_word().text(), "silkworm");
        });
    }

    #[test]
    fn quit_keys() {
        with_app(|app| {
            app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
            assert!(app.should_quit);
        });
        with_app(|app| {
            app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert!(app.should_quit);
        });
    }

    #[test]
    fn empty_pool_fails_to_start() {
        let pool: Vec<String> = Vec::new();
        let dictionary = WordListDictionary::from_words(["silk"]);
        let policy = RootWordPolicy::Strict;
        let result = App::new(WordSource {
            pool: &pool,
            dictionary: &dictionary,
            policy: &policy,
            language: "en",
        });
        assert!(matches!(result, Err(SessionError::NoRootWordsAvailable)));
    }

    #[test]
    fn message_log_is_bounded() {
        with_app(|app| {
            for i in 0..10 {
                app.add_message(&format!("message {i}"), MessageStyle::Info);
            }
            assert_eq!(app.messages.len(), 5);
            assert_eq!(app.messages[4].text, "message 9");
        });
    }
}
