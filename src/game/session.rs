//! A single game: one root word and the words found for it

use super::error::{SessionError, ValidationError};
use super::rules::validate;
use super::selection::{RootWordPolicy, choose_root_word};
use super::used::UsedWords;
use crate::core::{RootWord, normalize};
use crate::dictionary::{DEFAULT_LANGUAGE, Dictionary};
use rand::Rng;
use tracing::{debug, info};

/// Result of a submission that did not break a rule
#[derive(Debug)]
pub enum Outcome<'a> {
    /// Blank input, nothing happened
    Ignored,
    /// The word was added to the used list
    Accepted(AcceptedWord<'a>),
}

/// A freshly accepted word along with the updated list
#[derive(Debug)]
pub struct AcceptedWord<'a> {
    pub word: String,
    pub used_words: &'a UsedWords,
}

/// Mutable state for one game
///
/// The root word is fixed for the lifetime of the session; a new game is a
/// new `GameSession`. `submit_word` takes `&mut self`, so at most one
/// submission can be in flight per session.
#[derive(Debug, Clone)]
pub struct GameSession<D> {
    root: RootWord,
    used: UsedWords,
    last_error: Option<ValidationError>,
    dictionary: D,
    language: String,
}

impl<D: Dictionary> GameSession<D> {
    /// Start a session with an explicit root word
    #[must_use]
    pub fn new(root: RootWord, dictionary: D) -> Self {
        info!(root = %root, "starting session");
        Self {
            root,
            used: UsedWords::new(),
            last_error: None,
            dictionary,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Start a session with a root word picked at random from `pool`
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if no root word can be chosen; see
    /// [`choose_root_word`].
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::WordListDictionary;
    /// use word_scramble::game::{GameSession, RootWordPolicy};
    ///
    /// let dictionary = WordListDictionary::from_words(["silk", "ilk"]);
    /// let session = GameSession::new_session(&["silkworm"], dictionary, &RootWordPolicy::Strict)
    ///     .unwrap();
    /// assert_eq!(session.root_word().text(), "silkworm");
    /// ```
    pub fn new_session<S: AsRef<str>>(
        pool: &[S],
        dictionary: D,
        policy: &RootWordPolicy,
    ) -> Result<Self, SessionError> {
        Self::new_session_with_rng(pool, dictionary, policy, &mut rand::rng())
    }

    /// Like [`GameSession::new_session`] with a caller-supplied random source
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if no root word can be chosen.
    pub fn new_session_with_rng<S, R>(
        pool: &[S],
        dictionary: D,
        policy: &RootWordPolicy,
        rng: &mut R,
    ) -> Result<Self, SessionError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let root = choose_root_word(pool, policy, rng)?;
        Ok(Self::new(root, dictionary))
    }

    /// Ask the dictionary about a different language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Submit a word from the player
    ///
    /// Blank input is ignored without touching any state. Otherwise the word
    /// is normalized and checked; on success it goes to the front of the used
    /// list and the last error is cleared.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` for the first rule the word breaks. The
    /// same error is kept as [`GameSession::last_error`] and the used list is
    /// left unchanged.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    /// use word_scramble::dictionary::WordListDictionary;
    /// use word_scramble::game::{ErrorKind, GameSession, Outcome};
    ///
    /// let root = RootWord::new("silkworm").unwrap();
    /// let mut session = GameSession::new(root, WordListDictionary::from_words(["silk"]));
    ///
    /// assert!(matches!(session.submit_word(" Silk "), Ok(Outcome::Accepted(_))));
    /// let err = session.submit_word("silk").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::AlreadyUsed);
    /// ```
    pub fn submit_word(&mut self, raw: &str) -> Result<Outcome<'_>, ValidationError> {
        let Some(word) = normalize(raw) else {
            return Ok(Outcome::Ignored);
        };

        if let Err(err) = validate(
            &word,
            &self.root,
            &self.used,
            &self.dictionary,
            &self.language,
        ) {
            debug!(word = %word, kind = %err.kind(), "rejected");
            self.last_error = Some(err.clone());
            return Err(err);
        }

        debug!(word = %word, total = self.used.len() + 1, "accepted");
        self.last_error = None;
        self.used.push_front(word.clone());

        Ok(Outcome::Accepted(AcceptedWord {
            word,
            used_words: &self.used,
        }))
    }

    #[inline]
    #[must_use]
    pub const fn root_word(&self) -> &RootWord {
        &self.root
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub const fn used_words(&self) -> &UsedWords {
        &self.used
    }

    /// Error from the latest non-blank submission, if it was rejected
    #[must_use]
    pub const fn last_error(&self) -> Option<&ValidationError> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }
}
