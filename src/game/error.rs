//! Gameplay and session errors

use std::fmt;

/// Which acceptance rule a submission broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Equal to the root word or already accepted
    AlreadyUsed,
    /// Needs letters the root word does not have
    NotPossible,
    /// Rejected by the dictionary
    NotReal,
    /// Two characters or fewer
    TooShort,
}

impl ErrorKind {
    /// Short headline for an alert
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotPossible => "Word not possible",
            Self::NotReal => "Word not recognized",
            Self::TooShort => "Word too short",
        }
    }

    /// Explanation shown under the title
    #[must_use]
    pub fn message(self, root: &str) -> String {
        match self {
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::NotPossible => format!("You can't spell that word from '{root}'!"),
            Self::NotReal => "You can't just make them up, you know!".to_string(),
            Self::TooShort => "Words must contain more than 2 letters".to_string(),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AlreadyUsed => "already used",
            Self::NotPossible => "not possible",
            Self::NotReal => "not real",
            Self::TooShort => "too short",
        };
        f.write_str(name)
    }
}

/// A rejected submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    kind: ErrorKind,
    word: String,
    title: String,
    message: String,
}

impl ValidationError {
    /// Build the error for `word` rejected against `root`
    #[must_use]
    pub fn new(kind: ErrorKind, word: impl Into<String>, root: &str) -> Self {
        Self {
            kind,
            word: word.into(),
            title: kind.title().to_string(),
            message: kind.message(root),
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The normalized word that was rejected
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Failure to start a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The root word pool had no usable entries
    NoRootWordsAvailable,
    /// A configured fallback root word was invalid
    InvalidFallback(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRootWordsAvailable => write!(f, "no root words available"),
            Self::InvalidFallback(word) => {
                write!(f, "fallback root word '{word}' is not a single word")
            }
        }
    }
}

impl std::error::Error for SessionError {}
