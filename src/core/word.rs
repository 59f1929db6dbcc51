//! Root word and submission normalization
//!
//! A `RootWord` stores the normalized word along with its letter inventory for
//! subset-anagram checks.

use super::letters::LetterCounts;
use std::fmt;

/// Normalize raw player input
///
/// Trims surrounding whitespace and lower-cases the rest. Returns `None` when
/// nothing is left, which callers treat as a blank submission.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize(" Silk \n").as_deref(), Some("silk"));
/// assert_eq!(normalize("   "), None);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// The session's fixed source word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootWord {
    text: String,
    letters: LetterCounts,
}

/// Error type for invalid root words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootWordError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for RootWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Root word must not be empty"),
            Self::ContainsWhitespace => write!(f, "Root word must be a single word"),
        }
    }
}

impl std::error::Error for RootWordError {}

impl RootWord {
    /// Create a root word from raw text
    ///
    /// The text is normalized the same way player submissions are.
    ///
    /// # Errors
    /// Returns `RootWordError` if:
    /// - Nothing remains after trimming
    /// - The word contains inner whitespace
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new("SilkWorm").unwrap();
    /// assert_eq!(root.text(), "silkworm");
    /// assert!(root.can_spell("milk"));
    ///
    /// assert!(RootWord::new("  ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, RootWordError> {
        let text = normalize(text.as_ref()).ok_or(RootWordError::Empty)?;

        if text.chars().any(char::is_whitespace) {
            return Err(RootWordError::ContainsWhitespace);
        }

        let letters = LetterCounts::from_word(&text);
        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letter inventory available to the player
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterCounts {
        &self.letters
    }

    /// Check whether a normalized word can be spelled from this root
    #[inline]
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        self.letters.can_spell(word)
    }

    /// Number of characters in the root
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always false for a constructed root
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
