//! Dictionary oracle
//!
//! The game never decides on its own whether a word is real. It asks a
//! `Dictionary`, which may be backed by a word list, a spell checker or a
//! remote service.

mod word_list;

pub use word_list::WordListDictionary;

/// Language tag used when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Answers whether a word is recognized in a given language
pub trait Dictionary {
    /// Return `true` if `word` is a recognized word in `language`
    ///
    /// `word` is already normalized (trimmed and lower-cased).
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}

impl<T: Dictionary + ?Sized> Dictionary for &T {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        (**self).is_real_word(word, language)
    }
}

impl<T: Dictionary + ?Sized> Dictionary for Box<T> {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        (**self).is_real_word(word, language)
    }
}
