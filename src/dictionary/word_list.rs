//! Hash-set backed dictionary

use super::{DEFAULT_LANGUAGE, Dictionary};
use crate::core::normalize;
use crate::wordlists::DICTIONARY_WORDS;
use rustc_hash::FxHashSet;

/// A dictionary backed by an in-memory word list
///
/// Lookups are O(1). Words are normalized on insertion, so lookups must use
/// normalized words as well.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build an English dictionary from any iterator of words
    ///
    /// Blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::from_words(["Silk", "worm", ""]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.is_real_word("silk", "en"));
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_language(DEFAULT_LANGUAGE, words)
    }

    /// Build a dictionary for a specific language tag
    #[must_use]
    pub fn with_language<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| normalize(word.as_ref()))
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY_WORDS)
    }

    /// Language tag this dictionary answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Check membership without a language tag
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in unspecified order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language) && self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_words_normalizes_and_dedupes() {
        let dictionary = WordListDictionary::from_words(["Silk", " silk ", "WORM", "", "  "]);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("silk"));
        assert!(dictionary.contains("worm"));
        assert!(!dictionary.contains("Silk"));
    }

    #[test]
    fn language_must_match() {
        let dictionary = WordListDictionary::from_words(["silk"]);
        assert_eq!(dictionary.language(), "en");
        assert!(dictionary.is_real_word("silk", "en"));
        assert!(dictionary.is_real_word("silk", "EN"));
        assert!(!dictionary.is_real_word("silk", "fr"));
    }

    #[test]
    fn custom_language() {
        let dictionary = WordListDictionary::with_language("fr", ["soie"]);
        assert!(dictionary.is_real_word("soie", "fr"));
        assert!(!dictionary.is_real_word("soie", "en"));
    }

    #[test]
    fn empty_dictionary_knows_nothing() {
        let dictionary = WordListDictionary::from_words(Vec::<String>::new());
        assert!(dictionary.is_empty());
        assert!(!dictionary.is_real_word("silk", "en"));
    }

    #[test]
    fn embedded_dictionary_knows_common_words() {
        let dictionary = WordListDictionary::embedded();
        assert!(!dictionary.is_empty());
        for word in ["silk", "ilk", "worm", "milk", "cat"] {
            assert!(dictionary.contains(word), "missing {word}");
        }
        assert!(!dictionary.contains("catt"));
        assert!(!dictionary.contains("slik"));
    }
}
