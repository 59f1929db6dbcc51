//! The acceptance pipeline
//!
//! Only one error can be shown at a time, so the checks run in a fixed order
//! and the first failure wins: originality, possibility, realness, length.

use super::error::{ErrorKind, ValidationError};
use super::used::UsedWords;
use crate::core::RootWord;
use crate::dictionary::Dictionary;

/// Shortest acceptable word, in characters
pub const MIN_WORD_LEN: usize = 3;

/// Not the root word and not accepted before
#[must_use]
pub fn is_original(word: &str, root: &RootWord, used: &UsedWords) -> bool {
    word != root.text() && !used.contains(word)
}

/// Long enough to count
#[must_use]
pub fn is_long_enough(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LEN
}

/// Run every check against a normalized word
///
/// # Errors
///
/// Returns the `ValidationError` for the first rule the word breaks.
pub fn validate<D: Dictionary + ?Sized>(
    word: &str,
    root: &RootWord,
    used: &UsedWords,
    dictionary: &D,
    language: &str,
) -> Result<(), ValidationError> {
    let kind = if !is_original(word, root, used) {
        ErrorKind::AlreadyUsed
    } else if !root.can_spell(word) {
        ErrorKind::NotPossible
    } else if !dictionary.is_real_word(word, language) {
        ErrorKind::NotReal
    } else if !is_long_enough(word) {
        ErrorKind::TooShort
    } else {
        return Ok(());
    };

    Err(ValidationError::new(kind, word, root.text()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;

    fn check(word: &str, used: &UsedWords) -> Result<(), ErrorKind> {
        let root = RootWord::new("silkworm").unwrap();
        let dictionary =
            WordListDictionary::from_words(["silk", "ilk", "worm", "milk", "so", "silkworm"]);
        validate(word, &root, used, &dictionary, "en").map_err(|e| e.kind())
    }

    #[test]
    fn accepts_valid_word() {
        assert_eq!(check("silk", &UsedWords::new()), Ok(()));
        assert_eq!(check("ilk", &UsedWords::new()), Ok(()));
    }

    #[test]
    fn root_word_is_not_original() {
        assert_eq!(
            check("silkworm", &UsedWords::new()),
            Err(ErrorKind::AlreadyUsed)
        );
    }

    #[test]
    fn used_word_is_not_original() {
        let mut used = UsedWords::new();
        used.push_front("silk".to_string());
        assert_eq!(check("silk", &used), Err(ErrorKind::AlreadyUsed));
    }

    #[test]
    fn impossible_word() {
        assert_eq!(check("mills", &UsedWords::new()), Err(ErrorKind::NotPossible));
    }

    #[test]
    fn spellable_unknown_word_is_not_real() {
        // every letter of "worms" is in the root once
        assert_eq!(check("worms", &UsedWords::new()), Err(ErrorKind::NotReal));
    }

    #[test]
    fn made_up_word() {
        assert_eq!(check("slik", &UsedWords::new()), Err(ErrorKind::NotReal));
    }

    #[test]
    fn short_real_word() {
        assert_eq!(check("so", &UsedWords::new()), Err(ErrorKind::TooShort));
    }

    #[test]
    fn originality_beats_possibility() {
        // "zzz" is not spellable from the root either
        let mut used = UsedWords::new();
        used.push_front("zzz".to_string());
        assert_eq!(check("zzz", &used), Err(ErrorKind::AlreadyUsed));
    }

    #[test]
    fn possibility_beats_realness() {
        assert_eq!(check("qqq", &UsedWords::new()), Err(ErrorKind::NotPossible));
    }

    #[test]
    fn realness_beats_length() {
        // spellable from the root, not in the dictionary, and short
        assert_eq!(check("ow", &UsedWords::new()), Err(ErrorKind::NotReal));
    }

    #[test]
    fn length_boundary() {
        assert!(!is_long_enough("to"));
        assert!(is_long_enough("tot"));
        assert!(!is_long_enough("é"));
        assert!(is_long_enough("été"));
    }
}
