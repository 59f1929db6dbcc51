//! Word check command
//!
//! Explains whether a word would be accepted for a root word, and why.

use crate::core::{LetterUsage, RootWord, normalize};
use crate::dictionary::Dictionary;
use crate::game::{UsedWords, ValidationError, validate};

/// Result of checking a word
pub struct CheckResult {
    pub root: String,
    pub word: String,
    pub verdict: Result<(), ValidationError>,
    /// One entry per distinct letter, in order of first appearance
    pub letters: Vec<LetterUsage>,
}

/// Check a word against a root word as the first submission of a game
///
/// # Errors
///
/// Returns an error if:
/// - The root word is blank or contains whitespace
/// - The word is blank
pub fn check_word<D: Dictionary + ?Sized>(
    root: &str,
    word: &str,
    dictionary: &D,
    language: &str,
) -> Result<CheckResult, String> {
    let root = RootWord::new(root).map_err(|e| format!("Invalid root word: {e}"))?;
    let word = normalize(word).ok_or("Word must not be blank")?;

    let verdict = validate(&word, &root, &UsedWords::new(), dictionary, language);
    let letters = root.letters().usage(&word);

    Ok(CheckResult {
        root: root.text().to_string(),
        word,
        verdict,
        letters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use crate::game::ErrorKind;

    fn dictionary() -> WordListDictionary {
        WordListDictionary::from_words(["cat", "cats", "coats", "taco", "at"])
    }

    #[test]
    fn check_accepted_word() {
        let result = check_word("tacos", "Cats", &dictionary(), "en").unwrap();

        assert_eq!(result.root, "tacos");
        assert_eq!(result.word, "cats");
        assert!(result.verdict.is_ok());
        assert!(result.letters.iter().all(LetterUsage::is_covered));
    }

    #[test]
    fn check_reports_letter_shortfall() {
        let result = check_word("tacos", "catt", &dictionary(), "en").unwrap();

        assert_eq!(
            result.verdict.as_ref().map_err(ValidationError::kind),
            Err(ErrorKind::NotPossible)
        );
        assert_eq!(
            result.letters,
            vec![
                LetterUsage {
                    letter: 'c',
                    needed: 1,
                    available: 1,
                },
                LetterUsage {
                    letter: 'a',
                    needed: 1,
                    available: 1,
                },
                LetterUsage {
                    letter: 't',
                    needed: 2,
                    available: 1,
                },
            ]
        );
    }

    #[test]
    fn check_root_word_itself() {
        let result = check_word("tacos", "TACOS", &dictionary(), "en").unwrap();
        assert_eq!(
            result.verdict.map_err(|e| e.kind()),
            Err(ErrorKind::AlreadyUsed)
        );
    }

    #[test]
    fn check_short_word() {
        let result = check_word("tacos", "at", &dictionary(), "en").unwrap();
        assert_eq!(result.verdict.map_err(|e| e.kind()), Err(ErrorKind::TooShort));
    }

    #[test]
    fn check_invalid_input() {
        assert!(check_word("", "cat", &dictionary(), "en").is_err());
        assert!(check_word("ta cos", "cat", &dictionary(), "en").is_err());
        assert!(check_word("tacos", "  ", &dictionary(), "en").is_err());
    }
}
