//! Word list loading utilities
//!
//! Word lists are newline-delimited. Every entry is normalized and blank lines
//! are dropped, so a trailing newline never yields an empty root word.

use crate::core::normalize;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_word_list(&content);

    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Split newline-delimited text into normalized words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("Silkworm\r\n\n  teaspoon \n");
/// assert_eq!(words, vec!["silkworm", "teaspoon"]);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content.lines().filter_map(normalize).collect()
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize(s)).collect()
}
