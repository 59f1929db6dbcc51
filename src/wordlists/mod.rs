//! Word lists for the game
//!
//! Provides the embedded root-word pool and dictionary, compiled into the
//! binary, plus loaders for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY_WORDS, DICTIONARY_WORDS_COUNT, START_WORDS, START_WORDS_COUNT};
