//! Core domain types for the word game
//!
//! Pure letter arithmetic and word normalization with no I/O. Everything here
//! is deterministic and cheap to test.

mod letters;
mod word;

pub use letters::{LetterCounts, LetterUsage, is_possible};
pub use word::{RootWord, RootWordError, normalize};
