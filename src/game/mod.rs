//! Game sessions and the word acceptance rules
//!
//! A `GameSession` owns the root word, the list of accepted words and the
//! last rejection. Everything else in the crate drives one of these.

mod error;
mod rules;
mod selection;
mod session;
mod used;

pub use error::{ErrorKind, SessionError, ValidationError};
pub use rules::{MIN_WORD_LEN, is_long_enough, is_original, validate};
pub use selection::{DEFAULT_FALLBACK_ROOT, RootWordPolicy, choose_root_word};
pub use session::{AcceptedWord, GameSession, Outcome};
pub use used::UsedWords;
