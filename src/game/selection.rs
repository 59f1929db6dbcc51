//! Root word selection

use super::error::SessionError;
use crate::core::RootWord;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::warn;

/// Root word used by the bundled configuration when the pool is empty
pub const DEFAULT_FALLBACK_ROOT: &str = "silkworm";

/// What to do when the root word pool has no usable entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RootWordPolicy {
    /// Refuse to start a session
    #[default]
    Strict,
    /// Start with this word instead
    Fallback(String),
}

impl RootWordPolicy {
    /// Fallback if `word` is given, strict otherwise
    #[must_use]
    pub fn from_fallback(word: Option<&str>) -> Self {
        word.map_or(Self::Strict, |w| Self::Fallback(w.to_string()))
    }
}

/// A pool entry is usable if it normalizes to a single non-empty word
fn is_usable(entry: &str) -> bool {
    let trimmed = entry.trim();
    !trimmed.is_empty() && !trimmed.contains(char::is_whitespace)
}

/// Pick a root word uniformly at random from `pool`
///
/// Blank entries are ignored. When nothing usable remains the `policy`
/// decides between failing and a fallback word.
///
/// # Errors
///
/// - `SessionError::NoRootWordsAvailable` if the pool is unusable under `Strict`
/// - `SessionError::InvalidFallback` if the fallback is not a single word
pub fn choose_root_word<S, R>(
    pool: &[S],
    policy: &RootWordPolicy,
    rng: &mut R,
) -> Result<RootWord, SessionError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let candidates: Vec<&str> = pool
        .iter()
        .map(AsRef::as_ref)
        .filter(|entry| is_usable(entry))
        .collect();

    if let Some(word) = candidates.choose(rng) {
        return RootWord::new(word).map_err(|_| SessionError::NoRootWordsAvailable);
    }

    match policy {
        RootWordPolicy::Strict => Err(SessionError::NoRootWordsAvailable),
        RootWordPolicy::Fallback(word) => {
            warn!(fallback = %word, "root word pool is empty, using fallback");
            RootWord::new(word).map_err(|_| SessionError::InvalidFallback(word.clone()))
        }
    }
}
