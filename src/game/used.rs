//! Ledger of accepted words

use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Accepted words, most recent first
///
/// The deque keeps display order and the set answers membership in O(1).
/// Both are only touched by `push_front`, which keeps them in sync.
#[derive(Debug, Clone, Default)]
pub struct UsedWords {
    ordered: VecDeque<String>,
    seen: FxHashSet<String>,
}

impl UsedWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a word has been accepted
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    /// Record a newly accepted word at the front
    ///
    /// Returns `false` and leaves the ledger untouched if the word is
    /// already present.
    pub(crate) fn push_front(&mut self, word: String) -> bool {
        if !self.seen.insert(word.clone()) {
            return false;
        }
        self.ordered.push_front(word);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Iterate most recent first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.ordered.iter().map(String::as_str)
    }

    /// Copy out the words in display order
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.ordered.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_front_orders_most_recent_first() {
        let mut used = UsedWords::new();
        assert!(used.push_front("silk".to_string()));
        assert!(used.push_front("ilk".to_string()));
        assert!(used.push_front("worm".to_string()));

        assert_eq!(used.to_vec(), vec!["worm", "ilk", "silk"]);
        assert_eq!(used.iter().next(), Some("worm"));
        assert_eq!(used.len(), 3);
    }

    #[test]
    fn duplicates_are_refused() {
        let mut used = UsedWords::new();
        assert!(used.push_front("silk".to_string()));
        assert!(!used.push_front("silk".to_string()));
        assert_eq!(used.len(), 1);
    }

    #[test]
    fn membership_tracks_sequence() {
        let mut used = UsedWords::new();
        assert!(!used.contains("silk"));
        used.push_front("silk".to_string());
        assert!(used.contains("silk"));
        assert!(used.iter().all(|w| used.contains(w)));
    }

    #[test]
    fn empty_ledger() {
        let used = UsedWords::new();
        assert!(used.is_empty());
        assert_eq!(used.iter().next(), None);
        assert_eq!(used.iter().count(), 0);
    }
}
