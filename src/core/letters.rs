//! Letter inventories and the subset-anagram test
//!
//! A word can be spelled from a root word when, for every letter, it uses that
//! letter no more often than the root contains it.

use rustc_hash::FxHashMap;

/// Per-letter counts for a word
///
/// Built once per root word so each candidate check is linear in the
/// candidate's length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, u32>,
}

impl LetterCounts {
    /// Count the letters of a word
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterCounts;
    ///
    /// let counts = LetterCounts::from_word("tacos");
    /// assert_eq!(counts.count('t'), 1);
    /// assert_eq!(counts.count('z'), 0);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts: FxHashMap<char, u32> = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many times `letter` is available
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Check whether `word` can be spelled from these letters
    ///
    /// Consumes one occurrence per candidate letter from a working copy and
    /// fails on the first letter that has run out.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.counts.clone();
        for ch in word.chars() {
            match remaining.get_mut(&ch) {
                Some(left) if *left > 0 => *left -= 1,
                _ => return false,
            }
        }
        true
    }

    /// Compare each distinct letter of `word` against this inventory
    ///
    /// Returns `(letter, needed, available)` in order of first appearance.
    /// `can_spell(word)` holds exactly when no entry needs more than is
    /// available.
    #[must_use]
    pub fn usage(&self, word: &str) -> Vec<LetterUsage> {
        let needed = Self::from_word(word);
        let mut usage: Vec<LetterUsage> = Vec::with_capacity(needed.distinct());

        for letter in word.chars() {
            if usage.iter().any(|u| u.letter == letter) {
                continue;
            }
            usage.push(LetterUsage {
                letter,
                needed: needed.count(letter),
                available: self.count(letter),
            });
        }

        usage
    }
}

/// How one letter of a word compares to an inventory's supply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterUsage {
    pub letter: char,
    pub needed: u32,
    pub available: u32,
}

impl LetterUsage {
    #[must_use]
    pub const fn is_covered(&self) -> bool {
        self.needed <= self.available
    }
}

/// Check whether `word` can be spelled using the letters of `root`
///
/// Each letter of `root` may be used at most as many times as it appears.
///
/// # Examples
/// ```
/// use word_scramble::core::is_possible;
///
/// assert!(is_possible("cat", "tacos"));
/// assert!(is_possible("cats", "tacos"));
/// assert!(!is_possible("catt", "tacos"));
/// ```
#[must_use]
pub fn is_possible(word: &str, root: &str) -> bool {
    LetterCounts::from_word(root).can_spell(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_duplicates() {
        let counts = LetterCounts::from_word("silkworm");
        assert_eq!(counts.count('s'), 1);
        assert_eq!(counts.count('w'), 1);
        assert_eq!(counts.distinct(), 8);

        let counts = LetterCounts::from_word("committee");
        assert_eq!(counts.count('m'), 2);
        assert_eq!(counts.count('t'), 2);
        assert_eq!(counts.count('e'), 2);
        assert_eq!(counts.distinct(), 6);
    }

    #[test]
    fn empty_word_has_no_letters() {
        let counts = LetterCounts::from_word("");
        assert_eq!(counts.distinct(), 0);
        assert!(counts.can_spell(""));
        assert!(!counts.can_spell("a"));
    }

    #[test]
    fn tacos_examples() {
        assert!(is_possible("cat", "tacos"));
        assert!(is_possible("cats", "tacos"));
        assert!(is_possible("coats", "tacos"));
        assert!(!is_possible("catt", "tacos"));
        assert!(!is_possible("dog", "tacos"));
    }

    #[test]
    fn letter_budget_is_respected() {
        let root = LetterCounts::from_word("banana");
        assert!(root.can_spell("nab"));
        assert!(root.can_spell("banana"));
        assert!(root.can_spell("aaa"));
        assert!(!root.can_spell("aaaa"));
        assert!(!root.can_spell("bb"));
    }

    #[test]
    fn can_spell_does_not_consume_inventory() {
        let root = LetterCounts::from_word("tacos");
        assert!(root.can_spell("cost"));
        assert!(root.can_spell("cost"));
        assert_eq!(root, LetterCounts::from_word("tacos"));
    }

    #[test]
    fn matches_count_comparison_for_every_letter() {
        let roots = ["silkworm", "banana", "teaspoon", "committee"];
        let words = [
            "silk", "worm", "milks", "noon", "tattoo", "nab", "meet", "comet", "ooo", "pate",
        ];

        for root in roots {
            let available = LetterCounts::from_word(root);
            for word in words {
                let expected = word
                    .chars()
                    .all(|ch| word.matches(ch).count() as u32 <= available.count(ch));
                assert_eq!(
                    available.can_spell(word),
                    expected,
                    "can_spell({word:?}) from {root:?}"
                );
            }
        }
    }

    #[test]
    fn usage_lists_letters_in_order_of_appearance() {
        let root = LetterCounts::from_word("tacos");
        let usage = root.usage("catt");
        assert_eq!(
            usage,
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
        assert!(!usage.iter().all(LetterUsage::is_covered));
    }

    #[test]
    fn usage_agrees_with_can_spell() {
        let root = LetterCounts::from_word("silkworm");
        for word in ["silk", "worms", "mills", "zoo", "milky", "owl"] {
            let covered = root.usage(word).iter().all(LetterUsage::is_covered);
            assert_eq!(covered, root.can_spell(word), "usage({word:?})");
        }
    }

    #[test]
    fn non_ascii_letters_count_as_characters() {
        let root = LetterCounts::from_word("crème");
        assert_eq!(root.count('è'), 1);
        assert!(root.can_spell("mè"));
        assert!(!root.can_spell("mèè"));
    }
}
