//! Hints command
//!
//! Scans a word list for every word that a fresh game would accept.

use crate::core::RootWord;
use crate::dictionary::Dictionary;
use crate::game::{UsedWords, validate};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::debug;

/// Words found for a root word
#[derive(Debug)]
pub struct HintsResult {
    pub root: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    pub scanned: usize,
    pub duration: Duration,
}

/// Find every candidate that passes all rules on an empty game
///
/// Candidates are assumed normalized. The scan runs in parallel; pass
/// `show_progress` to draw a progress bar on stderr.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
#[must_use]
pub fn find_words<D: Dictionary + Sync + ?Sized>(
    root: &RootWord,
    candidates: &[String],
    dictionary: &D,
    language: &str,
    show_progress: bool,
) -> HintsResult {
    let start = Instant::now();
    let used = UsedWords::new();

    let pb = if show_progress {
        let pb = ProgressBar::new(candidates.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut words: Vec<String> = candidates
        .par_iter()
        .inspect(|_| pb.inc(1))
        .filter(|word| validate(word, root, &used, dictionary, language).is_ok())
        .cloned()
        .collect();

    pb.finish_and_clear();

    words.sort_unstable_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    let duration = start.elapsed();
    debug!(root = %root, found = words.len(), scanned = candidates.len(), "hint scan done");

    HintsResult {
        root: root.text().to_string(),
        words,
        scanned: candidates.len(),
        duration,
    }
}
