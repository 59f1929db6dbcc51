//! Formatting utilities for terminal output

/// Circled length marker shown next to each found word
///
/// Uses the circled digits ① to ⑳ and falls back to `(n)` beyond that.
#[must_use]
pub fn length_badge(len: usize) -> String {
    match u32::try_from(len) {
        Ok(n @ 1..=20) => {
            char::from_u32(0x2460 + n - 1).map_or_else(|| format!("({len})"), String::from)
        }
        _ => format!("({len})"),
    }
}

/// Spread a word out as upper-case letter tiles
#[must_use]
pub fn letter_tiles(word: &str) -> String {
    let mut tiles = String::with_capacity(word.len() * 2);
    for (i, ch) in word.chars().enumerate() {
        if i > 0 {
            tiles.push(' ');
        }
        tiles.extend(ch.to_uppercase());
    }
    tiles
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
