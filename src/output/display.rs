//! Display functions for command results

use super::formatters::{create_progress_bar, length_badge, letter_tiles};
use crate::commands::{CheckResult, HintsResult};
use crate::core::RootWord;
use crate::game::{UsedWords, ValidationError};
use colored::Colorize;

/// Print the root word for a new game
pub fn print_root_banner(root: &RootWord) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        letter_tiles(root.text()).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print the words found so far, most recent first
pub fn print_used_words(used: &UsedWords) {
    if used.is_empty() {
        println!("No words yet.");
        return;
    }

    println!("\nFound {} words:", used.len());
    for word in used.iter() {
        println!(
            "  {} {}",
            length_badge(word.chars().count()).bright_cyan(),
            word
        );
    }
    println!();
}

/// Print a rejected submission as title and message
pub fn print_rejection(err: &ValidationError) {
    println!(
        "{} {}",
        format!("✗ {}", err.title()).red().bold(),
        err.message()
    );
}

/// Print the result of a word check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} from {} ",
        "CHECK:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold(),
        letter_tiles(&result.root).bright_white()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n🔤 Letters:");
    for usage in &result.letters {
        let line = format!(
            "   {}  need {}  have {}",
            usage.letter.to_uppercase(),
            usage.needed,
            usage.available
        );
        if usage.is_covered() {
            println!("{}", line.green());
        } else {
            println!("{}", line.red());
        }
    }

    println!();
    match &result.verdict {
        Ok(()) => println!("{}", "✅ Accepted".green().bold()),
        Err(err) => print_rejection(err),
    }
}

/// Print the result of a hint scan
pub fn print_hints_result(result: &HintsResult, limit: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "HINTS FOR".bright_cyan().bold(),
        letter_tiles(&result.root).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} of {} words fit ({:.2}s)",
        result.words.len().to_string().bright_yellow().bold(),
        result.scanned,
        result.duration.as_secs_f64()
    );

    let longest = result.words.first().map_or(0, |w| w.chars().count());
    let shown = limit.unwrap_or(result.words.len());

    println!();
    for word in result.words.iter().take(shown) {
        let len = word.chars().count();
        println!(
            "   {} {:<12} {}",
            length_badge(len).bright_cyan(),
            word,
            create_progress_bar(len as f64, longest as f64, longest).green()
        );
    }

    if shown < result.words.len() {
        println!(
            "{}",
            format!("   … and {} more", result.words.len() - shown).bright_black()
        );
    }
}
