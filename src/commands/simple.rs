//! Simple interactive CLI mode
//!
//! Line-based game without TUI

use crate::dictionary::Dictionary;
use crate::game::{GameSession, Outcome, RootWordPolicy};
use crate::output::display::{print_rejection, print_root_banner, print_used_words};
use colored::Colorize;
use std::io::{self, Write};

/// Run the line-based game
///
/// A new root word is drawn from `pool` for every game.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no root
/// word can be chosen.
pub fn run_simple<S, D>(
    pool: &[S],
    dictionary: &D,
    policy: &RootWordPolicy,
    language: &str,
) -> Result<(), String>
where
    S: AsRef<str>,
    D: Dictionary + ?Sized,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Scramble - Simple Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make as many words as you can from the letters of the root word.");
    println!("Words must be real, at least 3 letters, and not the root itself.\n");
    println!("Commands: ':words' to list found words, ':new' for a new word, ':quit' to exit\n");

    let start = || {
        GameSession::new_session(pool, dictionary, policy)
            .map(|session| session.with_language(language))
            .map_err(|e| e.to_string())
    };

    let mut session = start()?;
    print_root_banner(session.root_word());

    loop {
        let Some(input) = get_user_input("Word")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.as_str() {
            ":quit" | ":q" | ":exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            ":new" | ":n" => {
                session = start()?;
                println!("\n🔄 New game started!");
                print_root_banner(session.root_word());
            }
            ":words" | ":w" => print_used_words(session.used_words()),
            _ => match session.submit_word(&input) {
                Ok(Outcome::Ignored) => {}
                Ok(Outcome::Accepted(accepted)) => {
                    println!(
                        "{} {} ({} found)",
                        "✓".green().bold(),
                        accepted.word.bright_white().bold(),
                        accepted.used_words.len()
                    );
                }
                Err(err) => print_rejection(&err),
            },
        }
    }
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
