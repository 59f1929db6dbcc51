//! Word Scramble
//!
//! A word building game: find real words spelled from the letters of a root word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::RootWord;
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::game::{ErrorKind, GameSession, Outcome};
//!
//! let dictionary = WordListDictionary::from_words(["silk", "ilk"]);
//! let mut session = GameSession::new(RootWord::new("silkworm").unwrap(), dictionary);
//!
//! assert!(matches!(session.submit_word(" Silk "), Ok(Outcome::Accepted(_))));
//! let err = session.submit_word("mills").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::NotPossible);
//! ```

// Core domain types
pub mod core;

// Dictionary oracle
pub mod dictionary;

// Sessions and acceptance rules
pub mod game;

// Word lists
pub mod wordlists;

// Configuration file
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
