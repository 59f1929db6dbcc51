//! Game configuration stored in `word_scramble.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::dictionary::{DEFAULT_LANGUAGE, WordListDictionary};
use crate::game::RootWordPolicy;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{DICTIONARY_WORDS, START_WORDS};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "word_scramble.toml";

/// Game configuration (TOML).
///
/// Every field is optional in the file. Missing word list paths mean the
/// lists compiled into the binary are used.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Newline-delimited root word candidates.
    pub start_words: Option<PathBuf>,

    /// Newline-delimited list of recognized words.
    pub dictionary: Option<PathBuf>,

    /// Language tag passed to the dictionary.
    pub language: String,

    /// Root word to use when the start word list is empty. Absent means an
    /// empty list is an error.
    pub fallback_root_word: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_words: None,
            dictionary: None,
            language: DEFAULT_LANGUAGE.to_string(),
            fallback_root_word: None,
        }
    }
}

impl GameConfig {
    /// # Errors
    ///
    /// Returns an error for a blank language tag or a multi-word fallback.
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(anyhow!("language must be a non-empty tag"));
        }
        if let Some(word) = &self.fallback_root_word {
            let word = word.trim();
            if word.is_empty() || word.contains(char::is_whitespace) {
                return Err(anyhow!("fallback_root_word must be a single word"));
            }
        }
        Ok(())
    }

    /// Root word policy implied by `fallback_root_word`.
    #[must_use]
    pub fn policy(&self) -> RootWordPolicy {
        RootWordPolicy::from_fallback(self.fallback_root_word.as_deref())
    }

    /// Load the root word pool, falling back to the embedded list.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured file cannot be read.
    pub fn load_start_words(&self) -> Result<Vec<String>> {
        match &self.start_words {
            Some(path) => load_from_file(path)
                .with_context(|| format!("read start words {}", path.display())),
            None => Ok(words_from_slice(START_WORDS)),
        }
    }

    /// Load the dictionary, falling back to the embedded list.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured file cannot be read.
    pub fn load_dictionary(&self) -> Result<WordListDictionary> {
        let words = match &self.dictionary {
            Some(path) => load_from_file(path)
                .with_context(|| format!("read dictionary {}", path.display()))?,
            None => words_from_slice(DICTIONARY_WORDS),
        };
        Ok(WordListDictionary::with_language(&self.language, words))
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `GameConfig::default()`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_config(path: &Path) -> Result<GameConfig> {
    if !path.exists() {
        let cfg = GameConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GameConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
