//! Word Scramble - CLI
//!
//! Word building game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use word_scramble::{
    commands::{check_word, find_words, run_simple},
    config::{DEFAULT_CONFIG_FILE, GameConfig, load_config},
    core::RootWord,
    dictionary::WordListDictionary,
    game::choose_root_word,
    logging,
    output::{print_check_result, print_hints_result},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many real words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (TOML)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Root word list: path to a newline-delimited file (default: embedded)
    #[arg(short = 's', long, global = true)]
    start_words: Option<PathBuf>,

    /// Dictionary: path to a newline-delimited file (default: embedded)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Dictionary language tag
    #[arg(short = 'l', long, global = true)]
    language: Option<String>,

    /// Root word to use if the root word list is empty
    #[arg(long, global = true)]
    fallback: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Check whether a word would be accepted for a root word
    Check {
        /// The root word
        root: String,

        /// The word to check
        word: String,
    },

    /// List every dictionary word that can be made from a root word
    Hints {
        /// The root word (default: random from the root word list)
        root: Option<String>,

        /// Show at most this many words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Merge command line overrides into the file configuration
fn load_settings(cli: &Cli) -> Result<GameConfig> {
    let mut config = load_config(&cli.config)?;

    if let Some(path) = &cli.start_words {
        config.start_words = Some(path.clone());
    }
    if let Some(path) = &cli.dictionary {
        config.dictionary = Some(path.clone());
    }
    if let Some(language) = &cli.language {
        config.language.clone_from(language);
    }
    if let Some(word) = &cli.fallback {
        config.fallback_root_word = Some(word.clone());
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let config = load_settings(&cli)?;
    let dictionary = config.load_dictionary()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config, &dictionary),
        Commands::Simple => run_simple_command(&config, &dictionary),
        Commands::Check { root, word } => run_check_command(&config, &dictionary, &root, &word),
        Commands::Hints { root, limit } => {
            run_hints_command(&config, &dictionary, root.as_deref(), limit)
        }
    }
}

fn run_play_command(config: &GameConfig, dictionary: &WordListDictionary) -> Result<()> {
    use word_scramble::interactive::{App, WordSource, run_tui};

    let pool = config.load_start_words()?;
    let policy = config.policy();
    let app = App::new(WordSource {
        pool: &pool,
        dictionary,
        policy: &policy,
        language: &config.language,
    })
    .context("start game")?;
    run_tui(app)
}

fn run_simple_command(config: &GameConfig, dictionary: &WordListDictionary) -> Result<()> {
    let pool = config.load_start_words()?;
    run_simple(&pool, dictionary, &config.policy(), &config.language)
        .map_err(|e| anyhow::anyhow!(e))
}

fn run_check_command(
    config: &GameConfig,
    dictionary: &WordListDictionary,
    root: &str,
    word: &str,
) -> Result<()> {
    let result =
        check_word(root, word, dictionary, &config.language).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_hints_command(
    config: &GameConfig,
    dictionary: &WordListDictionary,
    root: Option<&str>,
    limit: Option<usize>,
) -> Result<()> {
    let root = match root {
        Some(word) => RootWord::new(word)?,
        None => {
            let pool = config.load_start_words()?;
            choose_root_word(&pool, &config.policy(), &mut rand::rng())?
        }
    };

    let mut candidates: Vec<String> = dictionary.words().map(str::to_string).collect();
    candidates.sort_unstable();

    let result = find_words(&root, &candidates, dictionary, &config.language, true);
    print_hints_result(&result, limit);
    Ok(())
}
