//! Runtime configuration
//!
//! Paths default to the OS data directory and can be overridden from the
//! command line.

use crate::game::dictionary::WordListPaths;
use crate::game::Difficulty;
use crate::storage::{self, HIGH_SCORE_FILE};
use clap::{Parser, ValueEnum};
use once_cell::sync::Lazy;
use std::path::PathBuf;

/// Directory holding the corpus and derived word lists
pub const WORD_LIST_DIR: &str = "wordlists";

/// File name of the source corpus inside [`WORD_LIST_DIR`]
pub const CORPUS_FILE: &str = "original_wordlist.txt";

/// OS data directory, falling back to the working directory
static DEFAULT_DATA_DIR: Lazy<PathBuf> = Lazy::new(|| match storage::data_dir() {
    Ok(dir) => dir,
    Err(e) => {
        log::warn!("{}; using current directory", e);
        PathBuf::from(".")
    }
});

/// Difficulty as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

/// Command line arguments
#[derive(Parser, Debug, Default)]
#[command(name = "twist", version, about = "Find every word hidden in six letters before time runs out.")]
pub struct CliArgs {
    /// Source word list, one word per line
    #[arg(long, value_name = "PATH")]
    pub corpus: Option<PathBuf>,

    /// Directory for derived word lists and the high score
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Difficulty preselected on the menu
    #[arg(long, value_enum)]
    pub difficulty: Option<DifficultyArg>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub corpus_path: PathBuf,
    pub word_list_dir: PathBuf,
    pub high_score_path: PathBuf,
    pub difficulty: Difficulty,
}

impl Config {
    /// Resolve paths from the arguments and the default data directory.
    pub fn from_args(args: &CliArgs) -> Self {
        let data_dir = args
            .data_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_DATA_DIR.clone());
        let word_list_dir = data_dir.join(WORD_LIST_DIR);

        Self {
            corpus_path: args
                .corpus
                .clone()
                .unwrap_or_else(|| word_list_dir.join(CORPUS_FILE)),
            high_score_path: data_dir.join(HIGH_SCORE_FILE),
            word_list_dir,
            difficulty: args.difficulty.map(Difficulty::from).unwrap_or_default(),
        }
    }

    pub fn word_list_paths(&self) -> WordListPaths {
        WordListPaths::in_dir(&self.word_list_dir)
    }
}
