#![allow(dead_code)]
//! Dictionary word lists
//!
//! The game plays from two derived lists generated from a larger source
//! corpus: every unique word of 3-6 letters, and every unique 6-letter word.
//! Both are plain text, one lowercase word per line, sorted. They are
//! regenerated from the corpus whenever either file is missing.

use super::validation::{is_word, MAX_WORD_LENGTH};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name of the list of all playable words
pub const ALL_WORDS_FILE: &str = "allwords.txt";

/// File name of the list of base word candidates
pub const SIX_LETTER_WORDS_FILE: &str = "6letterwords.txt";

/// Errors that can occur while preparing word lists.
#[derive(Debug)]
pub enum DictionaryError {
    /// The source corpus could not be opened
    CorpusMissing { path: PathBuf, source: io::Error },
    /// Reading the source corpus failed partway
    CorpusRead { path: PathBuf, source: io::Error },
    /// Reading or writing a word list failed
    Io { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryError::CorpusMissing { path, source } => {
                write!(f, "cannot open word corpus {}: {}", path.display(), source)
            }
            DictionaryError::CorpusRead { path, source } => {
                write!(f, "cannot read word corpus {}: {}", path.display(), source)
            }
            DictionaryError::Io { path, source } => {
                write!(f, "word list {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DictionaryError::CorpusMissing { source, .. } => Some(source),
            DictionaryError::CorpusRead { source, .. } => Some(source),
            DictionaryError::Io { source, .. } => Some(source),
        }
    }
}

/// Paths of the two derived word lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListPaths {
    pub all_words: PathBuf,
    pub six_letter_words: PathBuf,
}

impl WordListPaths {
    /// Derived list locations inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            all_words: dir.join(ALL_WORDS_FILE),
            six_letter_words: dir.join(SIX_LETTER_WORDS_FILE),
        }
    }

    fn exist(&self) -> bool {
        self.all_words.exists() && self.six_letter_words.exists()
    }
}

/// Make sure both derived lists exist in `out_dir`, regenerating them from
/// `corpus` if either one is missing.
pub fn ensure_word_lists(corpus: &Path, out_dir: &Path) -> Result<WordListPaths, DictionaryError> {
    let paths = WordListPaths::in_dir(out_dir);
    if paths.exist() {
        return Ok(paths);
    }

    log::info!(
        "word lists missing in {}, regenerating from {}",
        out_dir.display(),
        corpus.display()
    );
    generate_word_lists(corpus, &paths)?;
    Ok(paths)
}

/// Stream the corpus, filter and bucket its words, and write both lists.
///
/// Output is deterministic for a given corpus.
pub fn generate_word_lists(corpus: &Path, paths: &WordListPaths) -> Result<(), DictionaryError> {
    let file = File::open(corpus).map_err(|source| DictionaryError::CorpusMissing {
        path: corpus.to_path_buf(),
        source,
    })?;

    let mut all_words = BTreeSet::new();
    let mut six_letter_words = BTreeSet::new();

    for line in BufReader::new(file).split(b'\n') {
        let line = line.map_err(|source| DictionaryError::CorpusRead {
            path: corpus.to_path_buf(),
            source,
        })?;
        // Lines that are not UTF-8 cannot be words
        let Ok(line) = String::from_utf8(line) else {
            continue;
        };
        let word = line.trim().to_lowercase();
        if !is_word(&word) {
            continue;
        }
        if word.len() == MAX_WORD_LENGTH {
            six_letter_words.insert(word.clone());
        }
        all_words.insert(word);
    }

    log::info!(
        "generated {} words ({} base word candidates)",
        all_words.len(),
        six_letter_words.len()
    );

    write_word_list(&paths.six_letter_words, &six_letter_words)?;
    write_word_list(&paths.all_words, &all_words)?;
    Ok(())
}

/// Atomically replace `path` with the words joined by newlines.
fn write_word_list(path: &Path, words: &BTreeSet<String>) -> Result<(), DictionaryError> {
    let io_err = |source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(io_err)?;

    let mut temp = NamedTempFile::new_in(dir).map_err(io_err)?;
    let contents = words.iter().map(String::as_str).collect::<Vec<_>>().join("\n");
    temp.write_all(contents.as_bytes()).map_err(io_err)?;
    temp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

/// Read a derived list. Lines that are not playable words, including lines
/// that are not UTF-8, are skipped.
pub fn load_word_list(path: &Path) -> Result<Vec<String>, DictionaryError> {
    let contents = fs::read(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(contents
        .split(|b| *b == b'\n')
        .filter_map(|line| std::str::from_utf8(line).ok())
        .map(str::trim)
        .filter(|w| is_word(w))
        .map(str::to_string)
        .collect())
}

/// Both word lists held in memory for round generation.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    all_words: Vec<String>,
    six_letter_words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from in-memory lists (used by tests and tools).
    pub fn from_words(all_words: Vec<String>, six_letter_words: Vec<String>) -> Self {
        Self {
            all_words,
            six_letter_words,
        }
    }

    /// Ensure the derived lists exist and load them.
    pub fn load(corpus: &Path, out_dir: &Path) -> Result<Self, DictionaryError> {
        let paths = ensure_word_lists(corpus, out_dir)?;
        Ok(Self {
            all_words: load_word_list(&paths.all_words)?,
            six_letter_words: load_word_list(&paths.six_letter_words)?
                .into_iter()
                .filter(|w| w.len() == MAX_WORD_LENGTH)
                .collect(),
        })
    }

    /// All playable words (3-6 letters)
    pub fn all_words(&self) -> &[String] {
        &self.all_words
    }

    /// Candidate base words (exactly 6 letters)
    pub fn six_letter_words(&self) -> &[String] {
        &self.six_letter_words
    }
}
