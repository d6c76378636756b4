//! Persistent storage for the best score
//!
//! The high score is a single decimal integer in a text file. A missing or
//! unreadable file counts as a high score of 0; the file is rewritten
//! wholesale every time the score is beaten.

use directories::ProjectDirs;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name of the high score inside the data directory
pub const HIGH_SCORE_FILE: &str = "highscore.txt";

/// Errors that can occur during storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// The store could not be read or written
    Unavailable(io::Error),
    /// The store holds something other than a score
    Corrupt(String),
    /// Could not determine data directory
    NoDataDirectory,
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(e) => write!(f, "high score store unavailable: {}", e),
            StorageError::Corrupt(contents) => {
                write!(f, "high score store holds {:?}, not a score", contents)
            }
            StorageError::NoDataDirectory => write!(f, "could not determine data directory"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Unavailable(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        StorageError::Unavailable(e)
    }
}

/// Get the OS-standard data directory for the game.
///
/// - Linux: `$XDG_DATA_HOME/twist/` or `~/.local/share/twist/`
/// - macOS: `~/Library/Application Support/twist/`
pub fn data_dir() -> Result<PathBuf, StorageError> {
    ProjectDirs::from("", "", "twist")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDirectory)
}

/// The best score seen, backed by a text file.
#[derive(Debug)]
pub struct HighScoreStore {
    path: PathBuf,
    high_score: u32,
}

impl HighScoreStore {
    /// Open the store at `path`, falling back to 0 if it cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let high_score = match read_high_score(&path) {
            Ok(score) => score,
            Err(e) => {
                log::warn!("{}; starting from 0", e);
                0
            }
        };
        Self { path, high_score }
    }

    /// The best score seen so far
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Record a finished round's score.
    ///
    /// Returns true if it beat the previous best. The new best is kept in
    /// memory even if writing it out fails.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.high_score {
            return false;
        }

        self.high_score = score;
        if let Err(e) = write_high_score(&self.path, score) {
            log::warn!("could not save high score to {}: {}", self.path.display(), e);
        }
        true
    }
}

/// Read the stored score. A file that does not exist yet, or is empty, is 0.
fn read_high_score(path: &Path) -> Result<u32, StorageError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    let trimmed = contents.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse()
        .map_err(|_| StorageError::Corrupt(trimmed.to_string()))
}

/// Replace the stored score.
fn write_high_score(path: &Path, score: u32) -> Result<(), StorageError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let mut temp = NamedTempFile::new_in(dir)?;
    write!(temp, "{}", score)?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
