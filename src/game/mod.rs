//! Game logic: difficulty levels, word lists, and round generation

pub mod dictionary;
pub mod search;
pub mod validation;

use dictionary::{Dictionary, DictionaryError};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::time::Duration;
use validation::can_form_from;

/// A base word must yield at least this many solutions to be played
pub const MIN_SOLUTIONS: usize = 10;

/// Base word draws before giving up on a dictionary
pub const MAX_BASE_WORD_ATTEMPTS: usize = 1000;

/// Difficulty level selected on the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    /// Round length
    pub fn duration(&self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_secs(180),
            Difficulty::Hard => Duration::from_secs(120),
        }
    }

    /// Shortest word that counts as a solution
    pub fn min_length(&self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Hard => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Errors that prevent a round from starting.
#[derive(Debug)]
pub enum GameError {
    /// Word lists could not be prepared
    Dictionary(DictionaryError),
    /// No base word with enough solutions was found
    InsufficientDictionary {
        six_letter_words: usize,
        attempts: usize,
        min_length: usize,
    },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::Dictionary(e) => write!(f, "{}", e),
            GameError::InsufficientDictionary {
                six_letter_words: 0,
                ..
            } => write!(f, "dictionary has no six-letter words"),
            GameError::InsufficientDictionary {
                attempts,
                min_length,
                ..
            } => write!(
                f,
                "no base word with {}+ words of length {}+ after {} attempts",
                MIN_SOLUTIONS, min_length, attempts
            ),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Dictionary(e) => Some(e),
            GameError::InsufficientDictionary { .. } => None,
        }
    }
}

impl From<DictionaryError> for GameError {
    fn from(e: DictionaryError) -> Self {
        GameError::Dictionary(e)
    }
}

/// Every word in `words` at least `min_length` long that can be spelled
/// from the letters of `base`, in input order.
pub fn solutions_for(base: &str, words: &[String], min_length: usize) -> Vec<String> {
    words
        .iter()
        .filter(|w| w.len() >= min_length && can_form_from(base, w))
        .cloned()
        .collect()
}

/// Draw base words until one yields at least [`MIN_SOLUTIONS`] solutions.
///
/// Returns the base word and its solutions sorted ascending with duplicates
/// removed.
pub fn pick_base_word_and_solutions<R: Rng>(
    dictionary: &Dictionary,
    min_length: usize,
    rng: &mut R,
) -> Result<(String, Vec<String>), GameError> {
    let candidates = dictionary.six_letter_words();
    let insufficient = |attempts| GameError::InsufficientDictionary {
        six_letter_words: candidates.len(),
        attempts,
        min_length,
    };

    for attempt in 1..=MAX_BASE_WORD_ATTEMPTS {
        let base = candidates.choose(rng).ok_or_else(|| insufficient(0))?;

        let found = solutions_for(base, dictionary.all_words(), min_length);
        if found.len() < MIN_SOLUTIONS {
            log::debug!("base word {} has {} solutions, redrawing", base, found.len());
            continue;
        }

        let mut sorted = search::merge_sort(&found);
        sorted.dedup();
        if sorted.len() >= MIN_SOLUTIONS {
            log::debug!("picked base word after {} attempts", attempt);
            return Ok((base.clone(), sorted));
        }
    }

    Err(insufficient(MAX_BASE_WORD_ATTEMPTS))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::SeedableRng;

    /// Small dictionary around the letters of "static" and "listen"
    pub(crate) fn sample_dictionary() -> Dictionary {
        let all = [
            "act", "acts", "ait", "ais", "attic", "cast", "cat", "cats", "cis", "cist", "ins",
            "inlet", "its", "lens", "let", "lets", "lie", "lien", "liens", "lies", "line",
            "lines", "lint", "list", "listen", "lit", "net", "nets", "nil", "nit", "nits",
            "sat", "scat", "sic", "silent", "sit", "slit", "static", "stack", "stat", "tacit",
            "tack", "tat", "tats", "tea", "ten", "tens", "tic", "tics", "tile", "tin", "tine",
            "tins", "tis",
        ];
        let six = ["listen", "silent", "static"];
        Dictionary::from_words(
            all.iter().map(|w| w.to_string()).collect(),
            six.iter().map(|w| w.to_string()).collect(),
        )
    }

    #[test]
    fn test_difficulty_settings() {
        assert_eq!(Difficulty::Easy.duration(), Duration::from_secs(180));
        assert_eq!(Difficulty::Easy.min_length(), 3);
        assert_eq!(Difficulty::Hard.duration(), Duration::from_secs(120));
        assert_eq!(Difficulty::Hard.min_length(), 5);
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }

    #[test]
    fn test_solutions_for_static() {
        let words: Vec<String> = ["cat", "cats", "act", "tack", "stack", "attic", "static"]
            .iter()
            .map(|w| w.to_string())
            .collect();

        let found = solutions_for("static", &words, 3);
        assert_eq!(found, vec!["cat", "cats", "act", "attic", "static"]);
    }

    #[test]
    fn test_solutions_respect_min_length() {
        let dictionary = sample_dictionary();
        let found = solutions_for("static", dictionary.all_words(), 5);
        assert_eq!(found, vec!["attic", "static", "tacit"]);
    }

    #[test]
    fn test_pick_returns_sorted_valid_solutions() {
        let dictionary = sample_dictionary();
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        let (base, solutions) = pick_base_word_and_solutions(&dictionary, 3, &mut rng).unwrap();

        assert!(dictionary.six_letter_words().contains(&base));
        assert!(solutions.len() >= MIN_SOLUTIONS);
        assert!(solutions.windows(2).all(|w| w[0] < w[1]));
        for word in &solutions {
            assert!(can_form_from(&base, word), "{} not formable from {}", word, base);
        }
        assert!(solutions.contains(&base));
    }

    #[test]
    fn test_pick_is_deterministic_with_seed() {
        let dictionary = sample_dictionary();
        let mut rng1 = rand::rngs::StdRng::seed_from_u64(5);
        let mut rng2 = rand::rngs::StdRng::seed_from_u64(5);

        let first = pick_base_word_and_solutions(&dictionary, 3, &mut rng1).unwrap();
        let second = pick_base_word_and_solutions(&dictionary, 3, &mut rng2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_pick_fails_without_six_letter_words() {
        let dictionary = Dictionary::from_words(vec!["cat".to_string()], Vec::new());
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);

        let err = pick_base_word_and_solutions(&dictionary, 3, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GameError::InsufficientDictionary {
                six_letter_words: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_pick_gives_up_when_threshold_unreachable() {
        let dictionary = sample_dictionary();
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);

        // No base word has ten words of six letters
        let err = pick_base_word_and_solutions(&dictionary, 6, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GameError::InsufficientDictionary {
                attempts: MAX_BASE_WORD_ATTEMPTS,
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_dictionary_entries_collapse() {
        let mut all: Vec<String> = sample_dictionary().all_words().to_vec();
        all.extend(all.clone());
        let dictionary = Dictionary::from_words(all, vec!["static".to_string()]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);

        let (_, solutions) = pick_base_word_and_solutions(&dictionary, 3, &mut rng).unwrap();
        let mut deduped = solutions.clone();
        deduped.dedup();
        assert_eq!(solutions, deduped);
    }
}
