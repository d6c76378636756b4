//! Letter-pool checks for submitted and dictionary words
//!
//! A word can be formed from a base word when every letter it uses is
//! available in the base word at least as many times as it is used.

/// Shortest word that counts as a solution
pub const MIN_WORD_LENGTH: usize = 3;

/// Longest word that counts as a solution (the base word length)
pub const MAX_WORD_LENGTH: usize = 6;

/// Check that `candidate` can be spelled from the letters of `base`.
///
/// The base letters are treated as a bag: each letter of the candidate
/// removes the first matching occurrence, and the check fails as soon as a
/// letter is no longer available.
pub fn can_form_from(base: &str, candidate: &str) -> bool {
    let mut available: Vec<char> = base.chars().collect();

    for c in candidate.chars() {
        match available.iter().position(|&b| b == c) {
            Some(pos) => {
                available.remove(pos);
            }
            None => return false,
        }
    }

    true
}

/// Check that a line holds a playable word: lowercase ASCII letters only,
/// between [`MIN_WORD_LENGTH`] and [`MAX_WORD_LENGTH`] long.
pub fn is_word(word: &str) -> bool {
    (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word.len())
        && word.chars().all(|c| c.is_ascii_lowercase())
}

/// Normalize raw player input before lookup
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}
