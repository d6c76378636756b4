#![allow(dead_code)]
//! Round state management
//!
//! [`Game`] owns the current round (letters, solution list, typed words,
//! score) and the countdown. The presentation layer drives it with commands
//! and queries and can register listeners that run when a round ends.

use super::timer::{Countdown, ZeroListener};
use crate::game::dictionary::Dictionary;
use crate::game::validation::{normalize, MAX_WORD_LENGTH};
use crate::game::{pick_base_word_and_solutions, search, Difficulty, GameError};
use crate::storage::HighScoreStore;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// The countdown reached zero
    TimeUp,
    /// Every solution was typed before time ran out
    AllWordsFound,
}

/// Where the game is in its round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No round in progress
    Idle,
    /// Countdown running, submissions accepted
    Playing,
    /// Round finished, results available until reset or restart
    RoundOver(RoundEnd),
}

/// One entry of the solution grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionSlot {
    /// A word the player has typed
    Found(String),
    /// A word still hidden, by length
    Hidden(usize),
}

/// Callback run when a round ends
pub type RoundListener = Arc<dyn Fn(RoundEnd) + Send + Sync>;

type ListenerMap = Arc<Mutex<BTreeMap<String, RoundListener>>>;

/// Run every listener with `end`. A panicking listener does not stop the rest.
fn fan_out(listeners: &ListenerMap, end: RoundEnd) {
    let listeners: Vec<(String, RoundListener)> = match listeners.lock() {
        Ok(map) => map.iter().map(|(k, v)| (k.clone(), Arc::clone(v))).collect(),
        Err(_) => return,
    };

    for (name, listener) in listeners {
        if catch_unwind(AssertUnwindSafe(|| listener(end))).is_err() {
            log::warn!("round listener {} panicked", name);
        }
    }
}

/// The round state machine
pub struct Game {
    dictionary: Dictionary,
    high_scores: HighScoreStore,
    countdown: Countdown,
    rng: StdRng,
    phase: Phase,
    difficulty: Difficulty,
    /// The hidden base word
    base_word: String,
    /// Base word letters in display order
    letters: Vec<char>,
    /// Sorted, deduplicated solutions
    solutions: Vec<String>,
    /// Words found this round
    typed_words: HashSet<String>,
    score: u32,
    /// Countdown run driving the current round, 0 when idle
    run: u32,
    /// Run the zero listener should accept, shared with the countdown thread
    active_run: Arc<AtomicU32>,
    /// Last run whose countdown reached zero
    expired_run: Arc<AtomicU32>,
    listeners: ListenerMap,
}

impl Game {
    /// Create an idle game over a loaded dictionary.
    pub fn new(dictionary: Dictionary, high_scores: HighScoreStore) -> Self {
        Self::with_parts(
            dictionary,
            high_scores,
            Countdown::new(seconds(Difficulty::default().duration())),
            StdRng::from_os_rng(),
        )
    }

    /// Create an idle game with a given countdown and rng (for testing).
    pub fn with_parts(
        dictionary: Dictionary,
        high_scores: HighScoreStore,
        countdown: Countdown,
        rng: StdRng,
    ) -> Self {
        let active_run = Arc::new(AtomicU32::new(0));
        let expired_run = Arc::new(AtomicU32::new(0));
        let listeners: ListenerMap = Arc::new(Mutex::new(BTreeMap::new()));

        // Expiry of a run from an earlier round is ignored
        let on_zero: ZeroListener = {
            let active_run = Arc::clone(&active_run);
            let expired_run = Arc::clone(&expired_run);
            let listeners = Arc::clone(&listeners);
            Arc::new(move |run| {
                if run != 0 && active_run.load(Ordering::SeqCst) == run {
                    expired_run.store(run, Ordering::SeqCst);
                    fan_out(&listeners, RoundEnd::TimeUp);
                }
            })
        };
        countdown.add_zero_listener(on_zero);

        Self {
            dictionary,
            high_scores,
            countdown,
            rng,
            phase: Phase::Idle,
            difficulty: Difficulty::default(),
            base_word: String::new(),
            letters: Vec::new(),
            solutions: Vec::new(),
            typed_words: HashSet::new(),
            score: 0,
            run: 0,
            active_run,
            expired_run,
            listeners,
        }
    }

    /// Start a new round at `difficulty`.
    ///
    /// Picks a base word, computes its solutions, and starts the countdown.
    /// On error the game is left idle.
    pub fn start_round(&mut self, difficulty: Difficulty) -> Result<(), GameError> {
        self.reset_round();

        let (base_word, solutions) =
            pick_base_word_and_solutions(&self.dictionary, difficulty.min_length(), &mut self.rng)?;

        log::info!(
            "starting {} round with {} solutions",
            difficulty.label(),
            solutions.len()
        );

        self.difficulty = difficulty;
        self.letters = base_word.chars().collect();
        self.letters.shuffle(&mut self.rng);
        self.base_word = base_word;
        self.solutions = solutions;

        self.countdown.configure(seconds(difficulty.duration()));
        self.countdown.start();
        self.run = self.countdown.run_id();
        self.active_run.store(self.run, Ordering::SeqCst);
        self.phase = Phase::Playing;
        Ok(())
    }

    /// Reset and immediately start another round.
    pub fn restart_round(&mut self, difficulty: Difficulty) -> Result<(), GameError> {
        self.reset_round();
        self.start_round(difficulty)
    }

    /// Abandon the current round and return to idle.
    pub fn reset_round(&mut self) {
        self.poll();
        self.finish_active_round();
        self.clear_round();
        self.run = 0;
        self.active_run.store(0, Ordering::SeqCst);
        self.countdown.stop();
        self.countdown.reset();
        self.phase = Phase::Idle;
    }

    /// Submit a word. Returns true if it is a new solution.
    ///
    /// Typing the last missing solution ends the round early.
    pub fn submit_word(&mut self, word: &str) -> bool {
        self.poll();
        if self.phase != Phase::Playing {
            return false;
        }

        let word = normalize(word);
        if self.typed_words.contains(&word) {
            log::debug!("{} already typed", word);
            return false;
        }
        if !search::contains(&self.solutions, &word) {
            log::debug!("{} is not a solution", word);
            return false;
        }

        self.score += word.len() as u32;
        self.typed_words.insert(word);

        if self.typed_words.len() == self.solutions.len() {
            self.countdown.stop();
            self.end_round(RoundEnd::AllWordsFound);
            fan_out(&self.listeners, RoundEnd::AllWordsFound);
        }
        true
    }

    /// Pick up a time-up signalled by the countdown.
    ///
    /// Returns how the round ended if it ended since the last call.
    pub fn poll(&mut self) -> Option<RoundEnd> {
        if self.phase == Phase::Playing
            && self.run != 0
            && self.expired_run.load(Ordering::SeqCst) == self.run
        {
            self.end_round(RoundEnd::TimeUp);
            return Some(RoundEnd::TimeUp);
        }
        None
    }

    /// Count the score toward the high score if a round is still running.
    fn finish_active_round(&mut self) {
        if self.phase == Phase::Playing {
            self.high_scores.record(self.score);
        }
    }

    fn end_round(&mut self, end: RoundEnd) {
        self.phase = Phase::RoundOver(end);
        if self.high_scores.record(self.score) {
            log::info!("new high score {}", self.score);
        }
    }

    fn clear_round(&mut self) {
        self.base_word.clear();
        self.letters.clear();
        self.solutions.clear();
        self.typed_words.clear();
        self.score = 0;
    }

    /// Register `listener` under `name`, replacing any listener of that name.
    pub fn register_listener(
        &self,
        name: impl Into<String>,
        listener: impl Fn(RoundEnd) + Send + Sync + 'static,
    ) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.insert(name.into(), Arc::new(listener));
        }
    }

    /// Remove the listener registered under `name`.
    pub fn unregister_listener(&self, name: &str) -> bool {
        self.listeners
            .lock()
            .map(|mut listeners| listeners.remove(name).is_some())
            .unwrap_or(false)
    }

    /// Replace the word lists used for future rounds.
    pub fn set_dictionary(&mut self, dictionary: Dictionary) {
        self.dictionary = dictionary;
    }

    /// Whether any base word candidates are loaded
    pub fn has_dictionary(&self) -> bool {
        !self.dictionary.six_letter_words().is_empty()
    }

    /// Reshuffle the displayed letters.
    pub fn shuffle_letters(&mut self) {
        self.letters.shuffle(&mut self.rng);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_scores.high_score()
    }

    /// Letters of the base word in display order
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// The base word, once the round is over
    pub fn base_word(&self) -> Option<&str> {
        match self.phase {
            Phase::RoundOver(_) => Some(&self.base_word),
            _ => None,
        }
    }

    /// All solutions, sorted
    pub fn word_list(&self) -> &[String] {
        &self.solutions
    }

    pub fn typed_words(&self) -> &HashSet<String> {
        &self.typed_words
    }

    /// Solutions not yet typed
    pub fn missing_words(&self) -> BTreeSet<String> {
        self.solutions
            .iter()
            .filter(|w| !self.typed_words.contains(*w))
            .cloned()
            .collect()
    }

    /// The solution grid in sorted order
    pub fn solution_slots(&self) -> Vec<SolutionSlot> {
        self.solutions
            .iter()
            .map(|w| {
                if self.typed_words.contains(w) {
                    SolutionSlot::Found(w.clone())
                } else {
                    SolutionSlot::Hidden(w.len())
                }
            })
            .collect()
    }

    /// True once a six-letter word has been typed
    pub fn is_level_milestone_reached(&self) -> bool {
        self.typed_words.iter().any(|w| w.len() == MAX_WORD_LENGTH)
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.countdown.remaining_seconds()
    }

    /// Remaining time as `M:SS`
    pub fn clock_display(&self) -> String {
        self.countdown.display()
    }
}

fn seconds(duration: Duration) -> u32 {
    duration.as_secs() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tests::sample_dictionary;
    use crate::game::validation::can_form_from;
    use crate::storage::HIGH_SCORE_FILE;
    use std::sync::atomic::AtomicUsize;
    use std::thread;
    use std::time::Instant;
    use tempfile::TempDir;

    fn test_game(dir: &TempDir, tick: Duration) -> Game {
        Game::with_parts(
            sample_dictionary(),
            HighScoreStore::open(dir.path().join(HIGH_SCORE_FILE)),
            Countdown::with_tick(1, tick),
            StdRng::seed_from_u64(11),
        )
    }

    /// A game whose countdown will not expire during a test
    fn slow_game(dir: &TempDir) -> Game {
        test_game(dir, Duration::from_secs(60))
    }

    fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(10);
        while Instant::now() < deadline {
            if condition() {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        false
    }

    fn assert_round_invariants(game: &Game) {
        let total: u32 = game.typed_words().iter().map(|w| w.len() as u32).sum();
        assert_eq!(game.score(), total);
        for word in game.typed_words() {
            assert!(game.word_list().contains(word));
        }
    }

    #[test]
    fn test_new_game_is_idle() {
        let dir = TempDir::new().unwrap();
        let mut game = slow_game(&dir);
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.score(), 0);
        assert!(game.letters().is_empty());
        assert!(!game.submit_word("cat"));
    }

    #[test]
    fn test_start_round_easy_wiring() {
        let dir = TempDir::new().unwrap();
        let mut game = slow_game(&dir);

        game.start_round(Difficulty::Easy).unwrap();

        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.difficulty(), Difficulty::Easy);
        assert_eq!(game.remaining_seconds(), 180);
        assert_eq!(game.clock_display(), "3:00");
        assert!(game.word_list().iter().any(|w| w.len() == 3));
        assert!(game.word_list().len() >= 10);
    }

    #[test]
    fn test_start_round_hard_wiring() {
        let dictionary = sample_dictionary();
        let dir = TempDir::new().unwrap();
        // Give "listen" enough five-letter words to qualify on hard
        let mut all = dictionary.all_words().to_vec();
        all.extend(
            ["enlist", "inlets", "islet", "istle", "stein", "tiles", "tines", "snite", "lenis"]
                .iter()
                .map(|w| w.to_string()),
        );
        let mut game = Game::with_parts(
            Dictionary::from_words(all, vec!["listen".to_string()]),
            HighScoreStore::open(dir.path().join(HIGH_SCORE_FILE)),
            Countdown::with_tick(1, Duration::from_secs(60)),
            StdRng::seed_from_u64(2),
        );

        game.start_round(Difficulty::Hard).unwrap();

        assert_eq!(game.difficulty(), Difficulty::Hard);
        assert_eq!(game.remaining_seconds(), 120);
        assert!(game.word_list().iter().all(|w| w.len() >= 5));
    }

    #[test]
    fn test_letters_are_base_word_letters() {
        let dir = TempDir::new().unwrap();
        let mut game = slow_game(&dir);
        game.start_round(Difficulty::Easy).unwrap();

        let letters: String = game.letters().iter().collect();
        assert_eq!(letters.len(), 6);
        for word in game.word_list() {
            assert!(can_form_from(&letters, word));
        }
        let six: Vec<&String> = game.word_list().iter().filter(|w| w.len() == 6).collect();
        assert!(six.iter().any(|w| can_form_from(w, &letters)));
        assert_eq!(game.base_word(), None);
    }

    #[test]
    fn test_submit_valid_word_scores_length() {
        let dir = TempDir::new().unwrap();
        let mut game = slow_game(&dir);
        game.start_round(Difficulty::Easy).unwrap();
        let word = game.word_list()[0].clone();

        assert!(game.submit_word(&word));
        assert_eq!(game.score(), word.len() as u32);
        assert!(game.typed_words().contains(&word));
        assert_round_invariants(&game);
    }

    #[test]
    fn test_resubmit_is_rejected_without_score_change() {
        let dir = TempDir::new().unwrap();
        let mut game = slow_game(&dir);
        game.start_round(Difficulty::Easy).unwrap();
        let word = game.word_list()[0].clone();

        assert!(game.submit_word(&word));
        let score = game.score();
        assert!(!game.submit_word(&word));
        assert!(!game.submit_word(&word.to_uppercase()));
        assert_eq!(game.score(), score);
    }

    #[test]
    fn test_invalid_word_rejected() {
        let dir = TempDir::new().unwrap();
        let mut game = slow_game(&dir);
        game.start_round(Difficulty::Easy).unwrap();

        assert!(!game.submit_word("zzz"));
        assert!(!game.submit_word(""));
        assert!(!game.submit_word("stack"));
        assert_eq!(game.score(), 0);
        assert!(game.typed_words().is_empty());
    }

    #[test]
    fn test_submission_is_normalized() {
        let dir = TempDir::new().unwrap();
        let mut game = slow_game(&dir);
        game.start_round(Difficulty::Easy).unwrap();
        let word = game.word_list()[0].clone();

        assert!(game.submit_word(&format!("  {} ", word.to_uppercase())));
        assert!(game.typed_words().contains(&word));
    }

    #[test]
    fn test_invariants_over_mixed_submissions() {
        let dir = TempDir::new().unwrap();
        let mut game = slow_game(&dir);
        game.start_round(Difficulty::Easy).unwrap();
        let mut attempts: Vec<String> = game.word_list().iter().take(5).cloned().collect();
        attempts.extend(["zzz", "stack", "qqqq"].iter().map(|w| w.to_string()));
        attempts.extend(game.word_list().iter().take(3).cloned());

        for word in &attempts {
            game.submit_word(word);
            assert_round_invariants(&game);
        }
        assert_eq!(game.typed_words().len(), 5);
    }

    #[test]
    fn test_missing_words_and_slots() {
        let dir = TempDir::new().unwrap();
        let mut game = slow_game(&dir);
        game.start_round(Difficulty::Easy).unwrap();
        let first = game.word_list()[0].clone();
        game.submit_word(&first);

        let missing = game.missing_words();
        assert_eq!(missing.len(), game.word_list().len() - 1);
        assert!(!missing.contains(&first));

        let slots = game.solution_slots();
        assert_eq!(slots[0], SolutionSlot::Found(first));
        assert_eq!(slots[1], SolutionSlot::Hidden(game.word_list()[1].len()));
    }

    #[test]
    fn test_level_milestone() {
        let dir = TempDir::new().unwrap();
        let mut game = slow_game(&dir);
        game.start_round(Difficulty::Easy).unwrap();
        let short = game.word_list().iter().find(|w| w.len() < 6).cloned().unwrap();
        let six = game.word_list().iter().find(|w| w.len() == 6).cloned().unwrap();

        game.submit_word(&short);
        assert!(!game.is_level_milestone_reached());
        game.submit_word(&six);
        assert!(game.is_level_milestone_reached());
    }

    #[test]
    fn test_all_words_found_ends_round() {
        let dir = TempDir::new().unwrap();
        let mut game = slow_game(&dir);
        let ends = Arc::new(Mutex::new(Vec::new()));
        let ends_clone = Arc::clone(&ends);
        game.register_listener("test", move |end| ends_clone.lock().unwrap().push(end));

        game.start_round(Difficulty::Easy).unwrap();
        let words = game.word_list().to_vec();
        for word in &words {
            assert!(game.submit_word(word));
        }

        assert_eq!(game.phase(), Phase::RoundOver(RoundEnd::AllWordsFound));
        assert!(!game.countdown.is_running());
        assert_eq!(game.remaining_seconds(), 0);
        assert!(game.missing_words().is_empty());
        assert_eq!(*ends.lock().unwrap(), vec![RoundEnd::AllWordsFound]);
        assert!(game.base_word().is_some());

        // No more submissions once over
        assert!(!game.submit_word(&words[0]));
        let total: u32 = words.iter().map(|w| w.len() as u32).sum();
        assert_eq!(game.score(), total);
        assert_eq!(game.high_score(), total);
    }

    #[test]
    fn test_time_up_notifies_listeners_and_ends_round() {
        let dir = TempDir::new().unwrap();
        let mut game = test_game(&dir, Duration::from_millis(1));
        // 180 ticks of a millisecond each
        let calls = Arc::new(AtomicUsize::new(0));
        for name in ["first", "second"] {
            let calls = Arc::clone(&calls);
            game.register_listener(name, move |end| {
                assert_eq!(end, RoundEnd::TimeUp);
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }

        game.start_round(Difficulty::Easy).unwrap();
        let word = game.word_list()[0].clone();
        game.submit_word(&word);

        assert!(wait_until(|| calls.load(Ordering::SeqCst) == 2));
        assert_eq!(game.poll(), Some(RoundEnd::TimeUp));
        assert_eq!(game.phase(), Phase::RoundOver(RoundEnd::TimeUp));
        assert_eq!(game.poll(), None);
        let late = game.word_list()[1].clone();
        assert!(!game.submit_word(&late));
        assert_eq!(game.high_score(), word.len() as u32);
    }

    #[test]
    fn test_expiry_of_previous_round_is_ignored() {
        let dir = TempDir::new().unwrap();
        let mut game = slow_game(&dir);
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        game.register_listener("ui", move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        game.start_round(Difficulty::Easy).unwrap();
        let first_run = game.countdown.run_id();
        game.restart_round(Difficulty::Easy).unwrap();

        // The first round's countdown reports zero after the restart
        game.countdown.fire_zero_listeners(first_run);
        assert_eq!(game.poll(), None);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let current_run = game.countdown.run_id();
        assert_ne!(current_run, first_run);
        game.countdown.fire_zero_listeners(current_run);
        assert_eq!(game.poll(), Some(RoundEnd::TimeUp));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_expiry_after_reset_is_ignored() {
        let dir = TempDir::new().unwrap();
        let mut game = slow_game(&dir);
        game.start_round(Difficulty::Easy).unwrap();
        let run = game.countdown.run_id();

        game.reset_round();
        game.countdown.fire_zero_listeners(run);

        assert_eq!(game.poll(), None);
        assert_eq!(game.phase(), Phase::Idle);
    }

    #[test]
    fn test_panicking_listener_isolated() {
        let dir = TempDir::new().unwrap();
        let mut game = slow_game(&dir);
        let calls = Arc::new(AtomicUsize::new(0));
        game.register_listener("a_panics", |_| panic!("listener failure"));
        let calls_clone = Arc::clone(&calls);
        game.register_listener("b_counts", move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        game.start_round(Difficulty::Easy).unwrap();
        for word in game.word_list().to_vec() {
            game.submit_word(&word);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unregister_listener() {
        let dir = TempDir::new().unwrap();
        let mut game = slow_game(&dir);
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        game.register_listener("ui", move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(game.unregister_listener("ui"));
        assert!(!game.unregister_listener("ui"));

        game.start_round(Difficulty::Easy).unwrap();
        for word in game.word_list().to_vec() {
            game.submit_word(&word);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_reset_round_returns_to_idle() {
        let dir = TempDir::new().unwrap();
        let mut game = slow_game(&dir);
        game.start_round(Difficulty::Easy).unwrap();
        let word = game.word_list()[0].clone();
        game.submit_word(&word);

        game.reset_round();

        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.score(), 0);
        assert!(game.letters().is_empty());
        assert!(game.word_list().is_empty());
        assert!(game.typed_words().is_empty());
        assert!(!game.countdown.is_running());
        assert_eq!(game.remaining_seconds(), 180);
        // The abandoned round still counts toward the high score
        assert_eq!(game.high_score(), word.len() as u32);
    }

    #[test]
    fn test_restart_clears_typed_words() {
        let dir = TempDir::new().unwrap();
        let mut game = slow_game(&dir);
        game.start_round(Difficulty::Easy).unwrap();
        let word = game.word_list()[0].clone();
        game.submit_word(&word);

        game.restart_round(Difficulty::Easy).unwrap();

        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.score(), 0);
        assert!(game.typed_words().is_empty());
        assert!(game.countdown.is_running());
    }

    #[test]
    fn test_high_score_persists_across_games() {
        let dir = TempDir::new().unwrap();
        {
            let mut game = slow_game(&dir);
            game.start_round(Difficulty::Easy).unwrap();
            for word in game.word_list().to_vec() {
                game.submit_word(&word);
            }
        }

        let game = slow_game(&dir);
        assert!(game.high_score() > 0);
    }

    #[test]
    fn test_start_failure_leaves_game_idle() {
        let dir = TempDir::new().unwrap();
        let mut game = Game::with_parts(
            Dictionary::default(),
            HighScoreStore::open(dir.path().join(HIGH_SCORE_FILE)),
            Countdown::with_tick(1, Duration::from_secs(60)),
            StdRng::seed_from_u64(0),
        );

        assert!(matches!(
            game.start_round(Difficulty::Easy),
            Err(GameError::InsufficientDictionary { .. })
        ));
        assert_eq!(game.phase(), Phase::Idle);
        assert!(!game.countdown.is_running());
    }
}
