//! Application screen state management
//!
//! Handles transitions between the screens:
//! - Main menu (difficulty selection)
//! - How to play
//! - Playing (including the end-of-round results)
//! - Error message

use crate::config::Config;
use crate::game::dictionary::Dictionary;
use crate::game::validation::{can_form_from, MAX_WORD_LENGTH};
use crate::game::{Difficulty, GameError};
use crate::storage::HighScoreStore;
use std::sync::mpsc;

use super::state::{Game, Phase, RoundEnd};

/// Name under which the UI listens for round ends
const UI_LISTENER: &str = "ui";

/// Menu option on the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    PlayEasy,
    PlayHard,
    HowToPlay,
    Quit,
}

impl MenuOption {
    /// Get all menu options in order
    pub fn all() -> &'static [MenuOption] {
        &[
            MenuOption::PlayEasy,
            MenuOption::PlayHard,
            MenuOption::HowToPlay,
            MenuOption::Quit,
        ]
    }

    /// Get the display label for this option
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::PlayEasy => "Easy (3:00, words of 3+)",
            MenuOption::PlayHard => "Hard (2:00, words of 5+)",
            MenuOption::HowToPlay => "How to Play",
            MenuOption::Quit => "Quit",
        }
    }

    fn index_of(difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => 0,
            Difficulty::Hard => 1,
        }
    }
}

/// The current application screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Main menu
    Menu { selected: usize },
    /// Rules
    HowToPlay,
    /// Playing a round, or looking at its results
    Playing { input: String, feedback: String },
    /// Error message
    Error { message: String },
}

/// Main application coordinator
pub struct AppCoordinator {
    /// Current screen
    pub screen: Screen,
    /// Whether the application should quit
    pub should_quit: bool,
    config: Config,
    game: Game,
    round_ends: mpsc::Receiver<RoundEnd>,
}

impl AppCoordinator {
    /// Create a coordinator at the menu. Word lists are loaded on first play.
    pub fn new(config: Config) -> Self {
        let game = Game::new(
            Dictionary::default(),
            HighScoreStore::open(&config.high_score_path),
        );
        Self::with_game(config, game)
    }

    /// Create a coordinator around an existing game (for testing).
    pub fn with_game(config: Config, game: Game) -> Self {
        let (tx, rx) = mpsc::channel();
        game.register_listener(UI_LISTENER, move |end| {
            let _ = tx.send(end);
        });

        Self {
            screen: Screen::Menu {
                selected: MenuOption::index_of(config.difficulty),
            },
            should_quit: false,
            config,
            game,
            round_ends: rx,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Go back to the main menu, abandoning any round
    pub fn go_to_menu(&mut self) {
        self.game.reset_round();
        self.screen = Screen::Menu {
            selected: MenuOption::index_of(self.game.difficulty()),
        };
    }

    /// Handle menu navigation (up)
    pub fn menu_up(&mut self) {
        if let Screen::Menu { selected } = &mut self.screen {
            if *selected > 0 {
                *selected -= 1;
            }
        }
    }

    /// Handle menu navigation (down)
    pub fn menu_down(&mut self) {
        if let Screen::Menu { selected } = &mut self.screen {
            if *selected < MenuOption::all().len() - 1 {
                *selected += 1;
            }
        }
    }

    /// Handle menu selection (Enter)
    pub fn menu_select(&mut self) {
        let selected = match &self.screen {
            Screen::Menu { selected } => *selected,
            _ => return,
        };

        match MenuOption::all()[selected] {
            MenuOption::PlayEasy => self.start_round(Difficulty::Easy),
            MenuOption::PlayHard => self.start_round(Difficulty::Hard),
            MenuOption::HowToPlay => self.screen = Screen::HowToPlay,
            MenuOption::Quit => self.should_quit = true,
        }
    }

    /// Start a round, loading the word lists first if needed
    pub fn start_round(&mut self, difficulty: Difficulty) {
        if !self.game.has_dictionary() {
            match Dictionary::load(&self.config.corpus_path, &self.config.word_list_dir) {
                Ok(dictionary) => self.game.set_dictionary(dictionary),
                Err(e) => {
                    self.screen = Screen::Error {
                        message: e.to_string(),
                    };
                    return;
                }
            }
        }

        self.drain_round_ends();
        let started = self.game.start_round(difficulty);
        self.show_round(started);
    }

    /// Abandon the current round and deal a new one at the same difficulty
    pub fn restart(&mut self) {
        if self.game.phase() == Phase::Idle {
            return;
        }
        self.drain_round_ends();
        let difficulty = self.game.difficulty();
        let started = self.game.restart_round(difficulty);
        self.show_round(started);
    }

    /// Drop any notification left over from an earlier round
    fn drain_round_ends(&mut self) {
        while self.round_ends.try_recv().is_ok() {}
    }

    fn show_round(&mut self, started: Result<(), GameError>) {
        match started {
            Ok(()) => {
                self.screen = Screen::Playing {
                    input: String::new(),
                    feedback: String::new(),
                };
            }
            Err(e) => {
                self.screen = Screen::Error {
                    message: e.to_string(),
                };
            }
        }
    }

    /// Handle a typed letter. Only letters still free in the rack are taken.
    pub fn on_char(&mut self, c: char) {
        if self.game.phase() != Phase::Playing {
            return;
        }
        let rack: String = self.game.letters().iter().collect();
        if let Screen::Playing { input, feedback } = &mut self.screen {
            let c = c.to_ascii_lowercase();
            let mut candidate = input.clone();
            candidate.push(c);
            if candidate.len() <= MAX_WORD_LENGTH && can_form_from(&rack, &candidate) {
                *input = candidate;
                feedback.clear();
            }
        }
    }

    /// Handle backspace
    pub fn on_backspace(&mut self) {
        if let Screen::Playing { input, feedback } = &mut self.screen {
            input.pop();
            feedback.clear();
        }
    }

    /// Shuffle the rack (space bar)
    pub fn on_shuffle(&mut self) {
        if self.game.phase() == Phase::Playing {
            self.game.shuffle_letters();
        }
    }

    /// Handle Enter: submit the word, or start another round once over
    pub fn on_submit(&mut self) {
        if matches!(self.game.phase(), Phase::RoundOver(_)) {
            self.restart();
            return;
        }

        let Screen::Playing { input, feedback } = &mut self.screen else {
            return;
        };
        if input.is_empty() {
            return;
        }

        let word = std::mem::take(input);
        let already_found = self.game.typed_words().contains(&word);
        *feedback = if self.game.submit_word(&word) {
            format!("OK +{} ({})", word.len(), word.to_uppercase())
        } else if already_found {
            "ALREADY FOUND".to_string()
        } else {
            "NOPE".to_string()
        };

        if let Phase::RoundOver(end) = self.game.phase() {
            *feedback = round_end_message(end).to_string();
        }
    }

    /// Handle Esc
    pub fn on_escape(&mut self) {
        match self.screen {
            Screen::Menu { .. } => self.quit(),
            _ => self.go_to_menu(),
        }
    }

    /// Pick up round ends signalled by the countdown (call regularly)
    pub fn poll(&mut self) {
        self.game.poll();
        while let Ok(end) = self.round_ends.try_recv() {
            // The expiry is recorded before listeners hear of it
            self.game.poll();
            if self.game.phase() != Phase::RoundOver(end) {
                continue;
            }
            if let Screen::Playing { input, feedback } = &mut self.screen {
                input.clear();
                *feedback = round_end_message(end).to_string();
            }
        }
    }
}

fn round_end_message(end: RoundEnd) -> &'static str {
    match end {
        RoundEnd::TimeUp => "TIME'S UP!",
        RoundEnd::AllWordsFound => "ALL WORDS FOUND!",
    }
}
