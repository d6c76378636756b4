//! Twist - find every word hidden in six letters
//!
//! A timed single-player word puzzle in the terminal.

mod app;
mod config;
mod game;
mod storage;
mod tui;

use app::AppCoordinator;
use clap::Parser;
use config::{CliArgs, Config};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::time::Duration;
use tui::Tui;

/// How often the screen is redrawn while waiting for input
const FRAME_RATE: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    let args = CliArgs::parse();
    let config = Config::from_args(&args);
    log::info!(
        "using word lists {}",
        config.word_list_paths().all_words.display()
    );

    let mut coordinator = AppCoordinator::new(config);

    // Initialize terminal
    let mut terminal = Tui::new()?;
    terminal.enter()?;

    // Main event loop
    loop {
        coordinator.poll();
        terminal.draw(|frame| tui::render(frame, &coordinator))?;

        if event::poll(FRAME_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut coordinator, key.code);
                }
            }
        }

        if coordinator.should_quit {
            break;
        }
    }

    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}

/// Route a key press to the coordinator based on the current screen
fn handle_key(coordinator: &mut AppCoordinator, code: KeyCode) {
    match (&coordinator.screen, code) {
        (_, KeyCode::Esc) => coordinator.on_escape(),
        (app::Screen::Menu { .. }, KeyCode::Up) => coordinator.menu_up(),
        (app::Screen::Menu { .. }, KeyCode::Down) => coordinator.menu_down(),
        (app::Screen::Menu { .. }, KeyCode::Enter) => coordinator.menu_select(),
        (app::Screen::Playing { .. }, KeyCode::Enter) => coordinator.on_submit(),
        (app::Screen::Playing { .. }, KeyCode::Backspace) => coordinator.on_backspace(),
        (app::Screen::Playing { .. }, KeyCode::F(5)) => coordinator.restart(),
        (app::Screen::Playing { .. }, KeyCode::Char(' ')) => coordinator.on_shuffle(),
        (app::Screen::Playing { .. }, KeyCode::Char(c)) if c.is_ascii_alphabetic() => {
            coordinator.on_char(c)
        }
        _ => {}
    }
}
