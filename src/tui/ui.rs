//! UI rendering using ratatui
//!
//! Screens:
//! - Menu: difficulty selection and high score
//! - HowToPlay: rules
//! - Playing: rack, timer, input, score, and the solution grid
//! - Error: error message display

use crate::app::{AppCoordinator, Game, MenuOption, Phase, RoundEnd, Screen, SolutionSlot};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

/// Render the appropriate screen based on app state
pub fn render(frame: &mut Frame, coordinator: &AppCoordinator) {
    match &coordinator.screen {
        Screen::Menu { selected } => {
            render_menu(frame, *selected, coordinator.game().high_score());
        }
        Screen::HowToPlay => {
            render_how_to_play(frame);
        }
        Screen::Playing { input, feedback } => {
            render_game(frame, coordinator.game(), input, feedback);
        }
        Screen::Error { message } => {
            render_error(frame, message);
        }
    }
}

/// Render the main menu
fn render_menu(frame: &mut Frame, selected: usize, high_score: u32) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Logo
            Constraint::Length(2), // High score
            Constraint::Min(6),    // Menu options
            Constraint::Length(2), // Footer
        ])
        .margin(2)
        .split(area);

    let logo = r#"
 _____          _     _
|_   _|_      _(_)___| |_
  | | \ \ /\ / / / __| __|
  | |  \ V  V /| \__ \ |_
  |_|   \_/\_/ |_|___/\__|
"#;
    let logo_widget = Paragraph::new(logo)
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(logo_widget, layout[0]);

    let high_score_widget = Paragraph::new(format!("High Score: {}", high_score))
        .style(Style::default().fg(Color::Magenta))
        .alignment(Alignment::Center);
    frame.render_widget(high_score_widget, layout[1]);

    let items: Vec<ListItem> = MenuOption::all()
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let style = if i == selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if i == selected { "> " } else { "  " };
            ListItem::new(format!("{}{}", prefix, opt.label())).style(style)
        })
        .collect();

    let menu = List::new(items).block(Block::default());
    frame.render_widget(menu, layout[2]);

    let footer = Paragraph::new("↑↓ Navigate  Enter Select  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[3]);
}

/// Render the rules
fn render_how_to_play(frame: &mut Frame) {
    let area = frame.area();

    let rules = vec![
        Line::from("Six letters are dealt from a hidden six-letter word."),
        Line::from(""),
        Line::from("Type every word you can make from them before the clock runs out."),
        Line::from("Each letter can be used as many times as it appears in the rack."),
        Line::from(""),
        Line::from("Easy: 3 minutes, words of 3 letters or more."),
        Line::from("Hard: 2 minutes, words of 5 letters or more."),
        Line::from(""),
        Line::from("Every word scores one point per letter."),
        Line::from("Find a six-letter word to pass the level."),
        Line::from("Find them all to end the round early."),
        Line::from(""),
        Line::from("Enter submits, Space shuffles, F5 deals a new rack."),
    ];

    let widget = Paragraph::new(rules)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("How to Play"),
        )
        .wrap(Wrap { trim: false });

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .margin(2)
        .split(area);
    frame.render_widget(widget, layout[0]);

    let hint = Paragraph::new("Press Esc to go back")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, layout[1]);
}

/// Render the game screen
fn render_game(frame: &mut Frame, game: &Game, input: &str, feedback: &str) {
    let area = frame.area();

    // Main layout: header (3 lines) + content
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with letters, timer
            Constraint::Min(0),    // Main content area
        ])
        .split(area);

    render_header(frame, layout[0], game);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(30),    // Input or results
            Constraint::Length(40), // Solution grid
        ])
        .split(layout[1]);

    match game.phase() {
        Phase::RoundOver(end) => render_end_summary(frame, columns[0], game, end),
        _ => render_input_area(frame, columns[0], game, input, feedback),
    }
    render_solution_grid(frame, columns[1], game);
}

/// Render the error screen
fn render_error(frame: &mut Frame, message: &str) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Percentage(40),
        ])
        .margin(2)
        .split(area);

    let error = Paragraph::new(format!("Error: {}", message))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(error, layout[1]);

    let hint = Paragraph::new("Press Esc to go back")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, layout[2]);
}

/// Render the header: logo | letters | timer
fn render_header(frame: &mut Frame, area: Rect, game: &Game) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10), // Logo
            Constraint::Min(20),    // Letters (centered, flexible)
            Constraint::Length(10), // Timer
        ])
        .split(inner);

    let logo = Paragraph::new("TWIST")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(logo, header_layout[0]);

    let letters = Paragraph::new(format_letter_rack(game.letters()))
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(letters, header_layout[1]);

    let remaining = game.remaining_seconds();
    let timer_color = if remaining <= 10 {
        Color::Red
    } else if remaining <= 30 {
        Color::Yellow
    } else {
        Color::Green
    };
    let timer = Paragraph::new(game.clock_display())
        .style(Style::default().fg(timer_color).bold())
        .alignment(Alignment::Right);
    frame.render_widget(timer, header_layout[2]);
}

/// Render the input/feedback area (left panel)
fn render_input_area(frame: &mut Frame, area: Rect, game: &Game, input: &str, feedback: &str) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Input slots
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Feedback line
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Score
            Constraint::Length(1), // High score
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Milestone
            Constraint::Min(0),    // Remaining space
            Constraint::Length(1), // Keys
        ])
        .split(area);

    let input = Paragraph::new(format_input_slots(input))
        .style(Style::default().fg(Color::White).bold());
    frame.render_widget(input, main_layout[0]);

    let (feedback_text, feedback_color) = format_feedback(feedback);
    let feedback = Paragraph::new(feedback_text).style(Style::default().fg(feedback_color));
    frame.render_widget(feedback, main_layout[2]);

    let score = Paragraph::new(format!("Score: {}", game.score()))
        .style(Style::default().fg(Color::Magenta).bold());
    frame.render_widget(score, main_layout[4]);

    let high_score = Paragraph::new(format!("Best:  {}", game.high_score()))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(high_score, main_layout[5]);

    if game.is_level_milestone_reached() {
        let milestone = Paragraph::new("LEVEL PASSED! Keep going.")
            .style(Style::default().fg(Color::Green).bold());
        frame.render_widget(milestone, main_layout[7]);
    }

    let keys = Paragraph::new("Enter Submit  Space Shuffle  F5 New Rack  Esc Menu")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(keys, main_layout[9]);
}

/// Render the end-of-round summary
fn render_end_summary(frame: &mut Frame, area: Rect, game: &Game, end: RoundEnd) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(1), // Base word
            Constraint::Length(1), // Final score
            Constraint::Length(1), // High score
            Constraint::Length(1), // Words found
            Constraint::Length(1), // Spacer
            Constraint::Min(3),    // Missing words
            Constraint::Length(1), // Instructions
        ])
        .split(area);

    let (title, color) = match end {
        RoundEnd::TimeUp => ("TIME'S UP!", Color::Red),
        RoundEnd::AllWordsFound => ("ALL WORDS FOUND!", Color::Green),
    };
    let title = Paragraph::new(title)
        .style(Style::default().fg(color).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, main_layout[0]);

    if let Some(base_word) = game.base_word() {
        let base = Paragraph::new(format!("The word was {}", base_word.to_uppercase()))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        frame.render_widget(base, main_layout[1]);
    }

    let score = Paragraph::new(format!("Final Score: {}", game.score()))
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(score, main_layout[2]);

    let high_score = Paragraph::new(format!("High Score: {}", game.high_score()))
        .style(Style::default().fg(Color::Magenta))
        .alignment(Alignment::Center);
    frame.render_widget(high_score, main_layout[3]);

    let words = Paragraph::new(format!(
        "Words Found: {} / {}",
        game.typed_words().len(),
        game.word_list().len()
    ))
    .style(Style::default().fg(Color::Cyan))
    .alignment(Alignment::Center);
    frame.render_widget(words, main_layout[4]);

    let missing = game.missing_words();
    if !missing.is_empty() {
        let text = missing
            .iter()
            .map(|w| w.to_uppercase())
            .collect::<Vec<_>>()
            .join("  ");
        let missing = Paragraph::new(text)
            .style(Style::default().fg(Color::Red))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title("Missed"),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(missing, main_layout[6]);
    }

    let instructions = Paragraph::new("Enter Play Again  Esc Menu")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(instructions, main_layout[7]);
}

/// Render the solution grid (right panel)
fn render_solution_grid(frame: &mut Frame, area: Rect, game: &Game) {
    let reveal = matches!(game.phase(), Phase::RoundOver(_));

    let items: Vec<ListItem> = game
        .solution_slots()
        .into_iter()
        .zip(game.word_list())
        .map(|(slot, word)| match slot {
            SolutionSlot::Found(found) => {
                ListItem::new(found.to_uppercase()).style(Style::default().fg(Color::Green))
            }
            SolutionSlot::Hidden(_) if reveal => {
                ListItem::new(word.to_uppercase()).style(Style::default().fg(Color::Red))
            }
            SolutionSlot::Hidden(len) => {
                ListItem::new(format_hidden(len)).style(Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    let title = format!(
        "Words {}/{}",
        game.typed_words().len(),
        game.word_list().len()
    );
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title),
    );
    frame.render_widget(list, area);
}

/// Format the letter rack for display
fn format_letter_rack(letters: &[char]) -> String {
    if letters.is_empty() {
        return String::from("[ ]");
    }

    let letters_str: String = letters
        .iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    format!("[ {} ]", letters_str)
}

/// Format typed letters into six slots
fn format_input_slots(input: &str) -> String {
    let mut slots: Vec<String> = input
        .chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect();
    slots.resize(6, "_".to_string());
    format!("> {}", slots.join(" "))
}

/// A hidden word as one underscore per letter
fn format_hidden(len: usize) -> String {
    vec!["_"; len].join(" ")
}

/// Format feedback with appropriate color
fn format_feedback(feedback: &str) -> (String, Color) {
    if feedback.is_empty() {
        return (String::new(), Color::White);
    }

    let color = if feedback.starts_with("OK") || feedback.starts_with("ALL WORDS") {
        Color::Green
    } else if feedback.starts_with("NOPE") || feedback.starts_with("TIME'S UP") {
        Color::Red
    } else if feedback.starts_with("ALREADY") {
        Color::Yellow
    } else {
        Color::White
    };

    (feedback.to_string(), color)
}
