//! Application state and core logic

pub mod screen;
pub mod state;
pub mod timer;

pub use screen::{AppCoordinator, MenuOption, Screen};
pub use state::{Game, Phase, RoundEnd, SolutionSlot};
