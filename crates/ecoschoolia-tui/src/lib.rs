//! ecoschoolia-tui - Terminal UI for Ecoschoolia
//!
//! Draws the learner shell and the teacher dashboard with ratatui, polls
//! crossterm for key input and feeds it through the update loop in
//! `ecoschoolia-app`.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use render::view;
pub use runner::run;
