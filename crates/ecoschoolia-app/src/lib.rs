//! ecoschoolia-app - Application state and update loop for Ecoschoolia
//!
//! Implements the TEA (The Elm Architecture) pattern: [`AppState`] is the
//! model, [`Message`] the set of events, and [`handler::update`] the only
//! place state changes. Also hosts configuration loading and the abstract
//! [`InputKey`] shared by the terminal UI and the headless driver.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::{IconMode, Settings, SettingsOverrides};
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppState, RunPhase, Screen, Shell};
