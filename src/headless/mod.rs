//! Headless mode - NDJSON commands in, NDJSON events out
//!
//! Drives the same state machine as the terminal UI without drawing
//! anything. Each stdin line is one command; each stdout line is one event.
//!
//! # Commands
//!
//! ```json
//! {"command":"catalog"}
//! {"command":"state"}
//! {"command":"set_view","view":"teacher"}
//! {"command":"select_tab","tab":"assignments"}
//! {"command":"quit"}
//! ```
//!
//! # Example Output
//!
//! ```json
//! {"event":"ready","view":"learner","tabs":["home","cbcflix","cyberverse","assignments","profile"],"timestamp":1704700001000}
//! {"event":"state","view":"teacher","active_tab":null,"tabs":["home","cbcflix","cyberverse","assignments","profile"],"screen":"teacher_dashboard","timestamp":1704700002000}
//! {"event":"error","message":"Learner app is not shown, cannot select tab: profile","timestamp":1704700003000}
//! ```

pub mod runner;

pub use runner::{drive, run_headless, HeadlessSession};

use chrono::Utc;
use ecoschoolia_app::AppState;
use ecoschoolia_core::prelude::*;
use ecoschoolia_core::{Catalog, Tab, ViewMode};
use serde::{Deserialize, Serialize};

/// Commands accepted on stdin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum HeadlessCommand {
    /// Dump every fixture table
    Catalog,
    /// Report the current view, tab and screen
    State,
    SetView { view: ViewMode },
    SelectTab { tab: Tab },
    Quit,
}

impl HeadlessCommand {
    /// Parse one stdin line
    pub fn parse(line: &str) -> Result<Self> {
        serde_json::from_str(line).map_err(|e| Error::headless_command(e.to_string()))
    }
}

/// Events emitted on stdout
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Session started and accepting commands
    Ready {
        view: ViewMode,
        tabs: Vec<Tab>,
        timestamp: i64,
    },

    /// Full fixture catalog
    Catalog {
        catalog: &'static Catalog,
        timestamp: i64,
    },

    /// Current selection
    State {
        view: ViewMode,
        active_tab: Option<Tab>,
        tabs: Vec<Tab>,
        screen: &'static str,
        timestamp: i64,
    },

    /// A command was rejected; the session keeps running
    Error { message: String, timestamp: i64 },
}

impl HeadlessEvent {
    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn ready(state: &AppState) -> Self {
        Self::Ready {
            view: state.view_mode(),
            tabs: state.tab_set().to_vec(),
            timestamp: Self::now(),
        }
    }

    pub fn catalog() -> Self {
        Self::Catalog {
            catalog: Catalog::get(),
            timestamp: Self::now(),
        }
    }

    pub fn state(state: &AppState) -> Self {
        Self::State {
            view: state.view_mode(),
            active_tab: state.active_tab(),
            tabs: state.tab_set().to_vec(),
            screen: state.screen().name(),
            timestamp: Self::now(),
        }
    }

    pub fn error(err: &Error) -> Self {
        Self::Error {
            message: err.to_string(),
            timestamp: Self::now(),
        }
    }
}
