//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use ecoschoolia_core::{Tab, ViewMode};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit (q, Esc, Ctrl+C, signal handler, headless `quit`)
    Quit,

    // ─────────────────────────────────────────────────────────
    // View Mode Messages
    // ─────────────────────────────────────────────────────────
    /// Show the learner app or the teacher dashboard
    SetViewMode(ViewMode),
    /// Flip between learner app and teacher dashboard
    ToggleViewMode,

    // ─────────────────────────────────────────────────────────
    // Learner Tab Messages
    // ─────────────────────────────────────────────────────────
    /// Bottom navigation press
    SelectTab(Tab),
    /// Select by 0-based position among the enabled tabs
    SelectTabByIndex(usize),
    /// Next enabled tab (wraps)
    NextTab,
    /// Previous enabled tab (wraps)
    PreviousTab,

    /// A button that is drawn as interactive but has no behavior
    InertAction(&'static str),
}
