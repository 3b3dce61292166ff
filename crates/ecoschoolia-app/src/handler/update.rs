//! Main update function - handles state transitions (TEA pattern)

use ecoschoolia_core::prelude::*;

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // View Mode Messages
        // ─────────────────────────────────────────────────────────
        Message::SetViewMode(mode) => {
            state.set_view_mode(mode);
            UpdateResult::none()
        }

        Message::ToggleViewMode => {
            state.set_view_mode(state.view_mode().toggle());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Learner Tab Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectTab(tab) => {
            if let Err(e) = state.select_tab(tab) {
                warn!("Ignoring tab selection: {}", e);
            }
            UpdateResult::none()
        }

        Message::SelectTabByIndex(index) => match state.tab_set().get(index) {
            Some(tab) => UpdateResult::message(Message::SelectTab(tab)),
            None => {
                debug!("No tab at position {}", index + 1);
                UpdateResult::none()
            }
        },

        Message::NextTab => match state.active_tab() {
            Some(current) => UpdateResult::message(Message::SelectTab(
                state.tab_set().next(current),
            )),
            None => UpdateResult::none(),
        },

        Message::PreviousTab => match state.active_tab() {
            Some(current) => UpdateResult::message(Message::SelectTab(
                state.tab_set().previous(current),
            )),
            None => UpdateResult::none(),
        },

        Message::InertAction(label) => {
            debug!("'{}' pressed on {} (no action)", label, state.screen().name());
            UpdateResult::none()
        }
    }
}
