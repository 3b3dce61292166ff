//! Key event handlers for the two shells

use ecoschoolia_core::ViewMode;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Screen};

/// Convert key events to messages based on the mounted shell
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_global(key) {
        return Some(msg);
    }

    match state.screen() {
        Screen::Learner(_) => handle_key_learner(state, key),
        Screen::TeacherDashboard => handle_key_teacher(state, key),
    }
}

/// Keys that behave the same in both shells
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Mode switch
        InputKey::Char('l') => Some(Message::SetViewMode(ViewMode::Learner)),
        InputKey::Char('t') => Some(Message::SetViewMode(ViewMode::Teacher)),
        InputKey::Char('v') => Some(Message::ToggleViewMode),

        _ => None,
    }
}

/// Bottom navigation and the active screen's primary button
fn handle_key_learner(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Number keys 1-5 select tab by position
        InputKey::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            Some(Message::SelectTabByIndex(index))
        }

        InputKey::Right | InputKey::Tab => Some(Message::NextTab),
        InputKey::Left | InputKey::BackTab => Some(Message::PreviousTab),

        InputKey::Enter => primary_action(state),

        _ => None,
    }
}

fn handle_key_teacher(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => primary_action(state),
        _ => None,
    }
}

fn primary_action(state: &AppState) -> Option<Message> {
    state.screen().primary_action().map(Message::InertAction)
}
