//! Message processing
//!
//! Runs a message through the TEA update function, following up on any
//! messages it produces, until the state settles.

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update loop
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = handler::update(state, m).message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use ecoschoolia_core::{Tab, ViewMode};

    #[test]
    fn test_key_message_is_followed_through() {
        let mut state = AppState::new();
        process_message(&mut state, Message::Key(InputKey::Char('4')));
        assert_eq!(state.active_tab(), Some(Tab::Assignments));
    }

    #[test]
    fn test_view_key_followed_through() {
        let mut state = AppState::new();
        process_message(&mut state, Message::Key(InputKey::Char('t')));
        assert_eq!(state.view_mode(), ViewMode::Teacher);
    }
}
