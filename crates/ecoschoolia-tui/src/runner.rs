//! Main TUI runner - entry point and event loop

use ecoschoolia_app::{process_message, signals, AppState, Message, Settings};
use ecoschoolia_core::prelude::*;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Run the terminal UI until the user or a signal quits
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = terminal::init()?;
    let mut state = AppState::with_settings(settings);
    info!(
        "Starting in {} view with {} tabs",
        state.view_mode(),
        state.tab_set().len()
    );

    // Signal handler sends Message::Quit on SIGINT/SIGTERM
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx);

    let restored = terminal::restore();
    if restored.is_ok() {
        info!("Terminal restored");
    }
    result.and(restored)
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // External messages (signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }
        if state.should_quit() {
            break;
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}
