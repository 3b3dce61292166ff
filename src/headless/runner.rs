//! Headless mode runner - command loop without TUI

use std::io::{self, BufRead, Write};

use ecoschoolia_app::{process_message, signals, AppState, Message, Settings};
use ecoschoolia_core::prelude::*;
use tokio::sync::mpsc;

use super::{HeadlessCommand, HeadlessEvent};

/// One headless session: the app state plus the event sink
pub struct HeadlessSession<W: Write> {
    state: AppState,
    out: W,
}

impl<W: Write> HeadlessSession<W> {
    pub fn new(settings: Settings, out: W) -> Self {
        Self {
            state: AppState::with_settings(settings),
            out,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn into_state(self) -> AppState {
        self.state
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Announce the session
    pub fn start(&mut self) -> Result<()> {
        let event = HeadlessEvent::ready(&self.state);
        self.emit(&event)
    }

    /// Handle one input line. Recoverable failures become `error` events;
    /// anything else is returned.
    pub fn handle_line(&mut self, line: &str) -> Result<()> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(());
        }

        match HeadlessCommand::parse(trimmed) {
            Ok(command) => self.apply(command),
            Err(e) => {
                warn!("Rejected headless input {:?}: {}", trimmed, e);
                self.reject(e)
            }
        }
    }

    /// Messages from outside the command stream (signal handler)
    pub fn handle_message(&mut self, message: Message) {
        process_message(&mut self.state, message);
    }

    fn apply(&mut self, command: HeadlessCommand) -> Result<()> {
        debug!("Headless command: {:?}", command);
        match command {
            HeadlessCommand::Catalog => self.emit(&HeadlessEvent::catalog()),
            HeadlessCommand::State => self.emit_state(),
            HeadlessCommand::SetView { view } => {
                process_message(&mut self.state, Message::SetViewMode(view));
                self.emit_state()
            }
            HeadlessCommand::SelectTab { tab } => {
                if let Err(e) = self.state.check_tab_selection(tab) {
                    warn!("Rejected tab selection: {}", e);
                    return self.reject(e);
                }
                process_message(&mut self.state, Message::SelectTab(tab));
                self.emit_state()
            }
            HeadlessCommand::Quit => {
                process_message(&mut self.state, Message::Quit);
                Ok(())
            }
        }
    }

    fn reject(&mut self, err: Error) -> Result<()> {
        if err.is_recoverable() {
            self.emit(&HeadlessEvent::error(&err))
        } else {
            Err(err)
        }
    }

    fn emit_state(&mut self) -> Result<()> {
        let event = HeadlessEvent::state(&self.state);
        self.emit(&event)
    }

    /// Write one event as a JSON line and flush
    fn emit(&mut self, event: &HeadlessEvent) -> Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Run a session over any line source until `quit` or end of input.
///
/// Returns the final state.
pub fn drive<R: BufRead, W: Write>(settings: Settings, reader: R, out: W) -> Result<AppState> {
    let mut session = HeadlessSession::new(settings, out);
    session.start()?;

    for line in reader.lines() {
        session.handle_line(&line?)?;
        if session.should_quit() {
            break;
        }
    }

    Ok(session.into_state())
}

/// Run in headless mode on stdin/stdout
pub async fn run_headless(settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Ecoschoolia starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    // Stdin is read on a plain thread; lines arrive over a channel
    let (line_tx, mut line_rx) = mpsc::channel::<String>(64);
    std::thread::spawn(move || read_stdin_blocking(line_tx));

    // Signal handler sends Message::Quit on SIGINT/SIGTERM
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(4);
    signals::spawn_signal_handler(msg_tx);

    let mut session = HeadlessSession::new(settings, io::stdout());
    session.start()?;

    while !session.should_quit() {
        tokio::select! {
            line = line_rx.recv() => match line {
                Some(line) => session.handle_line(&line)?,
                None => {
                    info!("stdin closed");
                    break;
                }
            },
            Some(message) = msg_rx.recv() => session.handle_message(message),
        }
    }

    info!("Ecoschoolia headless mode exiting");
    Ok(())
}

fn read_stdin_blocking(line_tx: mpsc::Sender<String>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => {
                if line_tx.blocking_send(line).is_err() {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecoschoolia_core::Tab;

    fn session() -> HeadlessSession<Vec<u8>> {
        HeadlessSession::new(Settings::default(), Vec::new())
    }

    fn lines(session: &HeadlessSession<Vec<u8>>) -> Vec<serde_json::Value> {
        String::from_utf8_lossy(&session.out)
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_blank_lines_ignored() {
        let mut session = session();
        session.handle_line("   ").unwrap();
        assert!(session.out.is_empty());
    }

    #[test]
    fn test_select_tab_emits_state() {
        let mut session = session();
        session
            .handle_line(r#"{"command":"select_tab","tab":"profile"}"#)
            .unwrap();
        assert_eq!(session.state().active_tab(), Some(Tab::Profile));

        let events = lines(&session);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["screen"], "profile");
    }

    #[test]
    fn test_recoverable_rejection_becomes_error_event() {
        let mut session = session();
        session.reject(Error::tab_disabled("cbcflix")).unwrap();

        let events = lines(&session);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event"], "error");
    }

    #[test]
    fn test_unrecoverable_rejection_is_returned() {
        let mut session = session();
        let err = session.reject(Error::terminal("stdout closed")).unwrap_err();
        assert!(matches!(err, Error::Terminal { .. }));
        assert!(session.out.is_empty());
    }

    #[test]
    fn test_signal_quit_message() {
        let mut session = session();
        session.handle_message(Message::Quit);
        assert!(session.should_quit());
    }
}
