//! Terminal setup and restoration

use std::io;

use ecoschoolia_core::prelude::*;
use ratatui::DefaultTerminal;

/// Install a panic hook that restores the terminal before the report prints
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enter raw mode and the alternate screen
pub fn init() -> Result<DefaultTerminal> {
    ratatui::try_init().map_err(init_failed)
}

/// Leave raw mode and the alternate screen
pub fn restore() -> Result<()> {
    ratatui::try_restore().map_err(restore_failed)
}

fn init_failed(err: io::Error) -> Error {
    Error::TerminalInit(err.to_string())
}

fn restore_failed(err: io::Error) -> Error {
    Error::TerminalRestore(err.to_string())
}
