//! Ecoschoolia
//!
//! Terminal rendition of the Ecoschoolia learner app and teacher dashboard,
//! with a headless NDJSON interface driving the same state machine.

pub mod headless;

use std::path::Path;

use ecoschoolia_app::config::{self, SettingsOverrides};
use ecoschoolia_core::prelude::*;

pub use headless::run_headless;

/// How the binary should run once settings are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Tui,
    Headless,
}

/// Main application entry point
///
/// Loads `.ecoschoolia/config.toml` under `base_path`, applies the CLI
/// overrides and runs the terminal UI or the headless loop.
pub async fn run(base_path: &Path, overrides: SettingsOverrides, mode: RunMode) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI and headless mode own stdout)
    ecoschoolia_core::logging::init()?;

    info!("Base path: {}", base_path.display());
    let settings = config::load_settings(base_path).with_overrides(overrides);
    debug!("Settings: {:?}", settings);

    let result = match mode {
        RunMode::Tui => ecoschoolia_tui::run(settings).await,
        RunMode::Headless => run_headless(settings).await,
    };

    match result {
        Err(ref e) if e.is_fatal() => error!("Terminal failure: {:?}", e),
        Err(ref e) => error!("Application error: {:?}", e),
        Ok(()) => {}
    }

    info!("Ecoschoolia exiting");
    result
}
