//! Ecoschoolia - AI-powered CBC learning app and teacher dashboard in the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use ecoschoolia::RunMode;
use ecoschoolia_app::config::{self, IconMode, SettingsOverrides};
use ecoschoolia_core::prelude::*;
use ecoschoolia_core::ViewMode;

/// Ecoschoolia - learner app and teacher dashboard
#[derive(Parser, Debug)]
#[command(name = "ecoschoolia")]
#[command(about = "AI-powered CBC learning, 3D school & CBCflix in the terminal", long_about = None)]
struct Args {
    /// Directory holding `.ecoschoolia/config.toml` (defaults to the current directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Run in headless mode (NDJSON commands on stdin, events on stdout)
    #[arg(long)]
    headless: bool,

    /// Start on the teacher dashboard
    #[arg(long)]
    teacher: bool,

    /// Hide the CBCflix tab (four-tab learner shell)
    #[arg(long)]
    no_cbcflix: bool,

    /// Icon style: "unicode" or "nerd_fonts"
    #[arg(long, value_name = "MODE")]
    icons: Option<IconMode>,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            initial_view: self.teacher.then_some(ViewMode::Teacher),
            hide_cbcflix: self.no_cbcflix,
            icons: self.icons,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Get base path from args or use current directory
    let base_path = args
        .path
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init_config {
        let path = config::init_config_dir(&base_path)?;
        eprintln!("Config file: {}", path.display());
        return Ok(());
    }

    let mode = if args.headless {
        RunMode::Headless
    } else {
        RunMode::Tui
    };

    ecoschoolia::run(&base_path, args.overrides(), mode).await
}
