//! Settings parser for .ecoschoolia/config.toml

use super::types::Settings;
use ecoschoolia_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = ".ecoschoolia";

const DEFAULT_CONFIG: &str = r#"# Ecoschoolia Configuration

[shell]
show_cbcflix = true        # false = four-tab learner shell without the video hub
initial_view = "learner"   # "learner" or "teacher"

[ui]
icons = "unicode"          # "unicode" or "nerd_fonts"
"#;

/// Path of the config file for a base directory
pub fn config_path(base_path: &Path) -> PathBuf {
    base_path.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.ecoschoolia/config.toml`
///
/// A missing, unreadable or malformed file falls back to defaults.
pub fn load_settings(base_path: &Path) -> Settings {
    let config_path = config_path(base_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create the default config file in `.ecoschoolia/`
///
/// An existing file is left untouched. Returns the config file path.
pub fn init_config_dir(base_path: &Path) -> Result<PathBuf> {
    let config_dir = base_path.join(CONFIG_DIR);

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create {}", config_dir.display()))?;
    }

    let path = config_dir.join(CONFIG_FILENAME);
    if !path.exists() {
        std::fs::write(&path, DEFAULT_CONFIG)
            .context("Failed to write config.toml")?;
        info!("Created default config at {:?}", path);
    }

    Ok(path)
}
