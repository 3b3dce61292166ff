//! Configuration file parsing for Ecoschoolia
//!
//! Supports:
//! - `.ecoschoolia/config.toml` - Global settings
//! - Command-line overrides layered on top

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings};
pub use types::*;
