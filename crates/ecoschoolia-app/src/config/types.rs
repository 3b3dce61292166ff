//! Configuration types for Ecoschoolia
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-types and enums

use ecoschoolia_core::{TabSet, ViewMode};
use serde::{Deserialize, Serialize};

/// Application settings (.ecoschoolia/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub shell: ShellSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Tabs the learner shell shows under these settings
    pub fn tab_set(&self) -> TabSet {
        TabSet::new(self.shell.show_cbcflix)
    }
}

/// Learner shell and view-mode settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShellSettings {
    /// Include the curriculum video hub tab (false = four-tab variant)
    #[serde(default = "default_true")]
    pub show_cbcflix: bool,

    /// View shown at startup
    #[serde(default)]
    pub initial_view: ViewMode,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            show_cbcflix: true,
            initial_view: ViewMode::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Icon rendering mode for the TUI.
///
/// Controls whether icons use safe Unicode characters (default, works in all
/// terminals) or Nerd Font glyphs (requires a Nerd Font).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

impl std::str::FromStr for IconMode {
    type Err = ecoschoolia_core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unicode" => Ok(IconMode::Unicode),
            "nerd_fonts" => Ok(IconMode::NerdFonts),
            other => Err(ecoschoolia_core::Error::config_invalid(format!(
                "unknown icon mode '{}' (expected 'unicode' or 'nerd_fonts')",
                other
            ))),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,
}

/// Command-line overrides applied on top of the config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub initial_view: Option<ViewMode>,
    pub hide_cbcflix: bool,
    pub icons: Option<IconMode>,
}

impl Settings {
    /// Apply CLI overrides; flags win over the file
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(view) = overrides.initial_view {
            self.shell.initial_view = view;
        }
        if overrides.hide_cbcflix {
            self.shell.show_cbcflix = false;
        }
        if let Some(icons) = overrides.icons {
            self.ui.icons = icons;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert!(settings.shell.show_cbcflix);
        assert_eq!(settings.shell.initial_view, ViewMode::Learner);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert_eq!(settings.tab_set().len(), 5);
    }

    #[test]
    fn test_parse_partial_toml() {
        let settings: Settings = toml::from_str("[shell]\nshow_cbcflix = false\n").unwrap();
        assert!(!settings.shell.show_cbcflix);
        assert_eq!(settings.shell.initial_view, ViewMode::Learner);
        assert_eq!(settings.tab_set().len(), 4);
    }

    #[test]
    fn test_parse_full_toml() {
        let content = r#"
[shell]
show_cbcflix = true
initial_view = "teacher"

[ui]
icons = "nerd_fonts"
"#;
        let settings: Settings = toml::from_str(content).unwrap();
        assert_eq!(settings.shell.initial_view, ViewMode::Teacher);
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
    }

    #[test]
    fn test_unknown_view_is_rejected() {
        let result: Result<Settings, _> = toml::from_str("[shell]\ninitial_view = \"parent\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_win() {
        let settings = Settings::default().with_overrides(SettingsOverrides {
            initial_view: Some(ViewMode::Teacher),
            hide_cbcflix: true,
            icons: Some(IconMode::NerdFonts),
        });
        assert_eq!(settings.shell.initial_view, ViewMode::Teacher);
        assert!(!settings.shell.show_cbcflix);
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
    }

    #[test]
    fn test_empty_overrides_keep_file_values() {
        let mut base = Settings::default();
        base.shell.show_cbcflix = false;
        let settings = base.clone().with_overrides(SettingsOverrides::default());
        assert_eq!(settings, base);
    }

    #[test]
    fn test_icon_mode_from_str() {
        assert_eq!("unicode".parse::<IconMode>().unwrap(), IconMode::Unicode);
        assert_eq!(
            "nerd_fonts".parse::<IconMode>().unwrap(),
            IconMode::NerdFonts
        );
        assert!("emoji".parse::<IconMode>().is_err());
    }
}
