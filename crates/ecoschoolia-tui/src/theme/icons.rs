//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: single-width symbols that work in all terminals
//! - `IconMode::NerdFonts`: Font Awesome glyphs (requires a Nerd Font)

use ecoschoolia_app::config::IconMode;
use ecoschoolia_core::Tab;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    fn pick(&self, nerd: &'static str, unicode: &'static str) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => nerd,
            IconMode::Unicode => unicode,
        }
    }

    // --- Navigation ---

    pub fn home(&self) -> &'static str {
        self.pick("\u{f015}", "\u{2302}") // nf-fa-home / ⌂
    }

    pub fn film(&self) -> &'static str {
        self.pick("\u{f008}", "\u{25a4}") // nf-fa-film / ▤
    }

    pub fn globe(&self) -> &'static str {
        self.pick("\u{f0ac}", "\u{25cd}") // nf-fa-globe / ◍
    }

    pub fn clipboard(&self) -> &'static str {
        self.pick("\u{f0ea}", "\u{2261}") // nf-fa-clipboard / ≡
    }

    pub fn user(&self) -> &'static str {
        self.pick("\u{f007}", "\u{263a}") // nf-fa-user / ☺
    }

    /// Icon for a bottom navigation tab
    pub fn tab(&self, tab: Tab) -> &'static str {
        match tab {
            Tab::Home => self.home(),
            Tab::CbcFlix => self.film(),
            Tab::Cyberverse => self.globe(),
            Tab::Assignments => self.clipboard(),
            Tab::Profile => self.user(),
        }
    }

    // --- Teacher sidebar ---

    pub fn dashboard(&self) -> &'static str {
        self.pick("\u{f0e4}", "\u{25a6}") // nf-fa-dashboard / ▦
    }

    pub fn school(&self) -> &'static str {
        self.pick("\u{f19c}", "\u{2656}") // nf-fa-university / ♖
    }

    pub fn users(&self) -> &'static str {
        self.pick("\u{f0c0}", "\u{2687}") // nf-fa-users / ⚇
    }

    pub fn chart(&self) -> &'static str {
        self.pick("\u{f080}", "\u{2590}") // nf-fa-bar_chart / ▐
    }

    pub fn message(&self) -> &'static str {
        self.pick("\u{f075}", "\u{2709}") // nf-fa-comment / ✉
    }

    pub fn calendar(&self) -> &'static str {
        self.pick("\u{f073}", "\u{25eb}") // nf-fa-calendar / ◫
    }

    // --- Decorations ---

    pub fn sparkles(&self) -> &'static str {
        self.pick("\u{f0d0}", "\u{2726}") // nf-fa-magic / ✦
    }

    pub fn clock(&self) -> &'static str {
        self.pick("\u{f017}", "\u{25f7}") // nf-fa-clock_o / ◷
    }

    pub fn play(&self) -> &'static str {
        self.pick("\u{f04b}", "\u{25b6}") // nf-fa-play / ▶
    }

    pub fn star(&self) -> &'static str {
        self.pick("\u{f005}", "\u{2605}") // nf-fa-star / ★
    }

    pub fn trophy(&self) -> &'static str {
        self.pick("\u{f091}", "\u{265b}") // nf-fa-trophy / ♛
    }

    pub fn alert(&self) -> &'static str {
        self.pick("\u{f071}", "!") // nf-fa-warning
    }

    pub fn chevron_right(&self) -> &'static str {
        self.pick("\u{f054}", "\u{203a}") // nf-fa-chevron_right / ›
    }

    pub fn dot(&self) -> &'static str {
        "\u{25cf}" // ●
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tab_has_an_icon() {
        for mode in [IconMode::Unicode, IconMode::NerdFonts] {
            let icons = IconSet::new(mode);
            for tab in Tab::ALL {
                assert!(!icons.tab(tab).is_empty());
            }
        }
    }

    #[test]
    fn test_unicode_icons_are_single_width() {
        use unicode_width::UnicodeWidthStr;

        let icons = IconSet::new(IconMode::Unicode);
        for tab in Tab::ALL {
            assert_eq!(icons.tab(tab).width(), 1, "{tab}");
        }
        assert_eq!(icons.clipboard().width(), 1);
        assert_eq!(icons.sparkles().width(), 1);
        assert_eq!(icons.clock().width(), 1);
    }

    #[test]
    fn test_modes_differ() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.home(), nerd.home());
    }
}
