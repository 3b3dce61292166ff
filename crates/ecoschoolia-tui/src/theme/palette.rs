//! Color palette: dark slate surfaces with a teal/emerald accent.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(2, 6, 23); // slate-950
pub const CARD_BG: Color = Color::Rgb(15, 23, 42); // slate-900
pub const SURFACE: Color = Color::Rgb(30, 41, 59); // slate-800

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(51, 65, 85); // slate-700
pub const BORDER_ACTIVE: Color = Color::Rgb(20, 184, 166); // teal-500

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(94, 234, 212); // teal-300
pub const ACCENT_STRONG: Color = Color::Rgb(16, 185, 129); // emerald-500
pub const CONTRAST_FG: Color = Color::Rgb(2, 6, 23);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(241, 245, 249); // slate-100
pub const TEXT_SECONDARY: Color = Color::Rgb(203, 213, 225); // slate-300
pub const TEXT_MUTED: Color = Color::Rgb(148, 163, 184); // slate-400
pub const TEXT_FAINT: Color = Color::Rgb(100, 116, 139); // slate-500

// --- Semantic tones ---
pub const TONE_WARNING: Color = Color::Rgb(253, 164, 175); // rose-300
pub const TONE_CAUTION: Color = Color::Rgb(252, 211, 77); // amber-300
pub const TONE_SUCCESS: Color = Color::Rgb(110, 231, 183); // emerald-300

// --- Stat card tones ---
pub const STAT_TEAL: Color = Color::Rgb(94, 234, 212);
pub const STAT_AMBER: Color = Color::Rgb(252, 211, 77);
pub const STAT_SKY: Color = Color::Rgb(125, 211, 252); // sky-300

// --- Video section posters ---
pub const POSTER_EMERALD: Color = Color::Rgb(6, 95, 70);
pub const POSTER_FUCHSIA: Color = Color::Rgb(134, 25, 143);
pub const POSTER_AMBER: Color = Color::Rgb(146, 64, 14);

// --- Misc ---
pub const DIFFICULTY_ON: Color = Color::Rgb(251, 191, 36); // amber-400
pub const DIFFICULTY_OFF: Color = BORDER_DIM;
pub const BAR_EMPTY: Color = SURFACE;
pub const TROPHY: Color = Color::Rgb(251, 191, 36);
