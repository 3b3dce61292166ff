//! Semantic style builders.

use ecoschoolia_core::{SectionColor, StatTone, Tone};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_faint() -> Style {
    Style::default().fg(palette::TEXT_FAINT)
}

pub fn title() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

/// Pill-shaped label (chips, captions, grade bands)
pub fn pill() -> Style {
    Style::default()
        .fg(palette::TEXT_SECONDARY)
        .bg(palette::SURFACE)
}

/// Active item in a segmented control or navigation bar
pub fn selected() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .bg(palette::SURFACE)
        .add_modifier(Modifier::BOLD)
}

pub fn unselected() -> Style {
    text_muted()
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::TONE_CAUTION)
}

// --- Semantic tones ---

/// Foreground color for a status/engagement tone
pub fn tone(tone: Tone) -> Style {
    let color = match tone {
        Tone::Warning => palette::TONE_WARNING,
        Tone::Caution => palette::TONE_CAUTION,
        Tone::Success => palette::TONE_SUCCESS,
    };
    Style::default().fg(color)
}

/// Badge style: tone foreground on a raised surface
pub fn tone_badge(t: Tone) -> Style {
    tone(t).bg(palette::SURFACE)
}

pub fn stat_tone(tone: StatTone) -> Style {
    let color = match tone {
        StatTone::Teal => palette::STAT_TEAL,
        StatTone::Amber => palette::STAT_AMBER,
        StatTone::Sky => palette::STAT_SKY,
    };
    Style::default().fg(color)
}

pub fn poster(color: SectionColor) -> Style {
    let bg = match color {
        SectionColor::Emerald => palette::POSTER_EMERALD,
        SectionColor::Fuchsia => palette::POSTER_FUCHSIA,
        SectionColor::Amber => palette::POSTER_AMBER,
    };
    Style::default().fg(palette::TEXT_PRIMARY).bg(bg)
}

// --- Block builders ---

pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            palette::BORDER_ACTIVE
        } else {
            palette::BORDER_DIM
        }))
}

/// Rounded card with one column of horizontal padding
pub fn card_block() -> Block<'static> {
    glass_block(false)
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette::CARD_BG))
}
