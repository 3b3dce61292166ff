//! Centralized theme for the Ecoschoolia TUI.
//!
//! This module provides:
//! - `palette`: raw color constants (slate background, teal accent)
//! - `styles`: semantic style builder functions
//! - `icons`: glyphs with Nerd Font and plain Unicode variants

pub mod icons;
pub mod palette;
pub mod styles;
