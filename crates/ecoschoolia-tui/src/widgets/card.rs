//! Presentational primitives: cards and buttons.
//!
//! Buttons are drawn as interactive but carry no behavior of their own.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::theme::{palette, styles};

/// Card frame with an optional title (left) and caption (right)
#[derive(Debug, Clone, Default)]
pub struct Card<'a> {
    title: Option<Line<'a>>,
    caption: Option<&'a str>,
    focused: bool,
}

impl<'a> Card<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<Line<'a>>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn caption(mut self, caption: &'a str) -> Self {
        self.caption = Some(caption);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn block(&self) -> Block<'a> {
        let mut block = styles::card_block();
        if self.focused {
            block = block.border_style(Style::default().fg(palette::BORDER_ACTIVE));
        }
        if let Some(title) = &self.title {
            block = block.title_top(title.clone().style(styles::title()));
        }
        if let Some(caption) = self.caption {
            block = block.title_top(
                Line::from(Span::styled(format!(" {caption} "), styles::text_muted()))
                    .right_aligned(),
            );
        }
        block
    }

    /// Render the frame and return the area inside it
    pub fn render_frame(&self, area: Rect, buf: &mut Buffer) -> Rect {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);
        inner
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled accent pill
    #[default]
    Primary,
    /// Subtle filled pill
    Soft,
    /// Bracketed outline
    Outline,
}

/// Inert button label
#[derive(Debug, Clone, Copy)]
pub struct Button<'a> {
    label: &'a str,
    icon: Option<&'a str>,
    variant: ButtonVariant,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            icon: None,
            variant: ButtonVariant::Primary,
        }
    }

    pub fn icon(mut self, icon: &'a str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn span(&self) -> Span<'a> {
        let text = match self.icon {
            Some(icon) => format!("{icon} {}", self.label),
            None => self.label.to_string(),
        };
        match self.variant {
            ButtonVariant::Primary => Span::styled(
                format!(" {text} "),
                Style::default()
                    .fg(palette::CONTRAST_FG)
                    .bg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            ButtonVariant::Soft => Span::styled(
                format!(" {text} "),
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .bg(palette::SURFACE),
            ),
            ButtonVariant::Outline => Span::styled(
                format!("[{text}]"),
                Style::default().fg(palette::TEXT_PRIMARY),
            ),
        }
    }

    pub fn width(&self) -> u16 {
        self.span().width() as u16
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_span(area.x, area.y, &self.span(), area.width);
    }
}
