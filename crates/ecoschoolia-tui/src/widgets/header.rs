//! Top bar: brand on the left, the learner/teacher mode switch on the right

use ecoschoolia_core::ViewMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, palette, styles};

pub const BRAND: &str = "Ecoschoolia";
pub const REGION_PILL: &str = "CBC • Kenya";
pub const TAGLINE: &str = "AI-powered CBC learning, 3D school & CBCflix";

pub struct TopBar {
    view_mode: ViewMode,
    icons: IconSet,
}

impl TopBar {
    pub fn new(view_mode: ViewMode, icons: IconSet) -> Self {
        Self { view_mode, icons }
    }

    fn brand_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                " ES ",
                styles::accent_bold().bg(palette::CARD_BG),
            ),
            Span::styled(
                "AI",
                Style::default()
                    .fg(palette::CONTRAST_FG)
                    .bg(palette::TONE_SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(BRAND, styles::title()),
            Span::raw(" "),
            Span::styled(
                format!(" {} {REGION_PILL} ", self.icons.sparkles()),
                styles::accent().bg(palette::SURFACE),
            ),
        ])
    }

    fn tagline(&self) -> Line<'static> {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(TAGLINE, styles::text_muted()),
        ])
    }

    /// Segmented control, the segment for the current view highlighted
    pub fn mode_switch(&self) -> Line<'static> {
        let segment = |mode: ViewMode, icon: &str| {
            let style = if mode == self.view_mode {
                styles::selected()
            } else {
                styles::unselected()
            };
            Span::styled(format!(" {icon} {} ", mode.label()), style)
        };
        Line::from(vec![
            segment(ViewMode::Learner, self.icons.home()),
            Span::styled("│", Style::default().fg(palette::BORDER_DIM)),
            segment(ViewMode::Teacher, self.icons.dashboard()),
            Span::raw(" "),
        ])
    }
}

impl Widget for TopBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::DEEPEST_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let brand = self.brand_line();
        let switch = self.mode_switch();
        let switch_width = switch.width() as u16;

        buf.set_line(inner.x, inner.y, &brand, inner.width);

        // Mode switch on the right of the first row, or below the tagline
        // when the row is too narrow for both
        let fits = brand.width() as u16 + switch_width + 2 <= inner.width;
        if fits {
            let x = inner.x + inner.width - switch_width;
            buf.set_line(x, inner.y, &switch, switch_width);
            if inner.height >= 2 {
                buf.set_line(inner.x, inner.y + 1, &self.tagline(), inner.width);
            }
        } else if inner.height >= 2 {
            buf.set_line(inner.x, inner.y + 1, &switch, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(mode: ViewMode, width: u16) -> TestTerminal {
        let mut term = TestTerminal::with_size(width, 4);
        term.render_widget(TopBar::new(mode, IconSet::default()), term.area());
        term
    }

    #[test]
    fn test_brand_and_tagline() {
        let term = render(ViewMode::Learner, 120);
        assert!(term.buffer_contains("ES"));
        assert!(term.buffer_contains(BRAND));
        assert!(term.buffer_contains(REGION_PILL));
        assert!(term.buffer_contains(TAGLINE));
    }

    #[test]
    fn test_mode_switch_highlights_current_view() {
        for (mode, active, inactive) in [
            (ViewMode::Learner, "Learner app", "Teacher dashboard"),
            (ViewMode::Teacher, "Teacher dashboard", "Learner app"),
        ] {
            let term = render(mode, 120);
            let (ax, ay) = term.find_all(active)[0];
            let (ix, iy) = term.find_all(inactive)[0];

            assert_eq!(term.style_at(ax, ay).fg, Some(palette::ACCENT));
            assert_eq!(term.style_at(ix, iy).fg, Some(palette::TEXT_MUTED));
        }
    }

    #[test]
    fn test_narrow_header_keeps_switch() {
        let term = render(ViewMode::Learner, 50);
        assert!(term.buffer_contains("Learner app"));
    }
}
