//! Dashboard stat card

use ecoschoolia_core::DashboardStat;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;
use crate::widgets::{Card, ProgressBar};

pub const STAT_CARD_HEIGHT: u16 = 5;

pub struct StatCard<'a> {
    stat: &'a DashboardStat,
}

impl<'a> StatCard<'a> {
    pub fn new(stat: &'a DashboardStat) -> Self {
        Self { stat }
    }
}

impl Widget for StatCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = Card::new().render_frame(area, buf);
        if inner.height == 0 {
            return;
        }
        let tone = styles::stat_tone(self.stat.tone);
        let row = |i: u16| Rect {
            y: inner.y + i,
            height: 1,
            ..inner
        };

        Line::from(Span::styled(self.stat.label, styles::text_secondary())).render(row(0), buf);

        if inner.height >= 2 {
            Line::from(Span::styled(
                self.stat.value,
                tone.add_modifier(Modifier::BOLD),
            ))
            .render(row(1), buf);
            Line::from(Span::styled(format!(" {} ", self.stat.badge), styles::pill()))
                .right_aligned()
                .render(row(1), buf);
        }
        if inner.height >= 3 {
            ProgressBar::new(DashboardStat::TREND_PERCENT)
                .fill_style(tone)
                .render(row(2), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette;
    use ecoschoolia_core::Catalog;

    #[test]
    fn test_stat_card_content() {
        let stat = &Catalog::get().stats[0];
        let mut term = TestTerminal::with_size(30, STAT_CARD_HEIGHT);
        term.render_widget(StatCard::new(stat), term.area());

        assert!(term.buffer_contains("Attendance today"));
        assert!(term.buffer_contains("92%"));
        assert!(term.buffer_contains("Stable"));

        let (x, y) = term.find_all("92%")[0];
        assert_eq!(term.style_at(x, y).fg, Some(palette::STAT_TEAL));
    }

    #[test]
    fn test_trend_bar_is_three_quarters() {
        let stat = &Catalog::get().stats[2];
        let mut term = TestTerminal::with_size(24, STAT_CARD_HEIGHT);
        term.render_widget(StatCard::new(stat), term.area());

        // Card inner width: 24 minus borders and padding
        let filled = (0..24).filter(|x| term.cell_at(*x, 3) == Some("█")).count();
        assert_eq!(filled, 15);
    }
}
