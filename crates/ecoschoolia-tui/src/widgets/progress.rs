//! Horizontal percentage bar

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::theme::palette;

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// Number of filled cells for `percent` of a `width`-cell bar.
///
/// Values above 100 are treated as 100.
pub fn bar_cells(percent: u8, width: u16) -> u16 {
    let percent = u32::from(percent.min(100));
    (percent * u32::from(width) / 100) as u16
}

/// One-row bar whose filled part is exactly `percent` of its width
pub struct ProgressBar {
    percent: u8,
    fill: Style,
}

impl ProgressBar {
    pub fn new(percent: u8) -> Self {
        Self {
            percent,
            fill: Style::default().fg(palette::ACCENT_STRONG),
        }
    }

    pub fn fill_style(mut self, style: Style) -> Self {
        self.fill = style;
        self
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let filled = bar_cells(self.percent, area.width);
        let empty = Style::default().fg(palette::BAR_EMPTY);
        for i in 0..area.width {
            let (symbol, style) = if i < filled {
                (FILLED, self.fill)
            } else {
                (EMPTY, empty)
            };
            buf[(area.x + i, area.y)].set_symbol(symbol).set_style(style);
        }
    }
}
