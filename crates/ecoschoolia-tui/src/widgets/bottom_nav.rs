//! Learner bottom navigation: one item per enabled tab

use ecoschoolia_core::{Tab, TabSet};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

pub struct BottomNav {
    tabs: TabSet,
    active: Tab,
    icons: IconSet,
}

impl BottomNav {
    pub fn new(tabs: TabSet, active: Tab, icons: IconSet) -> Self {
        Self {
            tabs,
            active,
            icons,
        }
    }
}

impl Widget for BottomNav {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette::BORDER_DIM));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || self.tabs.is_empty() {
            return;
        }

        let slots = Layout::horizontal(vec![Constraint::Fill(1); self.tabs.len()]).split(inner);

        for (tab, slot) in self.tabs.iter().zip(slots.iter()) {
            let style = if tab == self.active {
                styles::selected()
            } else {
                styles::unselected()
            };
            buf.set_style(*slot, style);

            let icon = Line::from(self.icons.tab(tab)).centered();
            icon.render(Rect { height: 1, ..*slot }, buf);

            if slot.height >= 2 {
                let label = Line::from(tab.label()).centered();
                label.render(
                    Rect {
                        y: slot.y + 1,
                        height: 1,
                        ..*slot
                    },
                    buf,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(tabs: TabSet, active: Tab) -> TestTerminal {
        let mut term = TestTerminal::with_size(58, 3);
        term.render_widget(BottomNav::new(tabs, active, IconSet::default()), term.area());
        term
    }

    #[test]
    fn test_renders_one_item_per_tab() {
        let term = render(TabSet::default(), Tab::Home);
        for tab in Tab::ALL {
            assert!(term.line_contains(2, tab.label()), "{}", tab.label());
        }
    }

    #[test]
    fn test_four_tab_variant_hides_cbcflix() {
        let term = render(TabSet::new(false), Tab::Home);
        assert!(!term.buffer_contains("CBCflix"));
        assert!(term.buffer_contains("3D School"));
    }

    #[test]
    fn test_active_item_is_highlighted() {
        let term = render(TabSet::default(), Tab::Assignments);

        let (x, y) = term.find_all("Assignments")[0];
        assert_eq!(term.style_at(x, y).fg, Some(palette::ACCENT));

        let (x, y) = term.find_all("Home")[0];
        assert_eq!(term.style_at(x, y).fg, Some(palette::TEXT_MUTED));
    }
}
