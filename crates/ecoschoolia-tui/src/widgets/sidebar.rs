//! Teacher sidebar navigation

use ecoschoolia_core::NavItem;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, styles};

pub struct Sidebar<'a> {
    items: &'a [NavItem],
    icons: IconSet,
}

impl<'a> Sidebar<'a> {
    pub fn new(items: &'a [NavItem], icons: IconSet) -> Self {
        Self { items, icons }
    }

    fn icon_for(&self, label: &str) -> &'static str {
        match label {
            "Dashboard" => self.icons.dashboard(),
            "Classes" => self.icons.school(),
            "Learners" => self.icons.users(),
            "Assignments" => self.icons.clipboard(),
            "Analytics & AI" => self.icons.chart(),
            "Communication" => self.icons.message(),
            "Timetable" => self.icons.calendar(),
            _ => self.icons.dot(),
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        // Two rows per item
        for (i, item) in self.items.iter().enumerate() {
            let y = inner.y + (i as u16) * 2;
            if y >= inner.y + inner.height {
                break;
            }
            let row = Rect {
                y,
                height: 1,
                ..inner
            };
            let (icon_style, label_style) = if item.current {
                buf.set_style(row, styles::selected());
                (styles::accent(), styles::selected())
            } else {
                (styles::text_muted(), styles::text_secondary())
            };
            Line::from(vec![
                Span::raw(" "),
                Span::styled(self.icon_for(item.label), icon_style),
                Span::raw(" "),
                Span::styled(item.label, label_style),
            ])
            .render(row, buf);
        }
    }
}
