//! Footer row listing the active key bindings

use ecoschoolia_core::{TabSet, ViewMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct KeyHints {
    view_mode: ViewMode,
    tabs: TabSet,
}

impl KeyHints {
    pub fn new(view_mode: ViewMode, tabs: TabSet) -> Self {
        Self { view_mode, tabs }
    }

    fn hints(&self) -> Vec<(String, &'static str)> {
        let mut hints = vec![
            ("l".to_string(), "Learner"),
            ("t".to_string(), "Teacher"),
            ("v".to_string(), "Switch view"),
        ];
        if self.view_mode == ViewMode::Learner {
            hints.push((format!("1-{}", self.tabs.len()), "Tab"));
            hints.push(("←/→".to_string(), "Cycle tabs"));
        }
        hints.push(("Enter".to_string(), "Press"));
        hints.push(("q".to_string(), "Quit"));
        hints
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled("[", styles::text_faint()));
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!("] {action}  "), styles::text_faint()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
