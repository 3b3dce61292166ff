//! Assignments list with status badges

use ecoschoolia_core::{Assignment, Catalog};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, styles};
use crate::widgets::{Button, ButtonVariant, Card};

const ASSIGNMENT_CARD_HEIGHT: u16 = 4;

pub struct AssignmentsScreen<'a> {
    catalog: &'a Catalog,
    icons: IconSet,
}

impl<'a> AssignmentsScreen<'a> {
    pub fn new(catalog: &'a Catalog, icons: IconSet) -> Self {
        Self { catalog, icons }
    }
}

impl Widget for AssignmentsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut constraints = vec![
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ];
        constraints.extend(
            self.catalog
                .assignments
                .iter()
                .map(|_| Constraint::Length(ASSIGNMENT_CARD_HEIGHT)),
        );
        let areas = Layout::vertical(constraints).split(area);

        Line::from(vec![
            Span::styled(format!("{} ", self.icons.clipboard()), styles::accent()),
            Span::styled("My Assignments", styles::title()),
        ])
        .render(areas[0], buf);
        Line::from(Span::styled(
            "Keep track of what's due and what you've submitted.",
            styles::text_muted(),
        ))
        .render(areas[1], buf);

        for (assignment, slot) in self.catalog.assignments.iter().zip(areas.iter().skip(3)) {
            AssignmentCard { assignment }.render(*slot, buf);
        }
    }
}

/// Title and due date on the left, status badge and "Open" on the right
pub struct AssignmentCard<'a> {
    pub assignment: &'a Assignment,
}

impl AssignmentCard<'_> {
    pub fn badge(&self) -> Span<'static> {
        let status = self.assignment.status;
        Span::styled(format!(" {} ", status.label()), styles::tone_badge(status.tone()))
    }
}

impl Widget for AssignmentCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = Card::new().render_frame(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let a = self.assignment;

        Line::from(vec![
            Span::raw("📘 "),
            Span::styled(a.title, styles::title()),
        ])
        .render(Rect { height: 1, ..inner }, buf);
        Line::from(self.badge())
            .right_aligned()
            .render(Rect { height: 1, ..inner }, buf);

        if inner.height >= 2 {
            let row = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            Line::from(vec![
                Span::raw("   "),
                Span::styled("Due: ", styles::text_muted()),
                Span::styled(a.due_in, styles::text_secondary().add_modifier(Modifier::BOLD)),
            ])
            .render(row, buf);
            Line::from(Button::new("Open").variant(ButtonVariant::Outline).span())
                .right_aligned()
                .render(row, buf);
        }
    }
}
