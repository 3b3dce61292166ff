//! Class overview table

use ecoschoolia_core::ClassRow;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, Row, Table, Widget},
};

use crate::theme::{icons::IconSet, styles};
use crate::widgets::{Button, ButtonVariant, Card};

/// Border, header row, header gap and one row per class
pub const fn class_overview_height(rows: usize) -> u16 {
    4 + rows as u16
}

const HEADERS: [&str; 6] = [
    "Class",
    "Learners",
    "Attendance",
    "Engagement",
    "Weak competency",
    "Action",
];

const ACTION_LABEL: &str = "View details";

pub struct ClassOverview<'a> {
    classes: &'a [ClassRow],
    icons: IconSet,
}

impl<'a> ClassOverview<'a> {
    pub fn new(classes: &'a [ClassRow], icons: IconSet) -> Self {
        Self { classes, icons }
    }

    fn row(class: &ClassRow) -> Row<'static> {
        Row::new(vec![
            Cell::from(Span::styled(class.name, styles::text_primary())),
            Cell::from(Span::styled(
                class.learners.to_string(),
                styles::text_secondary(),
            )),
            Cell::from(Span::styled(class.attendance, styles::text_secondary())),
            Cell::from(Span::styled(
                class.engagement.label(),
                styles::tone(class.engagement.tone()),
            )),
            Cell::from(Span::styled(class.weak, styles::text_secondary())),
            Cell::from(Line::from(
                Button::new(ACTION_LABEL)
                    .variant(ButtonVariant::Outline)
                    .span(),
            )),
        ])
    }
}

impl Widget for ClassOverview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![
            Span::styled(format!(" {} ", self.icons.school()), styles::accent()),
            Span::raw("Class overview "),
        ]);
        let inner = Card::new()
            .title(title)
            .caption("Snapshot of key classes")
            .render_frame(area, buf);

        let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h)))
            .style(styles::text_muted())
            .bottom_margin(1);

        let widths = [
            Constraint::Length(18),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Fill(1),
            Constraint::Length(ACTION_LABEL.len() as u16 + 2),
        ];

        Table::new(self.classes.iter().map(Self::row), widths)
            .header(header)
            .column_spacing(1)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette;
    use ecoschoolia_core::Catalog;

    fn render() -> TestTerminal {
        let classes = Catalog::get().classes;
        let mut term = TestTerminal::with_size(96, class_overview_height(classes.len()));
        term.render_widget(ClassOverview::new(classes, IconSet::default()), term.area());
        term
    }

    #[test]
    fn test_headers_and_rows() {
        let term = render();
        for header in HEADERS {
            assert!(term.line_contains(1, header), "missing header {header}");
        }
        assert!(term.line_contains(3, "Grade 6 Sapphire"));
        assert!(term.line_contains(4, "Grade 4 Emerald"));
        assert!(term.line_contains(5, "Grade 8 Topaz"));
        assert_eq!(term.count("[View details]"), 3);
    }

    #[test]
    fn test_engagement_colored_by_tone() {
        let term = render();
        let expect = [
            ("High", palette::TONE_SUCCESS),
            ("Medium", palette::TONE_CAUTION),
            ("Low", palette::TONE_WARNING),
        ];
        for (label, color) in expect {
            let (x, y) = *term
                .find_all(label)
                .iter()
                .find(|(_, y)| *y >= 3)
                .expect(label);
            assert_eq!(term.style_at(x, y).fg, Some(color), "{label}");
        }
    }
}
