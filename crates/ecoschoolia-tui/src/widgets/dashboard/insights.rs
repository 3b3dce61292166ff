//! AI insights and alerts cards

use ecoschoolia_core::{Alert, Insight};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, palette, styles};
use crate::widgets::Card;

pub struct InsightsCard<'a> {
    insights: &'a [Insight],
    icons: IconSet,
}

impl<'a> InsightsCard<'a> {
    pub fn new(insights: &'a [Insight], icons: IconSet) -> Self {
        Self { insights, icons }
    }
}

impl Widget for InsightsCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![
            Span::styled(format!(" {} ", self.icons.chart()), styles::accent()),
            Span::raw("AI Insights – This Week "),
        ]);
        let inner = Card::new()
            .title(title)
            .caption("3D Virtual School & CBCflix")
            .render_frame(area, buf);

        let mut lines = Vec::new();
        for (i, insight) in self.insights.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                insight.grade,
                styles::accent().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(insight.issue, styles::text_primary())));
            lines.push(Line::from(Span::styled(insight.suggestion, styles::text_muted())));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

pub struct AlertsCard<'a> {
    alerts: &'a [Alert],
    icons: IconSet,
}

impl<'a> AlertsCard<'a> {
    pub fn new(alerts: &'a [Alert], icons: IconSet) -> Self {
        Self { alerts, icons }
    }
}

impl Widget for AlertsCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![
            Span::styled(
                format!(" {} ", self.icons.alert()),
                ratatui::style::Style::default().fg(palette::TONE_CAUTION),
            ),
            Span::raw("Alerts "),
        ]);
        let inner = Card::new()
            .title(title)
            .caption("Early warning flags")
            .render_frame(area, buf);

        let mut lines = Vec::new();
        for (i, alert) in self.alerts.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(alert.name, styles::title())));
            lines.push(Line::from(Span::styled(alert.detail, styles::text_muted())));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ecoschoolia_core::Catalog;

    #[test]
    fn test_insights_in_stored_order() {
        let mut term = TestTerminal::with_size(70, 16);
        term.render_widget(
            InsightsCard::new(Catalog::get().insights, IconSet::default()),
            term.area(),
        );

        assert!(term.line_contains(0, "AI Insights – This Week"));
        assert!(term.line_contains(0, "3D Virtual School & CBCflix"));

        let content = term.content();
        let positions: Vec<usize> = ["Grade 6", "Grade 4", "Grade 8"]
            .iter()
            .map(|g| content.find(g).expect(g))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_alerts() {
        let mut term = TestTerminal::with_size(40, 16);
        term.render_widget(
            AlertsCard::new(Catalog::get().alerts, IconSet::default()),
            term.area(),
        );

        assert!(term.line_contains(0, "Alerts"));
        for alert in Catalog::get().alerts {
            assert!(term.buffer_contains(alert.name));
        }
    }
}
