//! Learner profile: identity card, competency bars and badges

use ecoschoolia_core::{Catalog, CompetencyScore};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, palette, styles};
use crate::widgets::{Card, ProgressBar};

const PROFILE_CARD_HEIGHT: u16 = 6;
const COMPETENCY_HEIGHT: u16 = 2;

pub struct ProfileScreen<'a> {
    catalog: &'a Catalog,
    icons: IconSet,
}

impl<'a> ProfileScreen<'a> {
    pub fn new(catalog: &'a Catalog, icons: IconSet) -> Self {
        Self { catalog, icons }
    }

    fn render_identity(&self, area: Rect, buf: &mut Buffer) {
        let learner = &self.catalog.learner;
        let inner = Card::new().render_frame(area, buf);
        if inner.height == 0 {
            return;
        }

        // Banner strip
        buf.set_style(
            Rect { height: 1, ..inner },
            Style::default().bg(palette::ACCENT_STRONG),
        );

        let [avatar, details] =
            Layout::horizontal([Constraint::Length(6), Constraint::Min(0)]).areas(Rect {
                y: inner.y + 1,
                height: inner.height.saturating_sub(1),
                ..inner
            });

        let initial = learner.initial().map(String::from).unwrap_or_default();
        Line::from(Span::styled(
            format!("({initial})"),
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ))
        .render(
            Rect {
                y: avatar.y + avatar.height / 2,
                height: 1,
                ..avatar
            },
            buf,
        );

        Paragraph::new(vec![
            Line::from(Span::styled(learner.name, styles::title())),
            Line::from(Span::styled(learner.grade, styles::text_secondary())),
            Line::from(Span::styled(
                format!("{} Level: {}", self.icons.star(), learner.level),
                styles::accent(),
            )),
        ])
        .render(details, buf);
    }

    fn render_competencies(&self, area: Rect, buf: &mut Buffer) {
        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(
            self.catalog
                .competencies
                .iter()
                .map(|_| Constraint::Length(COMPETENCY_HEIGHT)),
        );
        let areas = Layout::vertical(constraints).split(area);

        Line::from(vec![
            Span::styled(format!("{} ", self.icons.chart()), styles::accent()),
            Span::styled("CBC Competencies", styles::title()),
        ])
        .render(areas[0], buf);

        for (score, slot) in self.catalog.competencies.iter().zip(areas.iter().skip(1)) {
            CompetencyRow { score }.render(*slot, buf);
        }
    }

    fn render_badges(&self, area: Rect, buf: &mut Buffer) {
        let mut chips = Vec::new();
        for badge in self.catalog.badges {
            chips.push(Span::styled(
                format!(" {} ", self.icons.star()),
                Style::default().fg(palette::TROPHY).bg(palette::SURFACE),
            ));
            chips.push(Span::styled(format!("{} ", badge.name), styles::pill()));
            chips.push(Span::raw(" "));
        }

        Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Badges & Achievements ", styles::title()),
                Span::styled(self.icons.trophy(), Style::default().fg(palette::TROPHY)),
            ]),
            Line::from(chips),
        ])
        .wrap(Wrap { trim: false })
        .render(area, buf);
    }
}

impl Widget for ProfileScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let competencies_height =
            1 + COMPETENCY_HEIGHT * self.catalog.competencies.len() as u16;
        let [identity, _, competencies, _, badges] = Layout::vertical([
            Constraint::Length(PROFILE_CARD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(competencies_height),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        self.render_identity(identity, buf);
        self.render_competencies(competencies, buf);
        self.render_badges(badges, buf);
    }
}

/// Name and level on one row, percentage bar below
struct CompetencyRow<'a> {
    score: &'a CompetencyScore,
}

impl Widget for CompetencyRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let label_row = Rect { height: 1, ..area };
        Line::from(Span::styled(self.score.name, styles::text_secondary())).render(label_row, buf);
        Line::from(Span::styled(self.score.level, styles::text_muted()))
            .right_aligned()
            .render(label_row, buf);

        if area.height >= 2 {
            ProgressBar::new(self.score.percent()).render(
                Rect {
                    y: area.y + 1,
                    height: 1,
                    ..area
                },
                buf,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::widgets::progress::bar_cells;

    const WIDTH: u16 = 56;

    fn render() -> TestTerminal {
        let mut term = TestTerminal::with_size(WIDTH, 24);
        term.render_widget(
            ProfileScreen::new(Catalog::get(), IconSet::default()),
            term.area(),
        );
        term
    }

    #[test]
    fn test_identity_card() {
        let term = render();
        assert!(term.buffer_contains("(A)"));
        assert!(term.buffer_contains("Amani"));
        assert!(term.buffer_contains("Grade 7"));
        assert!(term.buffer_contains("Level: Explorer"));
    }

    #[test]
    fn test_competency_bars_match_values() {
        let term = render();
        for score in Catalog::get().competencies {
            let (_, y) = term.find_all(score.name)[0];
            let filled = (0..WIDTH)
                .filter(|x| term.cell_at(*x, y + 1) == Some("█"))
                .count() as u16;
            assert_eq!(filled, bar_cells(score.value, WIDTH), "{}", score.name);
        }
    }

    #[test]
    fn test_badges() {
        let term = render();
        assert!(term.buffer_contains("Badges & Achievements"));
        for badge in Catalog::get().badges {
            assert!(term.buffer_contains(badge.name));
        }
    }
}
