//! 3D Virtual School hub: world picker

use ecoschoolia_core::{Catalog, VirtualWorld};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, styles};
use crate::widgets::{Button, Card};

const HEADER_HEIGHT: u16 = 10;
const WORLD_CARD_HEIGHT: u16 = 5;

pub struct VirtualSchoolHub<'a> {
    catalog: &'a Catalog,
    icons: IconSet,
}

impl<'a> VirtualSchoolHub<'a> {
    pub fn new(catalog: &'a Catalog, icons: IconSet) -> Self {
        Self { catalog, icons }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let inner = Card::new().render_frame(area, buf);
        let [intro, button, note] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        Paragraph::new(vec![
            Line::from(Span::styled("3D Virtual School", styles::accent())),
            Line::from(vec![
                Span::styled("Choose your world ", styles::title()),
                Span::styled(self.icons.globe(), styles::accent()),
            ]),
            Line::from(Span::styled(
                "Each world is a 3D classroom with missions, quests & mini-games \
                 aligned with CBC competencies.",
                styles::text_muted(),
            )),
        ])
        .wrap(Wrap { trim: true })
        .render(intro, buf);

        Line::from(
            Button::new("Let AI pick a mission for me")
                .icon(self.icons.sparkles())
                .span(),
        )
        .centered()
        .render(button, buf);

        Paragraph::new(Line::from(Span::styled(
            "NURU AI Mentor will choose based on your recent progress.",
            styles::text_faint(),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(note, buf);
    }
}

impl Widget for VirtualSchoolHub<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut constraints = vec![Constraint::Length(HEADER_HEIGHT), Constraint::Length(1)];
        constraints.extend(self.catalog.worlds.iter().map(|_| Constraint::Length(WORLD_CARD_HEIGHT)));
        let areas = Layout::vertical(constraints).split(area);

        self.render_header(areas[0], buf);
        for (world, slot) in self.catalog.worlds.iter().zip(areas.iter().skip(2)) {
            WorldCard {
                world,
                icons: self.icons,
            }
            .render(*slot, buf);
        }
    }
}

struct WorldCard<'a> {
    world: &'a VirtualWorld,
    icons: IconSet,
}

impl Widget for WorldCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = Card::new().render_frame(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let [icon, text, chevron] = Layout::horizontal([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        Line::from(self.world.icon).render(
            Rect {
                y: icon.y + icon.height / 2,
                height: 1,
                ..icon
            },
            buf,
        );

        let mut chips = Vec::new();
        for competency in self.world.competencies {
            chips.push(Span::styled(format!(" {competency} "), styles::pill()));
            chips.push(Span::raw(" "));
        }
        Paragraph::new(vec![
            Line::from(Span::styled(self.world.name, styles::title())),
            Line::from(Span::styled(self.world.description, styles::text_muted())),
            Line::from(chips),
        ])
        .render(text, buf);

        Line::from(Span::styled(self.icons.chevron_right(), styles::text_faint()))
            .right_aligned()
            .render(
                Rect {
                    y: chevron.y + chevron.height / 2,
                    height: 1,
                    ..chevron
                },
                buf,
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render() -> TestTerminal {
        let mut term = TestTerminal::with_size(56, 40);
        term.render_widget(
            VirtualSchoolHub::new(Catalog::get(), IconSet::default()),
            term.area(),
        );
        term
    }

    #[test]
    fn test_header_card() {
        let term = render();
        assert!(term.buffer_contains("Choose your world"));
        assert!(term.buffer_contains("Let AI pick a mission for me"));
    }

    #[test]
    fn test_worlds_in_stored_order() {
        let term = render();
        let content = term.content();
        let positions: Vec<usize> = Catalog::get()
            .worlds
            .iter()
            .map(|w| content.find(w.name).expect(w.name))
            .collect();
        assert_eq!(positions.len(), 4);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_world_competency_chips() {
        let term = render();
        assert!(term.buffer_contains("Critical Thinking"));
        assert!(term.buffer_contains("Self-Efficacy"));
    }
}
