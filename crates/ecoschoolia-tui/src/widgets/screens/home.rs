//! Learner home: hero card, quick actions and AI recommendations

use ecoschoolia_core::{Catalog, RecommendedItem, TabSet};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, palette, styles};
use crate::widgets::{Button, ButtonVariant, Card};

const HERO_HEIGHT: u16 = 7;
/// Two rows of bordered tiles
const QUICK_ACTION_HEIGHT: u16 = 6;
const RECOMMENDED_HEIGHT: u16 = 6;

/// Difficulty indicator: one filled dot per level, hollow for the rest
pub fn difficulty_dots(level: u8) -> String {
    let level = level.min(RecommendedItem::MAX_DIFFICULTY);
    (1..=RecommendedItem::MAX_DIFFICULTY)
        .map(|i| if i <= level { '●' } else { '○' })
        .collect()
}

pub struct LearnerHome<'a> {
    catalog: &'a Catalog,
    tabs: TabSet,
    icons: IconSet,
}

impl<'a> LearnerHome<'a> {
    pub fn new(catalog: &'a Catalog, tabs: TabSet, icons: IconSet) -> Self {
        Self {
            catalog,
            tabs,
            icons,
        }
    }

    fn render_hero(&self, area: Rect, buf: &mut Buffer) {
        let learner = &self.catalog.learner;
        let inner = Card::new().focused(true).render_frame(area, buf);
        let hero = Style::default().bg(palette::CARD_BG);

        let streak = format!("{} Streak: {}", self.icons.clock(), learner.streak);
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", self.icons.sparkles()), styles::accent()),
                Span::styled(format!("Hello, {} 👋", learner.name), styles::text_secondary()),
            ]),
            Line::from(vec![Span::styled(
                format!("{} • {}", learner.grade, learner.level),
                styles::title(),
            )]),
            Line::from(Span::styled("Today's focus", styles::text_muted())),
            Line::from(vec![
                Span::raw("📚 "),
                Span::styled(
                    learner.today_focus,
                    styles::text_primary().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Button::new("Continue Learning")
                    .icon(self.icons.play())
                    .span(),
                Span::raw("  "),
                Button::new("AI Suggestions")
                    .icon(self.icons.sparkles())
                    .variant(ButtonVariant::Soft)
                    .span(),
            ]),
        ];
        Paragraph::new(lines).style(hero).render(inner, buf);

        // Streak pill on the grade row, right-aligned
        if inner.height >= 2 {
            Line::from(Span::styled(streak, styles::pill()))
                .right_aligned()
                .render(
                    Rect {
                        y: inner.y + 1,
                        height: 1,
                        ..inner
                    },
                    buf,
                );
        }
    }

    fn render_quick_actions(&self, area: Rect, buf: &mut Buffer) {
        let actions: Vec<_> = self
            .catalog
            .quick_actions
            .iter()
            .filter(|action| self.tabs.contains(action.target))
            .collect();
        if actions.is_empty() {
            return;
        }

        let rows = Layout::vertical([Constraint::Length(3); 2]).split(area);
        let slots: Vec<Rect> = rows
            .iter()
            .flat_map(|row| Layout::horizontal([Constraint::Fill(1); 2]).split(*row).to_vec())
            .collect();

        for (action, slot) in actions.iter().zip(slots) {
            let block = styles::glass_block(false);
            let inner = block.inner(slot);
            block.render(slot, buf);
            Line::from(vec![
                Span::styled(self.icons.tab(action.target), styles::accent()),
                Span::raw(" "),
                Span::styled(action.label, styles::text_secondary()),
            ])
            .centered()
            .render(inner, buf);
        }
    }

    fn render_recommended(&self, area: Rect, buf: &mut Buffer) {
        let [heading, list] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        Line::from(vec![
            Span::styled(format!("{} ", self.icons.sparkles()), styles::accent()),
            Span::styled("Recommended by AI", styles::title()),
        ])
        .render(heading, buf);
        Line::from(Span::styled("Personalised for you", styles::text_muted()))
            .right_aligned()
            .render(heading, buf);

        let constraints = vec![Constraint::Length(RECOMMENDED_HEIGHT); self.catalog.recommended.len()];
        let rows = Layout::vertical(constraints).split(list);
        for (item, row) in self.catalog.recommended.iter().zip(rows.iter()) {
            RecommendedCard {
                item,
                icons: self.icons,
            }
            .render(*row, buf);
        }
    }
}

impl Widget for LearnerHome<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [hero, _, actions, _, recommended] = Layout::vertical([
            Constraint::Length(HERO_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(QUICK_ACTION_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        self.render_hero(hero, buf);
        self.render_quick_actions(actions, buf);
        self.render_recommended(recommended, buf);
    }
}

struct RecommendedCard<'a> {
    item: &'a RecommendedItem,
    icons: IconSet,
}

impl Widget for RecommendedCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let item = self.item;
        let inner = Card::new().render_frame(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [visual, text] =
            Layout::horizontal([Constraint::Length(5), Constraint::Min(0)]).areas(inner);

        // Left strip: subject glyph above the difficulty dots
        Paragraph::new(vec![
            Line::from(item.subject_glyph()),
            Line::from(Span::styled(
                difficulty_dots(item.difficulty_level()),
                Style::default().fg(palette::DIFFICULTY_ON),
            )),
        ])
        .render(visual, buf);

        let meta = Line::from(vec![
            Span::styled(format!(" {} ", item.subject), styles::pill()),
            Span::raw(" "),
            Span::styled(format!(" {} ", item.competency), styles::pill()),
            Span::raw(" "),
            Span::styled(
                format!("{} {}", self.icons.clock(), item.duration),
                styles::text_muted(),
            ),
        ]);

        let [desc, meta_row] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(text);
        Paragraph::new(vec![
            Line::from(Span::styled(item.title, styles::title())),
            Line::from(Span::styled(item.description, styles::text_muted())),
        ])
        .wrap(Wrap { trim: true })
        .render(desc, buf);
        meta.render(meta_row, buf);

        // Start button on the title row, right-aligned
        let start = Button::new("Start");
        let width = start.width().min(text.width);
        start.render(
            Rect {
                x: text.x + text.width - width,
                y: text.y,
                width,
                height: 1,
            },
            buf,
        );
    }
}
