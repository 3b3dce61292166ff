//! CBCflix: curriculum video hub with one row of video cards per section

use ecoschoolia_core::{Catalog, VideoCatalogEntry, VideoSection};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, styles};
use crate::widgets::text::{truncate, wrap_clamped};
use crate::widgets::Card;

const HEADER_HEIGHT: u16 = 7;
/// Border, poster row, two title rows, tag and duration
const VIDEO_CARD_HEIGHT: u16 = 7;
const VIDEOS_PER_ROW: usize = VideoSection::MAX_VIDEOS;

pub struct CbcFlixHub<'a> {
    catalog: &'a Catalog,
    icons: IconSet,
}

impl<'a> CbcFlixHub<'a> {
    pub fn new(catalog: &'a Catalog, icons: IconSet) -> Self {
        Self { catalog, icons }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let inner = Card::new().render_frame(area, buf);
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!("{} ", self.icons.film()), styles::accent()),
                Span::styled("CBCflix – Curriculum Video Hub", styles::accent()),
            ]),
            Line::from(Span::styled(
                "Watch lessons like your favourite shows",
                styles::title(),
            )),
            Line::from(Span::styled(
                "Rows of CBC-aligned videos. Tap a card to open the lesson player \
                 (later this will connect to real video content).",
                styles::text_muted(),
            )),
        ])
        .wrap(Wrap { trim: true })
        .render(inner, buf);
    }

    fn render_section(&self, section: &VideoSection, area: Rect, buf: &mut Buffer) {
        let [title, tagline, row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(VIDEO_CARD_HEIGHT),
        ])
        .areas(area);

        Line::from(Span::styled(section.title, styles::title())).render(title, buf);
        Line::from(Span::styled(section.tagline, styles::text_faint())).render(tagline, buf);

        debug_assert!(
            section.videos.len() <= VIDEOS_PER_ROW,
            "{} overflows its row",
            section.id
        );
        let slots = Layout::horizontal([Constraint::Fill(1); VIDEOS_PER_ROW])
            .spacing(1)
            .split(row);
        for (video, slot) in section.videos.iter().zip(slots.iter()) {
            VideoCard {
                video,
                section,
                icons: self.icons,
            }
            .render(*slot, buf);
        }
    }
}

impl Widget for CbcFlixHub<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let section_height = 2 + VIDEO_CARD_HEIGHT;
        let mut constraints = vec![Constraint::Length(HEADER_HEIGHT)];
        for _ in self.catalog.video_sections {
            constraints.push(Constraint::Length(1));
            constraints.push(Constraint::Length(section_height));
        }
        let areas = Layout::vertical(constraints).split(area);

        self.render_header(areas[0], buf);
        for (i, section) in self.catalog.video_sections.iter().enumerate() {
            self.render_section(section, areas[2 + i * 2], buf);
        }
    }
}

/// Poster row (grade band, play glyph, subject) above title, tag and duration
struct VideoCard<'a> {
    video: &'a VideoCatalogEntry,
    section: &'a VideoSection,
    icons: IconSet,
}

impl Widget for VideoCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let width = inner.width as usize;
        let poster = styles::poster(self.section.color);
        buf.set_style(Rect { height: 1, ..inner }, poster);
        Line::from(vec![
            Span::styled(format!(" {} ", self.video.grade_band), styles::pill()),
            Span::raw(" "),
            Span::raw(truncate(self.video.subject, width.saturating_sub(10))),
        ])
        .render(Rect { height: 1, ..inner }, buf);
        Line::from(Span::styled(self.icons.play(), styles::accent()))
            .right_aligned()
            .render(Rect { height: 1, ..inner }, buf);

        let details = Rect {
            y: inner.y + 1,
            height: inner.height.saturating_sub(1),
            ..inner
        };
        let mut lines: Vec<Line> = wrap_clamped(self.video.title, width, 2)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, styles::title())))
            .collect();
        lines.push(Line::from(Span::styled(
            truncate(self.video.tag, width),
            styles::text_muted(),
        )));
        lines.push(Line::from(Span::styled(
            format!("{} {}", self.icons.clock(), self.video.duration),
            styles::text_faint(),
        )));
        Paragraph::new(lines).render(details, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render() -> TestTerminal {
        let mut term = TestTerminal::with_size(56, 40);
        term.render_widget(
            CbcFlixHub::new(Catalog::get(), IconSet::default()),
            term.area(),
        );
        term
    }

    #[test]
    fn test_header_card() {
        let term = render();
        assert!(term.buffer_contains("CBCflix – Curriculum Video Hub"));
        assert!(term.buffer_contains("Watch lessons like your favourite shows"));
    }

    #[test]
    fn test_sections_in_stored_order() {
        let term = render();
        let content = term.content();
        let positions: Vec<usize> = Catalog::get()
            .video_sections
            .iter()
            .map(|s| content.find(s.title).expect(s.title))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_video_cards_show_grade_band_and_duration() {
        let term = render();
        assert!(term.buffer_contains("G5–G7"));
        assert!(term.buffer_contains("12 min"));
        assert!(term.buffer_contains("Online Safety"));
        // One play glyph per video: 3 + 2 + 2
        assert_eq!(term.count("▶"), 7);
    }
}
