//! Main render/view function (View in TEA pattern)


use ecoschoolia_app::state::{AppState, Shell};
use ecoschoolia_core::{Catalog, Tab, TabSet};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Widget};
use ratatui::Frame;

use crate::layout;
use crate::theme::{icons::IconSet, palette, styles};
use crate::widgets::{self, screens};

/// Render the complete UI (View function in TEA)
///
/// Pure: reads the state, never changes it. Exactly one shell is drawn.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);
    let catalog = Catalog::get();
    let tabs = state.tab_set();

    frame.render_widget(widgets::TopBar::new(state.view_mode(), icons), areas.header);

    match state.shell {
        Shell::Learner(learner) => {
            frame.render_widget(
                LearnerShell {
                    catalog,
                    tabs,
                    active: learner.active_tab,
                    icons,
                },
                areas.body,
            );
        }
        Shell::Teacher => {
            frame.render_widget(widgets::TeacherDashboard::new(catalog, icons), areas.body);
        }
    }

    frame.render_widget(widgets::KeyHints::new(state.view_mode(), tabs), areas.footer);
}

/// Phone-width frame holding the status row, the active screen and the
/// bottom navigation
struct LearnerShell<'a> {
    catalog: &'a Catalog,
    tabs: TabSet,
    active: Tab,
    icons: IconSet,
}

impl LearnerShell<'_> {
    fn status_line(&self) -> (Line<'static>, Line<'static>) {
        let brand = Line::from(vec![
            Span::styled(format!(" {} ", self.icons.dot()), styles::accent()),
            Span::styled(widgets::BRAND, styles::title()),
        ]);
        let features = if self.tabs.contains(Tab::CbcFlix) {
            "AI • 3D School • CBCflix "
        } else {
            "AI • 3D School "
        };
        let features = Line::from(Span::styled(features, styles::text_muted())).right_aligned();
        (brand, features)
    }
}

impl Widget for LearnerShell<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let phone = layout::phone_frame(area);
        let block = styles::glass_block(true);
        let inner = block.inner(phone);
        block.render(phone, buf);

        let areas = layout::learner(inner);
        let (brand, features) = self.status_line();
        brand.render(areas.status, buf);
        features.render(areas.status, buf);

        let content = areas.content;
        match self.active {
            Tab::Home => {
                screens::LearnerHome::new(self.catalog, self.tabs, self.icons).render(content, buf)
            }
            Tab::CbcFlix => screens::CbcFlixHub::new(self.catalog, self.icons).render(content, buf),
            Tab::Cyberverse => {
                screens::VirtualSchoolHub::new(self.catalog, self.icons).render(content, buf)
            }
            Tab::Assignments => {
                screens::AssignmentsScreen::new(self.catalog, self.icons).render(content, buf)
            }
            Tab::Profile => screens::ProfileScreen::new(self.catalog, self.icons).render(content, buf),
        }

        widgets::BottomNav::new(self.tabs, self.active, self.icons).render(areas.nav, buf);
    }
}
