//! Teacher dashboard: sidebar plus stat cards, insights, alerts and the
//! class overview table

mod classes;
mod insights;
mod stats;

pub use classes::{class_overview_height, ClassOverview};
pub use insights::{AlertsCard, InsightsCard};
pub use stats::{StatCard, STAT_CARD_HEIGHT};

use ecoschoolia_core::Catalog;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

use crate::layout;
use crate::theme::icons::IconSet;
use crate::widgets::Sidebar;

pub struct TeacherDashboard<'a> {
    catalog: &'a Catalog,
    icons: IconSet,
}

impl<'a> TeacherDashboard<'a> {
    pub fn new(catalog: &'a Catalog, icons: IconSet) -> Self {
        Self { catalog, icons }
    }
}

impl Widget for TeacherDashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas = layout::teacher(area);
        Sidebar::new(self.catalog.sidebar, self.icons).render(areas.sidebar, buf);

        let [stats, middle, table] = Layout::vertical([
            Constraint::Length(STAT_CARD_HEIGHT),
            Constraint::Min(6),
            Constraint::Length(class_overview_height(self.catalog.classes.len())),
        ])
        .spacing(1)
        .areas(areas.main);

        let stat_areas = Layout::horizontal(
            self.catalog
                .stats
                .iter()
                .map(|_| Constraint::Fill(1)),
        )
        .spacing(1)
        .split(stats);
        for (stat, area) in self.catalog.stats.iter().zip(stat_areas.iter()) {
            StatCard::new(stat).render(*area, buf);
        }

        let [insights, alerts] =
            Layout::horizontal([Constraint::Fill(2), Constraint::Fill(1)])
                .spacing(1)
                .areas(middle);
        InsightsCard::new(self.catalog.insights, self.icons).render(insights, buf);
        AlertsCard::new(self.catalog.alerts, self.icons).render(alerts, buf);

        ClassOverview::new(self.catalog.classes, self.icons).render(table, buf);
    }
}
