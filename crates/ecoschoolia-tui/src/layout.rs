//! Screen layout definitions for the TUI
//!
//! The frame is split into a header, a body holding the mounted shell and
//! a one-row key hint footer. The learner shell is drawn inside a centered
//! phone-width column; the teacher dashboard uses the full body width.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Header height: rounded border plus brand row and tagline row
pub const HEADER_HEIGHT: u16 = 4;

/// Width of the learner phone frame, borders included
pub const PHONE_WIDTH: u16 = 60;

/// Width of the teacher sidebar
pub const SIDEBAR_WIDTH: u16 = 24;

/// Height of the learner bottom navigation (separator + icon row + label row)
pub const BOTTOM_NAV_HEIGHT: u16 = 3;

/// Top-level areas
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    ScreenAreas {
        header,
        body,
        footer,
    }
}

/// Centered phone column inside `body`, never wider than the body
pub fn phone_frame(body: Rect) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(PHONE_WIDTH.min(body.width))])
        .flex(Flex::Center)
        .areas(body);
    column
}

/// Areas inside the phone frame's border
#[derive(Debug, Clone, Copy)]
pub struct LearnerAreas {
    pub status: Rect,
    pub content: Rect,
    pub nav: Rect,
}

pub fn learner(inner: Rect) -> LearnerAreas {
    let [status, content, nav] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(BOTTOM_NAV_HEIGHT),
    ])
    .areas(inner);

    LearnerAreas {
        status,
        // One column of breathing room on each side, one row under the status row
        content: Rect {
            x: content.x + 1u16.min(content.width),
            y: content.y + 1u16.min(content.height),
            width: content.width.saturating_sub(2),
            height: content.height.saturating_sub(1),
        },
        nav,
    }
}

/// Teacher dashboard areas
#[derive(Debug, Clone, Copy)]
pub struct TeacherAreas {
    pub sidebar: Rect,
    pub main: Rect,
}

pub fn teacher(body: Rect) -> TeacherAreas {
    let [sidebar, main] = Layout::horizontal([
        Constraint::Length(SIDEBAR_WIDTH.min(body.width / 3)),
        Constraint::Min(0),
    ])
    .spacing(1)
    .areas(body);

    TeacherAreas { sidebar, main }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 120, 50);
        let layout = create(area);

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.footer.y, 49);
        assert_eq!(
            layout.header.height + layout.body.height + layout.footer.height,
            area.height
        );
    }

    #[test]
    fn test_phone_frame_is_centered() {
        let body = Rect::new(0, 4, 120, 45);
        let phone = phone_frame(body);

        assert_eq!(phone.width, PHONE_WIDTH);
        assert_eq!(phone.x, (120 - PHONE_WIDTH) / 2);
        assert_eq!(phone.height, body.height);
    }

    #[test]
    fn test_phone_frame_narrow_terminal() {
        let body = Rect::new(0, 0, 40, 20);
        assert_eq!(phone_frame(body).width, 40);
    }

    #[test]
    fn test_learner_areas() {
        let inner = Rect::new(1, 1, 58, 40);
        let areas = learner(inner);

        assert_eq!(areas.status.height, 1);
        assert_eq!(areas.nav.height, BOTTOM_NAV_HEIGHT);
        assert_eq!(areas.nav.y + areas.nav.height, inner.y + inner.height);
        assert_eq!(areas.content.width, 56);
    }

    #[test]
    fn test_teacher_areas() {
        let body = Rect::new(0, 0, 120, 40);
        let areas = teacher(body);

        assert_eq!(areas.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(areas.main.x, SIDEBAR_WIDTH + 1);
        assert_eq!(areas.main.width, 120 - SIDEBAR_WIDTH - 1);
    }
}
