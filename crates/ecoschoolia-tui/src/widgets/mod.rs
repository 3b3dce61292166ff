//! Widget components for the TUI

mod bottom_nav;
mod card;
pub mod dashboard;
mod header;
mod key_hints;
pub mod progress;
pub mod screens;
mod sidebar;
pub mod text;

pub use bottom_nav::BottomNav;
pub use card::{Button, ButtonVariant, Card};
pub use dashboard::TeacherDashboard;
pub use header::{TopBar, BRAND, REGION_PILL, TAGLINE};
pub use key_hints::KeyHints;
pub use progress::ProgressBar;
pub use sidebar::Sidebar;
