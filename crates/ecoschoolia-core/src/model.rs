//! Display-only records shown by the learner screens and the teacher dashboard.
//!
//! Every record is an immutable value with `'static` text. Nothing here has
//! identity beyond its key field and nothing is ever mutated.

use serde::Serialize;

use crate::selection::Tab;

/// Semantic color bucket for enum-driven styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Needs attention (rose)
    Warning,
    /// In between (amber)
    Caution,
    /// Good (emerald)
    Success,
}

// ─────────────────────────────────────────────────────────────────
// Learner
// ─────────────────────────────────────────────────────────────────

/// The signed-in learner shown on the hero card and profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LearnerProfile {
    pub name: &'static str,
    pub grade: &'static str,
    pub level: &'static str,
    pub today_focus: &'static str,
    pub streak: &'static str,
}

impl LearnerProfile {
    /// Avatar initial (first character of the name)
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

/// Inert shortcut button on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    /// Tab the shortcut points at; also used to hide it when that tab is disabled
    pub target: Tab,
}

/// AI-recommended activity on the home feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendedItem {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub subject: &'static str,
    pub competency: &'static str,
    /// 1..=3, drives the difficulty dots
    pub difficulty: u8,
    pub duration: &'static str,
}

impl RecommendedItem {
    pub const MAX_DIFFICULTY: u8 = 3;

    /// Difficulty clamped into the displayable 0..=3 range
    pub fn difficulty_level(&self) -> u8 {
        self.difficulty.min(Self::MAX_DIFFICULTY)
    }

    /// Glyph shown in the left strip of the card
    pub fn subject_glyph(&self) -> &'static str {
        match self.subject {
            "Math" => "➗",
            "Science" => "🔬",
            "Life Skills" => "🧠",
            _ => "📘",
        }
    }
}

/// One episode in a video row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VideoCatalogEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub grade_band: &'static str,
    pub duration: &'static str,
    pub subject: &'static str,
    pub tag: &'static str,
}

/// Poster color family for a video row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionColor {
    Emerald,
    Fuchsia,
    Amber,
}

/// A titled row of videos in the curriculum video hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VideoSection {
    pub id: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub color: SectionColor,
    pub videos: &'static [VideoCatalogEntry],
}

impl VideoSection {
    /// Videos shown side by side in one row
    pub const MAX_VIDEOS: usize = 3;
}

/// A 3D classroom the learner can enter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VirtualWorld {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub competencies: &'static [&'static str],
    pub icon: &'static str,
}

/// Assignment progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssignmentStatus {
    #[serde(rename = "Not started")]
    NotStarted,
    #[serde(rename = "In progress")]
    InProgress,
    #[serde(rename = "Submitted")]
    Submitted,
}

impl AssignmentStatus {
    /// Badge text, verbatim
    pub fn label(&self) -> &'static str {
        match self {
            AssignmentStatus::NotStarted => "Not started",
            AssignmentStatus::InProgress => "In progress",
            AssignmentStatus::Submitted => "Submitted",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            AssignmentStatus::NotStarted => Tone::Warning,
            AssignmentStatus::InProgress => Tone::Caution,
            AssignmentStatus::Submitted => Tone::Success,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub id: u32,
    pub title: &'static str,
    pub due_in: &'static str,
    pub status: AssignmentStatus,
}

/// CBC competency score on the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompetencyScore {
    pub name: &'static str,
    pub level: &'static str,
    /// 0..=100
    pub value: u8,
}

impl CompetencyScore {
    /// Score clamped to a percentage
    pub fn percent(&self) -> u8 {
        self.value.min(100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub name: &'static str,
    pub category: &'static str,
}

// ─────────────────────────────────────────────────────────────────
// Teacher dashboard
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatTone {
    Teal,
    Amber,
    Sky,
}

/// Headline number card at the top of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStat {
    pub label: &'static str,
    pub value: &'static str,
    pub badge: &'static str,
    pub tone: StatTone,
}

impl DashboardStat {
    /// Decorative trend bar fill, fixed for every card
    pub const TREND_PERCENT: u8 = 75;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub grade: &'static str,
    pub issue: &'static str,
    pub suggestion: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub name: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Engagement {
    High,
    Medium,
    Low,
}

impl Engagement {
    pub fn label(&self) -> &'static str {
        match self {
            Engagement::High => "High",
            Engagement::Medium => "Medium",
            Engagement::Low => "Low",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Engagement::High => Tone::Success,
            Engagement::Low => Tone::Warning,
            Engagement::Medium => Tone::Caution,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassRow {
    pub name: &'static str,
    pub learners: u32,
    pub attendance: &'static str,
    pub engagement: Engagement,
    pub weak: &'static str,
}

/// Teacher sidebar entry; the dashboard entry is the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub current: bool,
}
