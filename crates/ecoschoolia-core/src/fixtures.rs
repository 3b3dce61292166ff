//! Hardcoded catalog standing in for a future real data source.
//!
//! All tables are process-scoped constants. Order is display order.

use serde::Serialize;

use crate::model::*;
use crate::selection::Tab;

/// Every fixture table the screens draw from
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Catalog {
    pub learner: LearnerProfile,
    pub quick_actions: &'static [QuickAction],
    pub recommended: &'static [RecommendedItem],
    pub video_sections: &'static [VideoSection],
    pub worlds: &'static [VirtualWorld],
    pub assignments: &'static [Assignment],
    pub competencies: &'static [CompetencyScore],
    pub badges: &'static [Badge],
    pub sidebar: &'static [NavItem],
    pub stats: &'static [DashboardStat],
    pub insights: &'static [Insight],
    pub alerts: &'static [Alert],
    pub classes: &'static [ClassRow],
}

impl Catalog {
    /// The process-wide catalog
    pub fn get() -> &'static Catalog {
        &CATALOG
    }
}

static CATALOG: Catalog = Catalog {
    learner: LEARNER,
    quick_actions: QUICK_ACTIONS,
    recommended: RECOMMENDED,
    video_sections: VIDEO_SECTIONS,
    worlds: WORLDS,
    assignments: ASSIGNMENTS,
    competencies: COMPETENCIES,
    badges: BADGES,
    sidebar: SIDEBAR,
    stats: STATS,
    insights: INSIGHTS,
    alerts: ALERTS,
    classes: CLASSES,
};

pub const LEARNER: LearnerProfile = LearnerProfile {
    name: "Amani",
    grade: "Grade 7",
    level: "Explorer",
    today_focus: "Digital Literacy & Fractions",
    streak: "5 days",
};

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        label: "3D Virtual School",
        target: Tab::Cyberverse,
    },
    QuickAction {
        label: "CBCflix",
        target: Tab::CbcFlix,
    },
    QuickAction {
        label: "Assignments",
        target: Tab::Assignments,
    },
    QuickAction {
        label: "Profile",
        target: Tab::Profile,
    },
];

pub const RECOMMENDED: &[RecommendedItem] = &[
    RecommendedItem {
        id: 1,
        title: "Math – Fractions Mission",
        description: "Practice adding and subtracting fractions using a mini-quest.",
        subject: "Math",
        competency: "Critical Thinking",
        difficulty: 2,
        duration: "20 min",
    },
    RecommendedItem {
        id: 2,
        title: "Science – Water Cycle Video",
        description: "Watch and answer quick questions about evaporation & rain.",
        subject: "Science",
        competency: "Learning to Learn",
        difficulty: 1,
        duration: "15 min",
    },
    RecommendedItem {
        id: 3,
        title: "Weekend Project – Build a Budget",
        description: "Plan a simple shopping list with a fixed amount of money.",
        subject: "Life Skills",
        competency: "Financial Literacy",
        difficulty: 3,
        duration: "30–40 min",
    },
];

pub const VIDEO_SECTIONS: &[VideoSection] = &[
    VideoSection {
        id: "math",
        title: "Math & STEM",
        tagline: "Short episodes that make numbers feel easy.",
        color: SectionColor::Emerald,
        videos: &[
            VideoCatalogEntry {
                id: "fractions-quest",
                title: "Fractions Quest – Episode 1",
                grade_band: "G5–G7",
                duration: "12 min",
                subject: "Math",
                tag: "Fractions",
            },
            VideoCatalogEntry {
                id: "algebra-codes",
                title: "Algebra Codes – Intro",
                grade_band: "G7–G8",
                duration: "10 min",
                subject: "Math",
                tag: "Patterns",
            },
            VideoCatalogEntry {
                id: "science-lab",
                title: "Science Lab: Forces",
                grade_band: "G6–G8",
                duration: "14 min",
                subject: "Science",
                tag: "Forces",
            },
        ],
    },
    VideoSection {
        id: "literacy",
        title: "Language & Stories",
        tagline: "Animated stories, comprehension & composition tips.",
        color: SectionColor::Fuchsia,
        videos: &[
            VideoCatalogEntry {
                id: "story-africa",
                title: "StoryTime: The Market Day",
                grade_band: "G4–G6",
                duration: "9 min",
                subject: "English",
                tag: "Reading",
            },
            VideoCatalogEntry {
                id: "writing-hooks",
                title: "How to Start a Great Composition",
                grade_band: "G6–G8",
                duration: "8 min",
                subject: "English",
                tag: "Writing",
            },
        ],
    },
    VideoSection {
        id: "life-skills",
        title: "Life Skills & Digital Safety",
        tagline: "CBC life skills, cyber safety & money skills.",
        color: SectionColor::Amber,
        videos: &[
            VideoCatalogEntry {
                id: "cyber-safe",
                title: "Cyber-Safe Kid – Passwords",
                grade_band: "G5–G8",
                duration: "11 min",
                subject: "Digital Literacy",
                tag: "Online Safety",
            },
            VideoCatalogEntry {
                id: "money-moves",
                title: "Money Moves: Saving with a Goal",
                grade_band: "G6–G8",
                duration: "13 min",
                subject: "Life Skills",
                tag: "Financial Literacy",
            },
        ],
    },
];

pub const WORLDS: &[VirtualWorld] = &[
    VirtualWorld {
        id: 1,
        name: "STEM Lab",
        description: "Robots, circuits, experiments & problem-solving.",
        competencies: &["Critical Thinking", "Digital Literacy"],
        icon: "🤖",
    },
    VirtualWorld {
        id: 2,
        name: "Story Realm",
        description: "Reading, writing, drama & creativity.",
        competencies: &["Communication", "Creativity"],
        icon: "📖",
    },
    VirtualWorld {
        id: 3,
        name: "Eco Planet",
        description: "Environment, climate action & responsibility.",
        competencies: &["Citizenship", "Collaboration"],
        icon: "🌍",
    },
    VirtualWorld {
        id: 4,
        name: "Money City",
        description: "Budgeting, saving & real-life maths.",
        competencies: &["Financial Literacy", "Self-Efficacy"],
        icon: "💰",
    },
];

pub const ASSIGNMENTS: &[Assignment] = &[
    Assignment {
        id: 1,
        title: "English – Short Story Reflection",
        due_in: "2 days",
        status: AssignmentStatus::InProgress,
    },
    Assignment {
        id: 2,
        title: "Science – Water Cycle Quiz",
        due_in: "Today",
        status: AssignmentStatus::NotStarted,
    },
    Assignment {
        id: 3,
        title: "Math – Fractions Practice",
        due_in: "5 days",
        status: AssignmentStatus::Submitted,
    },
];

pub const COMPETENCIES: &[CompetencyScore] = &[
    CompetencyScore {
        name: "Digital Literacy",
        level: "Strong",
        value: 80,
    },
    CompetencyScore {
        name: "Communication",
        level: "Improving",
        value: 65,
    },
    CompetencyScore {
        name: "Critical Thinking",
        level: "Needs practice",
        value: 50,
    },
];

pub const BADGES: &[Badge] = &[
    Badge {
        name: "Cyber-Safe Kid",
        category: "Safety",
    },
    Badge {
        name: "Math Ninja",
        category: "STEM",
    },
    Badge {
        name: "Creative Writer",
        category: "Language",
    },
];

pub const SIDEBAR: &[NavItem] = &[
    NavItem {
        label: "Dashboard",
        current: true,
    },
    NavItem {
        label: "Classes",
        current: false,
    },
    NavItem {
        label: "Learners",
        current: false,
    },
    NavItem {
        label: "Assignments",
        current: false,
    },
    NavItem {
        label: "Analytics & AI",
        current: false,
    },
    NavItem {
        label: "Communication",
        current: false,
    },
    NavItem {
        label: "Timetable",
        current: false,
    },
];

pub const STATS: &[DashboardStat] = &[
    DashboardStat {
        label: "Attendance today",
        value: "92%",
        badge: "Stable",
        tone: StatTone::Teal,
    },
    DashboardStat {
        label: "Average engagement",
        value: "High",
        badge: "↑ vs last week",
        tone: StatTone::Amber,
    },
    DashboardStat {
        label: "Assignments this week",
        value: "14",
        badge: "3 due today",
        tone: StatTone::Sky,
    },
];

pub const INSIGHTS: &[Insight] = &[
    Insight {
        grade: "Grade 6",
        issue: "Many learners struggle with Fractions.",
        suggestion: "Assign Fractions Mission in the 3D Virtual School & recommend CBCflix Fractions episodes.",
    },
    Insight {
        grade: "Grade 4",
        issue: "Strong in Reading, weaker in Composition.",
        suggestion: "Use Story Realm writing quests and CBCflix writing tips twice this week.",
    },
    Insight {
        grade: "Grade 8",
        issue: "Engagement drops after 10 min in Science videos.",
        suggestion: "Split long videos into shorter CBCflix clips and add quick quizzes.",
    },
];

pub const ALERTS: &[Alert] = &[
    Alert {
        name: "Aisha (G7)",
        detail: "Engagement low for 7 days; missing 3 assignments.",
    },
    Alert {
        name: "Brian (G5)",
        detail: "Attendance dropped below 80% this month.",
    },
    Alert {
        name: "Class 4 Emerald",
        detail: "Digital literacy tasks not attempted this week.",
    },
];

pub const CLASSES: &[ClassRow] = &[
    ClassRow {
        name: "Grade 6 Sapphire",
        learners: 32,
        attendance: "94%",
        engagement: Engagement::High,
        weak: "Fractions",
    },
    ClassRow {
        name: "Grade 4 Emerald",
        learners: 29,
        attendance: "90%",
        engagement: Engagement::Medium,
        weak: "Writing",
    },
    ClassRow {
        name: "Grade 8 Topaz",
        learners: 35,
        attendance: "88%",
        engagement: Engagement::Low,
        weak: "Science videos",
    },
];
