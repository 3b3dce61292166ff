//! Application state (Model in TEA pattern)
//!
//! Exactly two mutable cells exist: the view mode and the learner shell's
//! active tab. The tab lives inside the learner variant of [`Shell`], so the
//! learner shell's state is dropped whenever the teacher dashboard is shown
//! and starts over at [`Tab::Home`] when the learner app is shown again.

use ecoschoolia_core::prelude::*;
use ecoschoolia_core::{Tab, TabSet, ViewMode};

use crate::config::Settings;

/// Whether the event loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    #[default]
    Running,
    Quitting,
}

/// State owned by a mounted learner shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LearnerShellState {
    pub active_tab: Tab,
}

/// The mounted top-level container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Learner(LearnerShellState),
    Teacher,
}

impl Shell {
    pub fn mount(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Learner => Shell::Learner(LearnerShellState::default()),
            ViewMode::Teacher => Shell::Teacher,
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        match self {
            Shell::Learner(_) => ViewMode::Learner,
            Shell::Teacher => ViewMode::Teacher,
        }
    }
}

/// The single screen currently visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Learner(Tab),
    TeacherDashboard,
}

impl Screen {
    /// Stable name used by the headless interface and logs
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Learner(Tab::Home) => "learner_home",
            Screen::Learner(Tab::CbcFlix) => "cbcflix",
            Screen::Learner(Tab::Cyberverse) => "virtual_school_hub",
            Screen::Learner(Tab::Assignments) => "assignments",
            Screen::Learner(Tab::Profile) => "profile",
            Screen::TeacherDashboard => "teacher_dashboard",
        }
    }

    /// Label of the screen's most prominent button, if it has one.
    /// None of these buttons do anything.
    pub fn primary_action(&self) -> Option<&'static str> {
        match self {
            Screen::Learner(Tab::Home) => Some("Continue Learning"),
            Screen::Learner(Tab::CbcFlix) => Some("Play"),
            Screen::Learner(Tab::Cyberverse) => Some("Let AI pick a mission for me"),
            Screen::Learner(Tab::Assignments) => Some("Open"),
            Screen::Learner(Tab::Profile) => None,
            Screen::TeacherDashboard => Some("View details"),
        }
    }
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub shell: Shell,
    pub phase: RunPhase,
    tab_set: TabSet,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let tab_set = settings.tab_set();
        let shell = Shell::mount(settings.shell.initial_view);
        Self {
            settings,
            shell,
            phase: RunPhase::Running,
            tab_set,
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.shell.view_mode()
    }

    /// Active learner tab, `None` while the teacher dashboard is mounted
    pub fn active_tab(&self) -> Option<Tab> {
        match self.shell {
            Shell::Learner(learner) => Some(learner.active_tab),
            Shell::Teacher => None,
        }
    }

    pub fn tab_set(&self) -> TabSet {
        self.tab_set
    }

    pub fn screen(&self) -> Screen {
        match self.shell {
            Shell::Learner(learner) => Screen::Learner(learner.active_tab),
            Shell::Teacher => Screen::TeacherDashboard,
        }
    }

    /// Show a view. Re-selecting the current view changes nothing.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode() == mode {
            return;
        }
        debug!("View mode {} -> {}", self.view_mode(), mode);
        self.shell = Shell::mount(mode);
    }

    /// Whether `tab` could be selected right now
    pub fn check_tab_selection(&self, tab: Tab) -> Result<()> {
        if !self.tab_set.contains(tab) {
            return Err(Error::tab_disabled(tab.id()));
        }
        match self.shell {
            Shell::Learner(_) => Ok(()),
            Shell::Teacher => Err(Error::learner_shell_hidden(tab.id())),
        }
    }

    /// Select a learner tab.
    ///
    /// Fails when the teacher dashboard is mounted or the tab is disabled;
    /// state is unchanged in both cases.
    pub fn select_tab(&mut self, tab: Tab) -> Result<()> {
        self.check_tab_selection(tab)?;
        if let Shell::Learner(learner) = &mut self.shell {
            if learner.active_tab != tab {
                debug!("Tab {} -> {}", learner.active_tab, tab);
                learner.active_tab = tab;
            }
        }
        Ok(())
    }

    pub fn request_quit(&mut self) {
        self.phase = RunPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == RunPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.view_mode(), ViewMode::Learner);
        assert_eq!(state.active_tab(), Some(Tab::Home));
        assert_eq!(state.screen(), Screen::Learner(Tab::Home));
        assert!(!state.should_quit());
    }

    #[test]
    fn test_initial_view_from_settings() {
        let mut settings = Settings::default();
        settings.shell.initial_view = ViewMode::Teacher;
        let state = AppState::with_settings(settings);
        assert_eq!(state.screen(), Screen::TeacherDashboard);
        assert_eq!(state.active_tab(), None);
    }

    #[test]
    fn test_set_view_mode_same_value_keeps_tab() {
        let mut state = AppState::new();
        state.select_tab(Tab::Profile).unwrap();
        state.set_view_mode(ViewMode::Learner);
        assert_eq!(state.active_tab(), Some(Tab::Profile));
    }

    #[test]
    fn test_learner_shell_remounts_at_home() {
        let mut state = AppState::new();
        state.select_tab(Tab::Assignments).unwrap();
        state.set_view_mode(ViewMode::Teacher);
        state.set_view_mode(ViewMode::Learner);
        assert_eq!(state.active_tab(), Some(Tab::Home));
    }

    #[test]
    fn test_select_disabled_tab_is_rejected() {
        let mut settings = Settings::default();
        settings.shell.show_cbcflix = false;
        let mut state = AppState::with_settings(settings);

        let err = state.select_tab(Tab::CbcFlix).unwrap_err();
        assert!(matches!(err, Error::TabDisabled { .. }));
        assert_eq!(state.active_tab(), Some(Tab::Home));
    }

    #[test]
    fn test_select_tab_in_teacher_view_is_rejected() {
        let mut state = AppState::new();
        state.set_view_mode(ViewMode::Teacher);
        let err = state.select_tab(Tab::Profile).unwrap_err();
        assert!(matches!(err, Error::LearnerShellHidden { .. }));
        assert_eq!(state.screen(), Screen::TeacherDashboard);
    }

    #[test]
    fn test_check_tab_selection_does_not_change_state() {
        let mut state = AppState::new();
        assert!(state.check_tab_selection(Tab::Profile).is_ok());
        assert_eq!(state.active_tab(), Some(Tab::Home));

        state.set_view_mode(ViewMode::Teacher);
        assert!(state.check_tab_selection(Tab::Profile).is_err());
    }

    #[test]
    fn test_screen_names_are_unique() {
        let mut names: Vec<_> = Tab::ALL
            .iter()
            .map(|t| Screen::Learner(*t).name())
            .collect();
        names.push(Screen::TeacherDashboard.name());
        let count = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), count);
    }
}
