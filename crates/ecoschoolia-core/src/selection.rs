//! Closed selection types: which shell is shown and which learner tab is active.
//!
//! Both are exhaustive enums so every value has exactly one rendering branch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Top-level learner-vs-teacher selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Learner,
    Teacher,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Learner, ViewMode::Teacher];

    /// Wire id used by config files and the headless interface
    pub fn id(&self) -> &'static str {
        match self {
            ViewMode::Learner => "learner",
            ViewMode::Teacher => "teacher",
        }
    }

    /// Label shown on the mode switch
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Learner => "Learner app",
            ViewMode::Teacher => "Teacher dashboard",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            ViewMode::Learner => ViewMode::Teacher,
            ViewMode::Teacher => ViewMode::Learner,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewMode::ALL
            .into_iter()
            .find(|mode| mode.id() == s)
            .ok_or_else(|| Error::unknown_view(s))
    }
}

/// Learner shell tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    CbcFlix,
    Cyberverse,
    Assignments,
    Profile,
}

impl Tab {
    /// Every tab in bottom-navigation order
    pub const ALL: [Tab; 5] = [
        Tab::Home,
        Tab::CbcFlix,
        Tab::Cyberverse,
        Tab::Assignments,
        Tab::Profile,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::CbcFlix => "cbcflix",
            Tab::Cyberverse => "cyberverse",
            Tab::Assignments => "assignments",
            Tab::Profile => "profile",
        }
    }

    /// Bottom navigation label
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::CbcFlix => "CBCflix",
            Tab::Cyberverse => "3D School",
            Tab::Assignments => "Assignments",
            Tab::Profile => "Profile",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| Error::unknown_tab(s))
    }
}

/// Ordered set of tabs enabled for the learner shell.
///
/// The video hub tab is the only optional one; everything else is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSet {
    show_cbcflix: bool,
}

impl TabSet {
    pub fn new(show_cbcflix: bool) -> Self {
        Self { show_cbcflix }
    }

    pub fn show_cbcflix(&self) -> bool {
        self.show_cbcflix
    }

    pub fn contains(&self, tab: Tab) -> bool {
        tab != Tab::CbcFlix || self.show_cbcflix
    }

    pub fn iter(&self) -> impl Iterator<Item = Tab> + '_ {
        Tab::ALL.into_iter().filter(|tab| self.contains(*tab))
    }

    pub fn to_vec(&self) -> Vec<Tab> {
        self.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Tab at a 0-based position in navigation order
    pub fn get(&self, index: usize) -> Option<Tab> {
        self.iter().nth(index)
    }

    /// 0-based navigation position of an enabled tab
    pub fn position(&self, tab: Tab) -> Option<usize> {
        self.iter().position(|t| t == tab)
    }

    /// Next enabled tab, wrapping around
    pub fn next(&self, tab: Tab) -> Tab {
        let len = self.len();
        let idx = self.position(tab).map(|i| (i + 1) % len).unwrap_or(0);
        self.get(idx).unwrap_or_default()
    }

    /// Previous enabled tab, wrapping around
    pub fn previous(&self, tab: Tab) -> Tab {
        let len = self.len();
        let idx = self
            .position(tab)
            .map(|i| (i + len - 1) % len)
            .unwrap_or(0);
        self.get(idx).unwrap_or_default()
    }
}

impl Default for TabSet {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ViewMode::default(), ViewMode::Learner);
        assert_eq!(Tab::default(), Tab::Home);
    }

    #[test]
    fn test_view_mode_toggle() {
        assert_eq!(ViewMode::Learner.toggle(), ViewMode::Teacher);
        assert_eq!(ViewMode::Teacher.toggle(), ViewMode::Learner);
    }

    #[test]
    fn test_tab_ids_parse_back() {
        for tab in Tab::ALL {
            assert_eq!(tab.id().parse::<Tab>().unwrap(), tab);
        }
        assert!(matches!(
            "library".parse::<Tab>(),
            Err(Error::UnknownTab { .. })
        ));
    }

    #[test]
    fn test_view_mode_parse() {
        assert_eq!("teacher".parse::<ViewMode>().unwrap(), ViewMode::Teacher);
        assert!(matches!(
            "Teacher".parse::<ViewMode>(),
            Err(Error::UnknownView { .. })
        ));
    }

    #[test]
    fn test_serde_ids_match_wire_ids() {
        assert_eq!(serde_json::to_string(&Tab::CbcFlix).unwrap(), "\"cbcflix\"");
        assert_eq!(
            serde_json::from_str::<Tab>("\"cyberverse\"").unwrap(),
            Tab::Cyberverse
        );
        assert_eq!(
            serde_json::to_string(&ViewMode::Teacher).unwrap(),
            "\"teacher\""
        );
    }

    #[test]
    fn test_tab_set_with_video_hub() {
        let set = TabSet::new(true);
        assert_eq!(set.len(), 5);
        assert_eq!(set.to_vec(), Tab::ALL.to_vec());
    }

    #[test]
    fn test_tab_set_without_video_hub() {
        let set = TabSet::new(false);
        assert_eq!(set.len(), 4);
        assert!(!set.contains(Tab::CbcFlix));
        assert_eq!(
            set.to_vec(),
            vec![Tab::Home, Tab::Cyberverse, Tab::Assignments, Tab::Profile]
        );
        assert_eq!(set.get(1), Some(Tab::Cyberverse));
        assert_eq!(set.get(4), None);
    }

    #[test]
    fn test_tab_set_cycles_with_wraparound() {
        let set = TabSet::new(false);
        assert_eq!(set.next(Tab::Home), Tab::Cyberverse);
        assert_eq!(set.next(Tab::Profile), Tab::Home);
        assert_eq!(set.previous(Tab::Home), Tab::Profile);
        assert_eq!(set.previous(Tab::Cyberverse), Tab::Home);
    }
}
