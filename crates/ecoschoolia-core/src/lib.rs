//! # ecoschoolia-core - Core Domain Types
//!
//! Foundation crate for Ecoschoolia. Provides the display records, the
//! hardcoded fixture catalog, the closed selection enums, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, dirs).
//!
//! ## Public API
//!
//! ### Records (`model`)
//! - [`RecommendedItem`], [`VideoSection`], [`VirtualWorld`], [`Assignment`],
//!   [`CompetencyScore`], [`Badge`] - learner screens
//! - [`DashboardStat`], [`Insight`], [`Alert`], [`ClassRow`], [`NavItem`] - teacher dashboard
//! - [`Tone`] - semantic color bucket derived from status/engagement enums
//!
//! ### Fixtures (`fixtures`)
//! - [`Catalog`] - every table, loaded once as process-scoped constants
//!
//! ### Selection (`selection`)
//! - [`ViewMode`] - learner app vs teacher dashboard
//! - [`Tab`] - learner shell screens
//! - [`TabSet`] - tabs enabled by configuration
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use ecoschoolia_core::prelude::*;
//! ```

pub mod error;
pub mod fixtures;
pub mod logging;
pub mod model;
pub mod selection;

/// Prelude for common imports used throughout all Ecoschoolia crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use fixtures::Catalog;
pub use model::{
    Alert, Assignment, AssignmentStatus, Badge, ClassRow, CompetencyScore, DashboardStat,
    Engagement, Insight, LearnerProfile, NavItem, QuickAction, RecommendedItem, SectionColor,
    StatTone, Tone, VideoCatalogEntry, VideoSection, VirtualWorld,
};
pub use selection::{Tab, TabSet, ViewMode};
