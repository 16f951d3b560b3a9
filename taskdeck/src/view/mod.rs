//! Derived views over the task collection.
//!
//! Pure, recomputed-on-demand projections: [`pipeline::visible_tasks`]
//! produces the display ordering for a scope/completion/search
//! combination, and [`stats::TaskStats`] computes the aggregate
//! counters. Neither mutates the collection, and both take the current
//! calendar date as an argument so they stay deterministic.

pub mod pipeline;
pub mod stats;

pub use pipeline::{visible_tasks, TaskFilter};
pub use stats::TaskStats;

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Which slice of the collection a view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    /// Every task.
    #[default]
    All,
    /// Tasks created on the current calendar date.
    Today,
    /// Tasks created on a calendar date strictly after today.
    Upcoming,
    /// Tasks marked as favorites.
    Favorites,
}

impl std::str::FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "upcoming" => Ok(Self::Upcoming),
            "favorites" => Ok(Self::Favorites),
            other => Err(format!("unknown scope: {other}")),
        }
    }
}

/// Completion-state selector applied after the scope filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Completion {
    /// Both completed and pending tasks.
    #[default]
    All,
    /// Only tasks not yet completed.
    Active,
    /// Only completed tasks.
    Completed,
}

impl std::str::FromStr for Completion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(format!("unknown completion filter: {other}")),
        }
    }
}

/// The local calendar date a timestamp falls on.
pub(crate) fn local_date(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}
