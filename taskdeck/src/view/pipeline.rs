//! Filter → search → sort pipeline for task presentation.

use chrono::NaiveDate;
use taskdeck_model::Task;

use super::{local_date, Completion, Scope};

/// The selectors a view applies to the collection.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Scope selector.
    pub scope: Scope,
    /// Completion-state selector.
    pub completion: Completion,
    /// Free-text search query; empty means no text filtering.
    pub query: String,
}

/// Computes the ordered display sequence for a filter combination.
///
/// Filters compose in order — scope, completion, text — then the
/// survivors sort by priority rank ascending (`high` first) with
/// `created_at` descending (newest first) on ties. The sort is stable,
/// so original collection order is the tie-break of last resort.
///
/// `today` is the current local calendar date, passed in so the
/// function is pure and idempotent.
#[must_use]
pub fn visible_tasks<'a>(tasks: &'a [Task], filter: &TaskFilter, today: NaiveDate) -> Vec<&'a Task> {
    let query = filter.query.to_lowercase();
    let mut result: Vec<&Task> = tasks
        .iter()
        .filter(|t| scope_matches(t, filter.scope, today))
        .filter(|t| completion_matches(t, filter.completion))
        .filter(|t| query.is_empty() || query_matches(t, &query))
        .collect();

    result.sort_by(|a, b| {
        a.priority
            .rank()
            .cmp(&b.priority.rank())
            .then(b.created_at.cmp(&a.created_at))
    });
    result
}

fn scope_matches(task: &Task, scope: Scope, today: NaiveDate) -> bool {
    match scope {
        Scope::All => true,
        Scope::Today => local_date(task.created_at) == today,
        Scope::Upcoming => local_date(task.created_at) > today,
        Scope::Favorites => task.favorite,
    }
}

const fn completion_matches(task: &Task, completion: Completion) -> bool {
    match completion {
        Completion::All => true,
        Completion::Active => !task.completed,
        Completion::Completed => task.completed,
    }
}

/// Case-insensitive substring match against text, priority name, or
/// any category label. `query` is already lowercased.
fn query_matches(task: &Task, query: &str) -> bool {
    if task.text.to_lowercase().contains(query) {
        return true;
    }
    if task.priority.as_str().contains(query) {
        return true;
    }
    task.categories
        .as_ref()
        .is_some_and(|cats| cats.iter().any(|c| c.to_lowercase().contains(query)))
}
