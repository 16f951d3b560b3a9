//! Aggregate counters over the full task collection.

use chrono::NaiveDate;
use taskdeck_model::{Priority, Task};

use super::local_date;

/// Summary counters for the dashboard.
///
/// Always computed over the full collection, independent of any view
/// filters.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskStats {
    /// Total number of tasks.
    pub total: usize,
    /// Tasks not yet completed.
    pub pending: usize,
    /// Completed tasks.
    pub completed: usize,
    /// Tasks with high priority.
    pub high_priority: usize,
    /// Tasks created on the current calendar date.
    pub today: usize,
    /// Completed tasks created on the current calendar date.
    pub today_completed: usize,
    /// `completed / total`; 0.0 for an empty collection.
    pub completion_rate: f64,
}

impl TaskStats {
    /// Computes the counters. `today` is the current local calendar
    /// date.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let high_priority = tasks
            .iter()
            .filter(|t| t.priority == Priority::High)
            .count();
        let today_tasks: Vec<&Task> = tasks
            .iter()
            .filter(|t| local_date(t.created_at) == today)
            .collect();
        let today_completed = today_tasks.iter().filter(|t| t.completed).count();

        let completion_rate = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64
        };

        Self {
            total,
            pending: total - completed,
            completed,
            high_priority,
            today: today_tasks.len(),
            today_completed,
            completion_rate,
        }
    }
}
