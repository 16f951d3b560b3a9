//! Property-based tests for the view pipeline and aggregates.
//!
//! Uses proptest to verify:
//! 1. Pipeline output is always sorted by priority rank, then recency.
//! 2. The pipeline is idempotent: re-filtering its own output is a no-op.
//! 3. Active/completed filters partition whatever the scope selects.
//! 4. Every survivor of a text query actually matches the query.
//! 5. Aggregate counters are internally consistent and bounded.
//! 6. Toggling completion twice through the store restores the collection.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use proptest::prelude::*;
use uuid::Uuid;

use taskdeck::storage::MemoryStorage;
use taskdeck::tasks::TaskStore;
use taskdeck::view::{visible_tasks, Completion, Scope, TaskFilter, TaskStats};
use taskdeck_model::{Priority, Task, TaskId};

// --- Strategies for task collections ---

/// Strategy for generating arbitrary `Priority` values.
fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
    ]
}

/// Strategy for generating arbitrary creation timestamps.
/// Spans 1970 through 2100 at whole-second resolution.
fn arb_timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800i64)
        .prop_map(|secs| DateTime::from_timestamp(secs, 0).expect("timestamp in range"))
}

/// Strategy for generating arbitrary `Task` values with unique ids.
fn arb_task() -> impl Strategy<Value = Task> {
    (
        any::<u128>(),
        "[a-zA-Z0-9 ]{1,40}",
        any::<bool>(),
        arb_priority(),
        arb_timestamp(),
        proptest::option::of(prop::collection::vec("[a-z]{1,10}", 0..3)),
        any::<bool>(),
    )
        .prop_map(
            |(id, text, completed, priority, created_at, categories, favorite)| Task {
                id: TaskId::new(Uuid::from_u128(id).to_string()),
                text,
                completed,
                priority,
                created_at,
                due_date: None,
                categories,
                favorite,
            },
        )
}

fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(arb_task(), 0..24)
}

/// Strategy for generating arbitrary `Scope` values.
fn arb_scope() -> impl Strategy<Value = Scope> {
    prop_oneof![
        Just(Scope::All),
        Just(Scope::Today),
        Just(Scope::Upcoming),
        Just(Scope::Favorites),
    ]
}

/// Strategy for generating arbitrary `TaskFilter` values.
/// Queries are short lowercase strings so they sometimes match.
fn arb_filter() -> impl Strategy<Value = TaskFilter> {
    (
        arb_scope(),
        prop_oneof![
            Just(Completion::All),
            Just(Completion::Active),
            Just(Completion::Completed),
        ],
        "[a-z]{0,4}",
    )
        .prop_map(|(scope, completion, query)| TaskFilter {
            scope,
            completion,
            query,
        })
}

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 23).expect("valid date")
}

fn ids(tasks: &[&Task]) -> Vec<TaskId> {
    tasks.iter().map(|t| t.id.clone()).collect()
}

// --- Property tests ---

proptest! {
    /// Output is always ordered by priority rank ascending, with
    /// `created_at` descending inside each rank.
    #[test]
    fn output_is_sorted_by_rank_then_recency(tasks in arb_tasks(), filter in arb_filter()) {
        let visible = visible_tasks(&tasks, &filter, fixed_today());
        for pair in visible.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.priority.rank() <= b.priority.rank());
            if a.priority.rank() == b.priority.rank() {
                prop_assert!(a.created_at >= b.created_at);
            }
        }
    }

    /// Every task in the output came from the input, at most once.
    #[test]
    fn output_is_a_subset_of_the_input(tasks in arb_tasks(), filter in arb_filter()) {
        let visible = visible_tasks(&tasks, &filter, fixed_today());
        prop_assert!(visible.len() <= tasks.len());
        for task in &visible {
            prop_assert!(tasks.iter().any(|t| t.id == task.id));
        }
        let mut seen = ids(&visible);
        seen.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        seen.dedup();
        prop_assert_eq!(seen.len(), visible.len());
    }

    /// Running the pipeline over its own output changes nothing.
    #[test]
    fn pipeline_is_idempotent(tasks in arb_tasks(), filter in arb_filter()) {
        let today = fixed_today();
        let first = visible_tasks(&tasks, &filter, today);
        let owned: Vec<Task> = first.iter().map(|t| (*t).clone()).collect();
        let second = visible_tasks(&owned, &filter, today);
        prop_assert_eq!(ids(&first), ids(&second));
    }

    /// For any scope and query, the active and completed views
    /// partition the unfiltered view.
    #[test]
    fn active_and_completed_partition_the_view(tasks in arb_tasks(), filter in arb_filter()) {
        let today = fixed_today();
        let all = TaskFilter { completion: Completion::All, ..filter.clone() };
        let active = TaskFilter { completion: Completion::Active, ..filter.clone() };
        let completed = TaskFilter { completion: Completion::Completed, ..filter };

        let all_count = visible_tasks(&tasks, &all, today).len();
        let active_count = visible_tasks(&tasks, &active, today).len();
        let completed_count = visible_tasks(&tasks, &completed, today).len();
        prop_assert_eq!(all_count, active_count + completed_count);
    }

    /// A non-empty query only lets through tasks that match it in
    /// text, priority name, or a category label.
    #[test]
    fn survivors_actually_match_the_query(tasks in arb_tasks(), query in "[a-z]{1,4}") {
        let filter = TaskFilter { query: query.clone(), ..TaskFilter::default() };
        for task in visible_tasks(&tasks, &filter, fixed_today()) {
            let in_text = task.text.to_lowercase().contains(&query);
            let in_priority = task.priority.as_str().contains(&query);
            let in_categories = task
                .categories
                .as_ref()
                .is_some_and(|cats| cats.iter().any(|c| c.to_lowercase().contains(&query)));
            prop_assert!(in_text || in_priority || in_categories);
        }
    }

    /// Aggregate counters never disagree with each other.
    #[test]
    fn stats_are_internally_consistent(tasks in arb_tasks()) {
        let stats = TaskStats::compute(&tasks, fixed_today());
        prop_assert_eq!(stats.total, tasks.len());
        prop_assert_eq!(stats.pending + stats.completed, stats.total);
        prop_assert!(stats.high_priority <= stats.total);
        prop_assert!(stats.today_completed <= stats.today);
        prop_assert!(stats.today <= stats.total);
        prop_assert!((0.0..=1.0).contains(&stats.completion_rate));
        if stats.total == 0 {
            prop_assert_eq!(stats.completion_rate, 0.0);
        }
    }

    /// Toggling every task's completion twice restores the collection
    /// exactly, both in memory and in storage.
    #[test]
    fn double_toggle_is_identity(tasks in arb_tasks()) {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = TaskStore::new(storage);
        for task in tasks {
            store.add(task).expect("add should persist");
        }
        let before = store.tasks().to_vec();
        let ids: Vec<TaskId> = before.iter().map(|t| t.id.clone()).collect();
        for id in &ids {
            store.toggle_completed(id).expect("toggle should persist");
            store.toggle_completed(id).expect("toggle should persist");
        }
        prop_assert_eq!(store.tasks(), before.as_slice());
    }
}
