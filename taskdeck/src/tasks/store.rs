//! The task store: synchronous mutations with save-on-every-mutation.

use std::sync::Arc;

use taskdeck_model::{Priority, Task, TaskId};

use super::TaskError;
use crate::storage::{StorageAdapter, TASKS_KEY};

/// Owns the ordered task collection.
///
/// Insertion order is the canonical order; all display orderings are
/// computed downstream by the view pipeline. Every effective mutation
/// persists the full collection synchronously; mutations referencing a
/// missing id are silent no-ops that never touch storage.
///
/// Id uniqueness is the caller's responsibility — the store never
/// generates ids and does not check for duplicates.
pub struct TaskStore<S: StorageAdapter> {
    tasks: Vec<Task>,
    storage: Arc<S>,
}

impl<S: StorageAdapter> TaskStore<S> {
    /// Creates an empty store. Call [`restore`](Self::restore) to load
    /// the persisted collection.
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            tasks: Vec::new(),
            storage,
        }
    }

    /// Loads the persisted collection, replacing the in-memory one.
    ///
    /// Absent or corrupt data yields an empty collection; this is never
    /// a fatal error. Called once by the composition root at startup.
    pub fn restore(&mut self) {
        self.tasks = match self.storage.get(TASKS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(tasks) => tasks,
                Err(e) => {
                    tracing::warn!(error = %e, "corrupt task collection, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "task collection unreadable, starting empty");
                Vec::new()
            }
        };
    }

    /// Appends a task to the end of the collection and persists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::TextEmpty`] if the task text is empty, or a
    /// storage error if the collection could not be persisted.
    pub fn add(&mut self, task: Task) -> Result<(), TaskError> {
        if task.text.is_empty() {
            return Err(TaskError::TextEmpty);
        }
        self.tasks.push(task);
        self.persist()
    }

    /// Flips `completed` on the matching task and persists.
    ///
    /// Silent no-op (no error, no persistence write) if no task
    /// matches.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the collection could not be
    /// persisted.
    pub fn toggle_completed(&mut self, id: &TaskId) -> Result<(), TaskError> {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            return Ok(());
        };
        task.completed = !task.completed;
        self.persist()
    }

    /// Removes the matching task and persists; no-op if absent.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the collection could not be
    /// persisted.
    pub fn delete(&mut self, id: &TaskId) -> Result<(), TaskError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| &t.id != id);
        if self.tasks.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Overwrites `priority` on the matching task and persists; no-op
    /// if absent.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the collection could not be
    /// persisted.
    pub fn set_priority(&mut self, id: &TaskId, priority: Priority) -> Result<(), TaskError> {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            return Ok(());
        };
        task.priority = priority;
        self.persist()
    }

    /// Flips `favorite` on the matching task and persists; no-op if
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the collection could not be
    /// persisted.
    pub fn toggle_favorite(&mut self, id: &TaskId) -> Result<(), TaskError> {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            return Ok(());
        };
        task.favorite = !task.favorite;
        self.persist()
    }

    /// The current collection, in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    fn persist(&self) -> Result<(), TaskError> {
        let raw = serde_json::to_string(&self.tasks)?;
        self.storage.set(TASKS_KEY, &raw)?;
        Ok(())
    }
}
