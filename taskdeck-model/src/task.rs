//! Task model: identity, priority, and the task record itself.
//!
//! Task ids are opaque strings assigned by the caller at creation time.
//! [`TaskId::generate`] produces a time-ordered UUID v7 string, which is
//! what the CLI uses; the task store itself never mints ids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique identifier for a task.
///
/// Uniqueness within a collection is the caller's responsibility; the
/// store never generates or rewrites ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a `TaskId` from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh time-ordered id (UUID v7).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Returns the string representation of this id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Task priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority.
    Low,
    /// Medium priority (the default for new tasks).
    Medium,
    /// High priority.
    High,
}

impl Priority {
    /// Sort rank for display ordering: `high` first, `low` last.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// The lowercase name, as used in serialized documents and search.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

/// A single task in the collection.
///
/// `created_at` is immutable after creation. `completed`, `priority`,
/// and `favorite` are mutated in place by the task store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Caller-assigned unique id.
    pub id: TaskId,
    /// Display text; never empty once stored.
    pub text: String,
    /// Whether the task has been completed.
    pub completed: bool,
    /// Priority level.
    pub priority: Priority,
    /// Creation timestamp; immutable.
    pub created_at: DateTime<Utc>,
    /// Optional due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Optional category labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    /// Whether the task is marked as a favorite.
    #[serde(default)]
    pub favorite: bool,
}

impl Task {
    /// Creates a task with a freshly generated id, created now, not
    /// completed, and not a favorite.
    #[must_use]
    pub fn new(text: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: TaskId::generate(),
            text: text.into(),
            completed: false,
            priority,
            created_at: Utc::now(),
            due_date: None,
            categories: None,
            favorite: false,
        }
    }
}
