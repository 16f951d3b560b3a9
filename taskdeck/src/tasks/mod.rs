//! Task collection ownership and mutation.
//!
//! [`TaskStore`] exclusively owns the ordered task collection and
//! persists it after every effective mutation. Downstream consumers
//! (the derived-view pipeline, the CLI) only read snapshots.

pub mod store;

pub use store::TaskStore;

use crate::storage::StorageError;

/// Errors that can occur during task mutations.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// Task text cannot be empty.
    #[error("task text cannot be empty")]
    TextEmpty,

    /// The mutated collection could not be persisted.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The collection could not be serialized for persistence.
    #[error("failed to serialize task collection: {0}")]
    Serialize(#[from] serde_json::Error),
}
