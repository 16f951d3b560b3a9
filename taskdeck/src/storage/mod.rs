//! Durable key-value storage for client-local state.
//!
//! Defines the [`StorageAdapter`] trait that stores persist through,
//! plus two implementations:
//! - [`memory::MemoryStorage`] — in-process map, write-count observable
//! - [`file::FileStorage`] — one JSON document per key on disk
//!
//! Two keys are in use: [`TASKS_KEY`] holds the serialized task
//! collection, [`AUTH_KEY`] holds the serialized session record (only
//! ever written while authenticated; absent otherwise).

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage key for the serialized task collection.
pub const TASKS_KEY: &str = "tasks";

/// Storage key for the serialized session record.
pub const AUTH_KEY: &str = "auth";

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A read operation failed.
    #[error("storage read failed for key {key}: {reason}")]
    ReadFailed {
        /// The key that was read.
        key: String,
        /// Description of the failure.
        reason: String,
    },

    /// A write operation failed.
    #[error("storage write failed for key {key}: {reason}")]
    WriteFailed {
        /// The key that was written.
        key: String,
        /// Description of the failure.
        reason: String,
    },
}

/// Synchronous key-value storage over string keys and values.
///
/// Writes are synchronous and non-transactional: the caller mutates its
/// in-memory state first and persists afterward, so a failed or lost
/// write costs the pending mutation, never the previously saved state.
pub trait StorageAdapter: Send + Sync {
    /// Returns the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ReadFailed`] if the underlying medium
    /// could not be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::WriteFailed`] if the value could not be
    /// written durably.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the value stored under `key`. Removing an absent key is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::WriteFailed`] if the removal could not
    /// be applied.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
