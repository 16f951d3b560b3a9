//! In-memory storage adapter.

use std::collections::HashMap;

use parking_lot::Mutex;

use super::{StorageAdapter, StorageError};

/// In-process key-value storage.
///
/// Used by tests and ephemeral runs. Counts effective writes (`set` and
/// removals that actually removed something) so tests can assert that
/// no-op mutations never touch storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    write_count: Mutex<u64>,
}

impl MemoryStorage {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of writes applied so far (sets plus effective removals).
    #[must_use]
    pub fn write_count(&self) -> u64 {
        *self.write_count.lock()
    }
}

impl StorageAdapter for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        *self.write_count.lock() += 1;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.entries.lock().remove(key).is_some() {
            *self.write_count.lock() += 1;
        }
        Ok(())
    }
}
