//! Shared data model for `TaskDeck`.
//!
//! Everything here is plain serializable data: tasks, user profiles,
//! and weather snapshots. Persisted documents use camelCase keys so
//! they stay byte-compatible with the original web client's storage
//! format.

pub mod task;
pub mod user;
pub mod weather;

pub use task::{Priority, Task, TaskId};
pub use user::{StoredSession, User, UserPatch};
pub use weather::WeatherSnapshot;
