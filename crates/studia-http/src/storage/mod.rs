//! Key-value storage behind the persisted credential record.
//!
//! The client never touches a concrete storage backend directly; it goes
//! through the [`KeyValueStorage`] seam so tests can substitute
//! [`MemoryStorage`] for the durable [`FileStorage`].

mod file;
mod memory;

use std::fmt::Debug;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Tracing target for storage operations.
pub const TRACING_TARGET: &str = "studia_http::storage";

/// String key-value storage for small client-side records.
///
/// Implementations are infallible at the operation level: a backend that
/// cannot complete a write logs the problem and keeps serving its in-memory
/// view, and a `get` of anything unreadable is `None`. Construction is the
/// only fallible step.
pub trait KeyValueStorage: Debug + Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Removes the value stored under `key`. Removing an absent key is a
    /// no-op.
    fn remove(&self, key: &str);
}
