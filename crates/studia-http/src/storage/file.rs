//! File-backed storage backend.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::{KeyValueStorage, TRACING_TARGET};
use crate::error::Result;

/// File-backed [`KeyValueStorage`] backend.
///
/// Entries are kept in memory and written through to a single JSON object
/// file on every mutation. The file is the durable analog of a browser's
/// local storage: it survives process restarts but is owned by exactly one
/// process at a time.
///
/// Reads fail closed. A corrupt or unreadable file is loaded as empty, and a
/// failed write keeps the in-memory view authoritative for the rest of the
/// process; on the next start the missing durable state simply reads as
/// "nothing stored".
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStorage {
    /// Opens the storage file at `path`, creating parent directories as
    /// needed and loading any existing content.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is a directory or a parent directory
    /// cannot be created. Existing content that cannot be read or parsed is
    /// not an error; it is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if path.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is a directory, expected a file", path.display()),
            )
            .into());
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let entries = Self::load(&path);

        tracing::debug!(
            target: TRACING_TARGET,
            path = %path.display(),
            entries = entries.len(),
            "opened storage file"
        );

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Returns the path of the underlying storage file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored entries, treating anything unreadable as empty.
    fn load(path: &Path) -> HashMap<String, String> {
        if !path.exists() {
            return HashMap::new();
        }

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    path = %path.display(),
                    error = %error,
                    "ignoring unreadable storage file"
                );
                return HashMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(error) => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    path = %path.display(),
                    error = %error,
                    "ignoring corrupt storage file"
                );
                HashMap::new()
            }
        }
    }

    /// Writes the current entries to disk. Failures are logged; the
    /// in-memory view stays authoritative.
    fn persist(&self, entries: &HashMap<String, String>) {
        let payload = match serde_json::to_string_pretty(entries) {
            Ok(payload) => payload,
            Err(error) => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    error = %error,
                    "failed to serialize storage entries"
                );
                return;
            }
        };

        if let Err(error) = fs::write(&self.path, payload) {
            tracing::warn!(
                target: TRACING_TARGET,
                path = %self.path.display(),
                error = %error,
                "failed to persist storage file"
            );
        }
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.write();
        entries.insert(key.to_owned(), value.to_owned());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.write();
        if entries.remove(key).is_some() {
            self.persist(&entries);
        }
    }
}
