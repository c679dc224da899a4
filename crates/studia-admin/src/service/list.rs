//! Normalization for list responses.
//!
//! Some list endpoints answer with a bare array, others wrap the array in
//! an object with pagination metadata. [`ListPayload`] absorbs both shapes
//! at the deserialization boundary so services always hand out `Vec<T>`.

use serde::Deserialize;

/// List response payload, bare or wrapped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    /// Bare array of records.
    Items(Vec<T>),
    /// Array wrapped in a paginator object.
    Wrapped {
        /// The wrapped records
        data: Vec<T>,
        /// Server-reported total, when the wrapper carries one
        #[serde(default)]
        total: Option<u64>,
    },
}

impl<T> ListPayload<T> {
    /// Extracts the records, whatever the wire shape was.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Items(items) => items,
            Self::Wrapped { data, .. } => data,
        }
    }
}

impl<T> Default for ListPayload<T> {
    fn default() -> Self {
        Self::Items(Vec::new())
    }
}
