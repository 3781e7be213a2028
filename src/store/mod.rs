//! Record storage - in-memory collections with durable JSON persistence.
//!
//! Each record type maps to one named collection, which in turn maps to
//! one JSON file. The whole collection is rewritten after every mutation;
//! there is no incremental persistence.
//!
//! ## Example
//!
//! ```ignore
//! use mixbook::{JsonRecordStore, InMemoryStorage, Record, RecordStore};
//!
//! #[derive(Serialize, Deserialize, Clone)]
//! struct Note {
//!     pub id: u32,
//!     pub text: String,
//! }
//!
//! impl Record for Note {
//!     const COLLECTION: &'static str = "notes";
//!     fn id(&self) -> u32 { self.id }
//! }
//!
//! let store = JsonRecordStore::new(InMemoryStorage::new());
//! store.add(&note)?;
//! let loaded = store.get::<Note>(1)?;
//! ```

mod json;
mod record_store;
mod storage;

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// Trait for types that can be stored as records.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this record type (e.g. "cocktails",
    /// "users"). Doubles as the stem of the collection's file name.
    const COLLECTION: &'static str;

    /// Returns the unique identifier for this record.
    fn id(&self) -> u32;
}

/// Error type for record store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A store lock was poisoned by a panicking holder.
    LockPoisoned(&'static str),
    /// Serialization/deserialization error.
    Serde(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
            StoreError::Serde(msg) => write!(f, "record serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

pub use json::JsonRecordStore;
pub use record_store::RecordStore;
pub use storage::{FileStorage, InMemoryStorage, Storage};
