//! JsonRecordStore - ordered in-memory collections persisted as JSON
//! files, one file per collection, rewritten in full on every mutation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{error, warn};

use super::{Record, RecordStore, Storage, StoreError};

/// One loaded collection: raw record values indexed by id, in insertion
/// order.
struct Collection {
    records: IndexMap<u32, Value>,
    /// True when the collection never came from durable data - the file
    /// was absent or unreadable at load time.
    fresh: bool,
}

impl Collection {
    fn fresh() -> Self {
        Collection {
            records: IndexMap::new(),
            fresh: true,
        }
    }
}

/// Record store holding every collection in memory and rewriting a
/// collection's JSON file after each mutation to it.
///
/// Collections load lazily on first access. A missing file yields an
/// empty collection; a file that fails to parse is logged and treated
/// the same. A failed write is also logged, and the in-memory mutation
/// is kept, so durable state can lag behind until the next successful
/// write.
///
/// Clone-friendly via Arc: clones share collections and storage.
#[derive(Clone)]
pub struct JsonRecordStore {
    storage: Arc<dyn Storage>,
    collections: Arc<RwLock<HashMap<&'static str, Collection>>>,
}

impl JsonRecordStore {
    pub fn new(storage: impl Storage + 'static) -> Self {
        JsonRecordStore {
            storage: Arc::new(storage),
            collections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Install `seed` as the collection's contents and persist them, but
    /// only when the collection never loaded from durable data. Call
    /// right after construction, before any mutation of the collection.
    pub fn seed_if_fresh<R: Record>(
        &self,
        seed: impl FnOnce() -> Vec<R>,
    ) -> Result<(), StoreError> {
        self.with_collection::<R, _>(|collection| {
            if !collection.fresh {
                return Ok(());
            }
            for record in seed() {
                collection.records.insert(record.id(), encode(&record)?);
            }
            collection.fresh = false;
            self.persist(R::COLLECTION, collection);
            Ok(())
        })?
    }

    fn file_name(collection: &str) -> String {
        format!("{}.json", collection)
    }

    /// Run `f` against the collection under the write lock, loading it
    /// first if this is its first access.
    fn with_collection<R: Record, T>(
        &self,
        f: impl FnOnce(&mut Collection) -> T,
    ) -> Result<T, StoreError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        let collection = collections
            .entry(R::COLLECTION)
            .or_insert_with(|| self.load_collection::<R>());
        Ok(f(collection))
    }

    /// Run `f` against the collection under the read lock.
    fn read_collection<R: Record, T>(
        &self,
        f: impl FnOnce(&Collection) -> T,
    ) -> Result<T, StoreError> {
        self.ensure_loaded::<R>()?;
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        // ensure_loaded inserted the entry and collections are never
        // removed, so indexing cannot miss.
        Ok(f(&collections[R::COLLECTION]))
    }

    fn ensure_loaded<R: Record>(&self) -> Result<(), StoreError> {
        {
            let collections = self
                .collections
                .read()
                .map_err(|_| StoreError::LockPoisoned("read"))?;
            if collections.contains_key(R::COLLECTION) {
                return Ok(());
            }
        }
        self.with_collection::<R, _>(|_| ())
    }

    /// Read and parse a collection file. Absent, unreadable, and
    /// unparseable files all produce an empty fresh collection; only the
    /// last two are worth a log line.
    fn load_collection<R: Record>(&self) -> Collection {
        let bytes = match self.storage.load(&Self::file_name(R::COLLECTION)) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Collection::fresh(),
            Err(e) => {
                warn!(collection = R::COLLECTION, "failed to read collection file: {}", e);
                return Collection::fresh();
            }
        };

        let values: Vec<Value> = match serde_json::from_slice(&bytes) {
            Ok(values) => values,
            Err(e) => {
                warn!(collection = R::COLLECTION, "failed to parse collection file: {}", e);
                return Collection::fresh();
            }
        };

        let mut records = IndexMap::with_capacity(values.len());
        for value in values {
            match serde_json::from_value::<R>(value.clone()) {
                Ok(record) => {
                    records.insert(record.id(), value);
                }
                // One bad record spoils the file, same as a syntax error.
                Err(e) => {
                    warn!(collection = R::COLLECTION, "failed to parse collection file: {}", e);
                    return Collection::fresh();
                }
            }
        }

        Collection {
            records,
            fresh: false,
        }
    }

    /// Rewrite the collection's file in full. Failures are logged and
    /// otherwise swallowed; the in-memory state stays authoritative.
    fn persist(&self, name: &str, collection: &Collection) {
        let values: Vec<&Value> = collection.records.values().collect();
        let bytes = match serde_json::to_vec_pretty(&values) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(collection = name, "failed to serialize collection: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.save(&Self::file_name(name), &bytes) {
            error!(collection = name, "failed to write collection file: {}", e);
        }
    }
}

fn encode<R: Record>(record: &R) -> Result<Value, StoreError> {
    serde_json::to_value(record).map_err(|e| StoreError::Serde(e.to_string()))
}

fn decode<R: Record>(value: &Value) -> Result<R, StoreError> {
    serde_json::from_value(value.clone()).map_err(|e| StoreError::Serde(e.to_string()))
}

impl RecordStore for JsonRecordStore {
    fn list<R: Record>(&self) -> Result<Vec<R>, StoreError> {
        self.read_collection::<R, _>(|collection| {
            collection.records.values().map(decode).collect()
        })?
    }

    fn get<R: Record>(&self, id: u32) -> Result<Option<R>, StoreError> {
        self.read_collection::<R, _>(|collection| {
            collection.records.get(&id).map(decode).transpose()
        })?
    }

    fn add<R: Record>(&self, record: &R) -> Result<(), StoreError> {
        let id = record.id();
        let value = encode(record)?;
        self.with_collection::<R, _>(|collection| {
            collection.records.insert(id, value);
            self.persist(R::COLLECTION, collection);
        })
    }

    fn update<R: Record>(&self, record: &R) -> Result<(), StoreError> {
        let id = record.id();
        let value = encode(record)?;
        self.with_collection::<R, _>(|collection| {
            if let Some(slot) = collection.records.get_mut(&id) {
                *slot = value;
                self.persist(R::COLLECTION, collection);
            }
        })
    }

    fn delete<R: Record>(&self, id: u32) -> Result<(), StoreError> {
        self.with_collection::<R, _>(|collection| {
            collection.records.shift_remove(&id);
            self.persist(R::COLLECTION, collection);
        })
    }

    fn next_id<R: Record>(&self) -> Result<u32, StoreError> {
        self.read_collection::<R, _>(|collection| {
            collection.records.keys().max().map_or(1, |max| max + 1)
        })
    }

    fn find<R: Record>(&self, predicate: &dyn Fn(&R) -> bool) -> Result<Vec<R>, StoreError> {
        self.read_collection::<R, _>(|collection| {
            let mut results = Vec::new();
            for value in collection.records.values() {
                let record = decode::<R>(value)?;
                if predicate(&record) {
                    results.push(record);
                }
            }
            Ok(results)
        })?
    }

    fn find_one<R: Record>(
        &self,
        predicate: &dyn Fn(&R) -> bool,
    ) -> Result<Option<R>, StoreError> {
        self.read_collection::<R, _>(|collection| {
            for value in collection.records.values() {
                let record = decode::<R>(value)?;
                if predicate(&record) {
                    return Ok(Some(record));
                }
            }
            Ok(None)
        })?
    }
}
