//! RecordStore - abstract CRUD storage for records.

use super::{Record, StoreError};

/// Abstract CRUD storage for records, one ordered collection per record
/// type.
///
/// Ids are assigned by callers, normally via
/// [`next_id`](RecordStore::next_id); the store trusts callers to keep
/// them unique within a collection.
pub trait RecordStore: Send + Sync {
    /// All records in the collection, in insertion order. The returned
    /// vector is a copy; mutating it does not touch stored state.
    fn list<R: Record>(&self) -> Result<Vec<R>, StoreError>;

    /// Get a record by id. Returns None if not found.
    fn get<R: Record>(&self, id: u32) -> Result<Option<R>, StoreError>;

    /// Append a record to the collection and persist it.
    fn add<R: Record>(&self, record: &R) -> Result<(), StoreError>;

    /// Replace the record with the same id, keeping its position in the
    /// collection, and persist. Updating an unknown id changes nothing.
    fn update<R: Record>(&self, record: &R) -> Result<(), StoreError>;

    /// Remove the record with the given id and persist. Deleting an
    /// unknown id changes nothing.
    fn delete<R: Record>(&self, id: u32) -> Result<(), StoreError>;

    /// The id a new record should take: one past the highest id in the
    /// collection, or 1 when it is empty. Not a monotonic counter - after
    /// a deletion the highest id can drop, so an id below a previous
    /// maximum may be handed out again.
    fn next_id<R: Record>(&self) -> Result<u32, StoreError>;

    /// Find records matching a predicate, in insertion order.
    fn find<R: Record>(&self, predicate: &dyn Fn(&R) -> bool) -> Result<Vec<R>, StoreError>;

    /// Find the first record matching a predicate.
    fn find_one<R: Record>(
        &self,
        predicate: &dyn Fn(&R) -> bool,
    ) -> Result<Option<R>, StoreError>;
}
