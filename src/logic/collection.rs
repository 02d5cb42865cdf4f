//! Pure collection transforms. `EntityStore` composes these with persistence
//! and change notification; nothing here touches storage.

use crate::model::{EntityRecord, RecordId};

/// Appends `record` at the end of the collection (insertion order preserved).
/// The caller is responsible for having minted the record's id.
pub fn create<R: EntityRecord>(mut records: Vec<R>, record: R) -> Vec<R> {
    records.push(record);
    records
}

/// Replaces the element whose id matches `record`, keeping its position.
/// Returns the collection unchanged and `false` when no element matches.
pub fn update<R: EntityRecord>(mut records: Vec<R>, record: R) -> (Vec<R>, bool) {
    match records.iter().position(|r| r.id() == record.id()) {
        Some(index) => {
            records[index] = record;
            (records, true)
        }
        None => (records, false),
    }
}

/// Removes the element with the given id. Returns `false` (and the collection
/// unchanged) when no element matches, so a repeated delete is a no-op.
pub fn delete<R: EntityRecord>(mut records: Vec<R>, id: RecordId) -> (Vec<R>, bool) {
    let before = records.len();
    records.retain(|r| r.id() != id);
    let removed = records.len() != before;
    (records, removed)
}

pub fn find<R: EntityRecord>(records: &[R], id: RecordId) -> Option<&R> {
    records.iter().find(|r| r.id() == id)
}
