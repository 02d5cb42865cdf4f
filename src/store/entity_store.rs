use anyhow::Result;
use log::{debug, warn};
use std::mem;
use std::sync::Arc;

use super::traits::KeyValueStorage;
use crate::logic::collection;
use crate::model::{ChangeEvent, EntityRecord, IdMinter, RecordId};

type Listener = Box<dyn Fn(&ChangeEvent) + Send + Sync>;

/// Single source of truth for one entity type's records, backed by a
/// key/value storage backend. Every mutation rewrites the full collection
/// under the store's key before returning; reads are served from memory.
pub struct EntityStore<R: EntityRecord> {
    storage_key: String,
    backend: Arc<dyn KeyValueStorage>,
    records: Vec<R>,
    minter: IdMinter,
    listeners: Vec<Listener>,
}

impl<R: EntityRecord> EntityStore<R> {
    /// Loads the collection at `storage_key`. A stored value that is absent,
    /// fails to parse as a JSON array of records, or parses to an empty
    /// array falls back to `seed` — storage corruption never produces a
    /// crash or an empty dataset. Adopted data is not re-validated against
    /// required-field rules.
    pub fn initialize(
        backend: Arc<dyn KeyValueStorage>,
        storage_key: impl Into<String>,
        seed: Vec<R>,
    ) -> Self {
        let storage_key = storage_key.into();
        let records = match backend.read(&storage_key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<R>>(&raw) {
                Ok(parsed) if !parsed.is_empty() => {
                    debug!("loaded {} records from '{}'", parsed.len(), storage_key);
                    parsed
                }
                Ok(_) => {
                    warn!("stored value at '{}' is an empty array, using seed data", storage_key);
                    seed
                }
                Err(err) => {
                    warn!("stored value at '{}' is unreadable ({}), using seed data", storage_key, err);
                    seed
                }
            },
            Ok(None) => {
                debug!("no stored value at '{}', using seed data", storage_key);
                seed
            }
            Err(err) => {
                warn!("storage read at '{}' failed ({}), using seed data", storage_key, err);
                seed
            }
        };

        Self {
            storage_key,
            backend,
            records,
            minter: IdMinter::new(),
            listeners: Vec::new(),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// The live collection, in insertion order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        collection::find(&self.records, id)
    }

    /// Registers a change listener, called after each successful mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&ChangeEvent) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Mints an id for `record`, appends it, and persists. Returns the
    /// minted id.
    pub fn create(&mut self, mut record: R) -> Result<RecordId> {
        let id = self.minter.mint();
        record.set_id(id);
        self.records = collection::create(mem::take(&mut self.records), record);
        self.persist()?;
        self.notify(ChangeEvent::Created(id));
        Ok(id)
    }

    /// Replaces the record with a matching id in place and persists.
    /// Returns `false` when the id is no longer present (stale reference);
    /// the collection is left untouched and nothing is persisted.
    pub fn update(&mut self, record: R) -> Result<bool> {
        let id = record.id();
        let (records, replaced) = collection::update(mem::take(&mut self.records), record);
        self.records = records;
        if !replaced {
            debug!("update of missing id {} in '{}' ignored", id, self.storage_key);
            return Ok(false);
        }
        self.persist()?;
        self.notify(ChangeEvent::Updated(id));
        Ok(true)
    }

    /// Removes the record with the given id and persists. Returns `false`
    /// when no record matches; repeating a delete is a no-op. The caller is
    /// expected to have run its destructive-action confirmation before
    /// calling this.
    pub fn delete(&mut self, id: RecordId) -> Result<bool> {
        let (records, removed) = collection::delete(mem::take(&mut self.records), id);
        self.records = records;
        if !removed {
            debug!("delete of missing id {} in '{}' ignored", id, self.storage_key);
            return Ok(false);
        }
        self.persist()?;
        self.notify(ChangeEvent::Deleted(id));
        Ok(true)
    }

    /// Serializes the full collection back to the backend. Runs after every
    /// mutation; not batched, not debounced.
    pub fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.records)?;
        self.backend.write(&self.storage_key, &raw)?;
        debug!("persisted {} records to '{}'", self.records.len(), self.storage_key);
        Ok(())
    }

    fn notify(&self, event: ChangeEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Lead, LeadStatus};
    use crate::seed;
    use crate::store::MemoryStorage;
    use parking_lot::Mutex;

    fn backend() -> Arc<MemoryStorage> {
        Arc::new(MemoryStorage::new())
    }

    fn lead(name: &str) -> Lead {
        Lead {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            ..Lead::template()
        }
    }

    #[test]
    fn initialize_falls_back_to_seed_on_missing_garbage_and_empty() {
        let seed = seed::leads();

        for stored in [None, Some("not json"), Some("[]")] {
            let backend = backend();
            if let Some(raw) = stored {
                backend.write(seed::LEADS_STORAGE_KEY, raw).unwrap();
            }
            let store = EntityStore::<Lead>::initialize(
                backend,
                seed::LEADS_STORAGE_KEY,
                seed.clone(),
            );
            assert_eq!(store.records(), seed.as_slice(), "stored={:?}", stored);
        }
    }

    #[test]
    fn initialize_adopts_a_stored_non_empty_array() {
        let backend = backend();
        let stored = vec![lead("Asha"), lead("Vikram")];
        backend
            .write(
                seed::LEADS_STORAGE_KEY,
                &serde_json::to_string(&stored).unwrap(),
            )
            .unwrap();

        let store =
            EntityStore::<Lead>::initialize(backend, seed::LEADS_STORAGE_KEY, seed::leads());
        assert_eq!(store.records(), stored.as_slice());
    }

    #[test]
    fn persist_then_initialize_round_trips() {
        let backend = backend();
        let mut store =
            EntityStore::<Lead>::initialize(backend.clone(), seed::LEADS_STORAGE_KEY, seed::leads());
        store.create(lead("Asha")).unwrap();

        let reloaded =
            EntityStore::<Lead>::initialize(backend, seed::LEADS_STORAGE_KEY, Vec::new());
        assert_eq!(reloaded.records(), store.records());
    }

    #[test]
    fn create_appends_with_a_fresh_id_and_persists() {
        let backend = backend();
        let mut store =
            EntityStore::<Lead>::initialize(backend.clone(), seed::LEADS_STORAGE_KEY, seed::leads());
        let before = store.len();

        let draft = lead("Asha");
        let id = store.create(draft.clone()).unwrap();

        assert_eq!(store.len(), before + 1);
        let appended = store.records().last().unwrap();
        assert_eq!(appended.id, id);
        assert_eq!(appended.name, draft.name);
        assert_eq!(appended.email, draft.email);

        let raw = backend.read(seed::LEADS_STORAGE_KEY).unwrap().unwrap();
        let persisted: Vec<Lead> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, store.records());
    }

    #[test]
    fn rapid_creates_mint_distinct_ids() {
        let mut store =
            EntityStore::<Lead>::initialize(backend(), seed::LEADS_STORAGE_KEY, Vec::new());
        let mut ids = Vec::new();
        for i in 0..50 {
            ids.push(store.create(lead(&format!("L{i}"))).unwrap());
        }
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn update_of_existing_id_keeps_length_and_position() {
        let mut store =
            EntityStore::<Lead>::initialize(backend(), seed::LEADS_STORAGE_KEY, seed::leads());
        let before = store.len();
        let mut target = store.records()[1].clone();
        target.status = LeadStatus::Qualified;
        target.company = "Khanna Logistics Pvt Ltd".to_string();

        assert!(store.update(target.clone()).unwrap());
        assert_eq!(store.len(), before);
        assert_eq!(&store.records()[1], &target);
    }

    #[test]
    fn stale_update_and_delete_are_no_ops() {
        let backend = backend();
        let mut store =
            EntityStore::<Lead>::initialize(backend.clone(), seed::LEADS_STORAGE_KEY, seed::leads());
        let snapshot = store.records().to_vec();

        let mut ghost = lead("Ghost");
        ghost.set_id(42);
        assert!(!store.update(ghost).unwrap());
        assert!(!store.delete(42).unwrap());
        assert_eq!(store.records(), snapshot.as_slice());
        // Nothing was persisted either.
        assert_eq!(backend.read(seed::LEADS_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn delete_removes_and_second_delete_is_a_no_op() {
        let mut store =
            EntityStore::<Lead>::initialize(backend(), seed::LEADS_STORAGE_KEY, seed::leads());
        let before = store.len();
        let id = store.records()[0].id;

        assert!(store.delete(id).unwrap());
        assert_eq!(store.len(), before - 1);
        assert!(store.get(id).is_none());

        assert!(!store.delete(id).unwrap());
        assert_eq!(store.len(), before - 1);
    }

    #[test]
    fn listeners_observe_mutations() {
        let events: Arc<Mutex<Vec<ChangeEvent>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();

        let mut store =
            EntityStore::<Lead>::initialize(backend(), seed::LEADS_STORAGE_KEY, seed::leads());
        store.subscribe(move |event| sink.lock().push(*event));

        let id = store.create(lead("Asha")).unwrap();
        let mut revised = store.get(id).unwrap().clone();
        revised.company = "Iyer & Co".to_string();
        store.update(revised).unwrap();
        store.delete(id).unwrap();
        store.delete(id).unwrap(); // stale, no event

        assert_eq!(
            events.lock().as_slice(),
            &[
                ChangeEvent::Created(id),
                ChangeEvent::Updated(id),
                ChangeEvent::Deleted(id)
            ]
        );
    }
}
