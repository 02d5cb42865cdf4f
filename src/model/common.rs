use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::atomic::{AtomicI64, Ordering};

/// Record identifier: timestamp-shaped integer, unique within one collection.
pub type RecordId = i64;

/// Contract every stored entity type implements. The store, query view and
/// form session are generic over this trait; concrete field sets
/// (a Lead vs an Employee) differ only in shape, not in behavior.
pub trait EntityRecord: Clone + Serialize + DeserializeOwned {
    fn id(&self) -> RecordId;
    fn set_id(&mut self, id: RecordId);

    /// The fixed set of text fields a search term is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Field names that must be non-blank before a draft may be committed.
    fn required_fields() -> &'static [&'static str];
}

/// Change notification emitted after a successful store mutation.
/// Purely informative (toast/refresh collaborators); no store invariant
/// depends on anyone listening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    Created(RecordId),
    Updated(RecordId),
    Deleted(RecordId),
}

/// Mints record identifiers from the current time in milliseconds, bumped
/// past the previous id whenever the clock has not advanced. Ids stay
/// timestamp-shaped but are strictly monotonic within a process, so rapid
/// successive creates never collide.
#[derive(Debug)]
pub struct IdMinter {
    last: AtomicI64,
}

impl IdMinter {
    pub const fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    pub fn mint(&self) -> RecordId {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let next = if now > last { now } else { last + 1 };
            match self
                .last
                .compare_exchange_weak(last, next, Ordering::SeqCst, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(actual) => last = actual,
            }
        }
    }
}

impl Default for IdMinter {
    fn default() -> Self {
        Self::new()
    }
}
