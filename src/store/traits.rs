use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage read failed for key '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("storage write failed for key '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// Synchronous string-keyed, string-valued persistence — the localStorage
/// analogue the entity stores are backed by. Writes are full overwrites of
/// the value at a key; there is no partial-write mode.
pub trait KeyValueStorage: Send + Sync {
    /// Returns the raw value at `key`, or `None` when the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites the value at `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the value at `key`; absent keys are a no-op.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
