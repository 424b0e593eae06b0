//! Storage port - interface for the local key/value store

use async_trait::async_trait;

use crate::error::DispatchError;

/// Port for string-keyed persistent storage.
///
/// The favorites module reads and writes a single JSON-encoded entry through
/// this trait; injecting it keeps the core logic testable without a real
/// database.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read an entry, `None` when the key is absent
    async fn get(&self, key: &str) -> Result<Option<String>, DispatchError>;

    /// Write an entry, replacing any previous value
    async fn put(&self, key: &str, value: &str) -> Result<(), DispatchError>;
}
