//! RocksDB implementation of the key/value storage port

use std::{path::Path, sync::Arc};

use async_trait::async_trait;
use rocksdb::{DB, Options};

use crate::{error::DispatchError, ports::storage::KeyValueStore};

/// RocksDB-backed store holding the favorites entry.
pub struct RocksDbStore {
    db: Arc<DB>
}

impl RocksDbStore {
    /// Open (or create) the database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DispatchError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        let db = DB::open(&opts, path).map_err(|e| DispatchError::Storage(format!("failed to open store: {}", e)))?;

        Ok(Self { db: Arc::new(db) })
    }
}

#[async_trait]
impl KeyValueStore for RocksDbStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DispatchError> {
        let value = self.db.get(key).map_err(|e| DispatchError::Storage(format!("failed to read '{}': {}", key, e)))?;

        value
            .map(|bytes| {
                String::from_utf8(bytes).map_err(|e| DispatchError::Storage(format!("invalid UTF-8 in '{}': {}", key, e)))
            })
            .transpose()
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), DispatchError> {
        self.db
            .put(key, value.as_bytes())
            .map_err(|e| DispatchError::Storage(format!("failed to write '{}': {}", key, e)))
    }
}
