//! In-memory implementation of the key/value storage port
//!
//! Used as the injected test double; the write counter lets tests assert how
//! many persistence round-trips an operation costs.

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering}
    }
};

use async_trait::async_trait;

use crate::{error::DispatchError, ports::storage::KeyValueStore};

/// Volatile store backed by a map.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    writes:  AtomicUsize
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `put` calls observed so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DispatchError> {
        Ok(self.entries.lock().expect("memory store poisoned").get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), DispatchError> {
        self.entries.lock().expect("memory store poisoned").insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
