//! Nullable store: thread-safe in-memory storage for testing.

use cinder_store::{MetaStore, RecordStore, StoreError};
use cinder_types::Ordinal;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

/// An in-memory meta + record store.
pub struct NullStore {
    meta: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
    records: Mutex<BTreeMap<Ordinal, [u8; 32]>>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StoreError> {
    mutex
        .lock()
        .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            meta: Mutex::new(HashMap::new()),
            records: Mutex::new(BTreeMap::new()),
        }
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MetaStore for NullStore {
    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(lock(&self.meta)?.get(key).cloned())
    }

    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        lock(&self.meta)?.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete_meta(&self, key: &[u8]) -> Result<(), StoreError> {
        lock(&self.meta)?.remove(key);
        Ok(())
    }
}

impl RecordStore for NullStore {
    fn put_record(&self, ordinal: Ordinal, record: &[u8; 32]) -> Result<(), StoreError> {
        lock(&self.records)?.insert(ordinal, *record);
        Ok(())
    }

    fn get_record(&self, ordinal: Ordinal) -> Result<Option<[u8; 32]>, StoreError> {
        Ok(lock(&self.records)?.get(&ordinal).copied())
    }

    fn iter_records(&self) -> Result<Vec<(Ordinal, [u8; 32])>, StoreError> {
        Ok(lock(&self.records)?
            .iter()
            .map(|(ordinal, bytes)| (*ordinal, *bytes))
            .collect())
    }

    fn record_count(&self) -> Result<u64, StoreError> {
        Ok(lock(&self.records)?.len() as u64)
    }
}
