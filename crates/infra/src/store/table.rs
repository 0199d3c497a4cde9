use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockorder_core::{StoreError, StoreResult};

/// Keyed in-memory table shared by the in-memory stores.
///
/// Every operation takes the lock once, so a multi-key read or write is
/// consistent on its own. Nothing spans two calls.
#[derive(Debug)]
pub struct InMemoryTable<K, V> {
    inner: RwLock<HashMap<K, V>>,
}

impl<K, V> InMemoryTable<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> Default for InMemoryTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> InMemoryTable<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    pub(crate) fn read(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<K, V>>> {
        self.inner
            .read()
            .map_err(|_| StoreError::unavailable("lock poisoned"))
    }

    pub(crate) fn write(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<K, V>>> {
        self.inner
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))
    }

    pub fn get(&self, key: &K) -> StoreResult<Option<V>> {
        Ok(self.read()?.get(key).cloned())
    }

    /// Values for every key present, in the order the keys were given.
    pub fn get_many(&self, keys: &[K]) -> StoreResult<Vec<V>> {
        let map = self.read()?;
        Ok(keys.iter().filter_map(|k| map.get(k).cloned()).collect())
    }

    pub fn upsert(&self, key: K, value: V) -> StoreResult<()> {
        self.write()?.insert(key, value);
        Ok(())
    }

    /// Insert only if `key` is vacant.
    pub fn insert_new(&self, key: K, value: V) -> StoreResult<bool> {
        let mut map = self.write()?;
        if map.contains_key(&key) {
            return Ok(false);
        }
        map.insert(key, value);
        Ok(true)
    }

    pub fn list(&self) -> StoreResult<Vec<V>> {
        Ok(self.read()?.values().cloned().collect())
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
