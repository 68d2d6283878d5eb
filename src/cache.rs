use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::error::FlushIntervalError;
use crate::flush::{self, FlushState};

pub(crate) struct CacheEntry<V> {
    value: V,
    created_at: DateTime<Utc>,
}

/// A generic, thread-safe in-memory cache with a configurable periodic flush.
///
/// Entries live until removed, either one at a time or by the flush timer
/// armed with [`set_flush_interval`](FlushCache::set_flush_interval), which
/// clears the whole cache every elapsed interval.
pub struct FlushCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    map: Arc<Mutex<HashMap<K, CacheEntry<V>>>>,
    flush: Arc<Mutex<FlushState>>,
}

/// Snapshot returned by [`FlushCache::info`].
#[derive(Debug, Clone, PartialEq)]
pub struct CacheInfo {
    pub size: usize,
    pub flush_interval: Option<Duration>,
}

impl<K, V> FlushCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Creates an empty cache with no periodic flush configured.
    pub fn new() -> Self {
        FlushCache {
            map: Arc::new(Mutex::new(HashMap::new())),
            flush: Arc::new(Mutex::new(FlushState::default())),
        }
    }

    /// Inserts a key-value pair into the cache.
    pub fn put(&mut self, key: K, value: V) {
        let mut map = self.map.lock().unwrap();
        map.insert(
            key,
            CacheEntry {
                value,
                created_at: Utc::now(),
            },
        );
    }

    /// Retrieves a value by key, or `None` if not present.
    pub fn get(&self, key: &K) -> Option<V> {
        let map = self.map.lock().unwrap();
        map.get(key).map(|entry| entry.value.clone())
    }

    /// Check if the cache contains a key
    pub fn contains(&self, key: &K) -> bool {
        let map = self.map.lock().unwrap();
        map.contains_key(key)
    }

    /// Remove a key-value from the cache
    pub fn remove(&mut self, key: &K) {
        let mut map = self.map.lock().unwrap();
        map.remove(key);
    }

    /// Removes every entry. This is what the flush timer runs on each tick.
    pub fn remove_all(&mut self) {
        let mut map = self.map.lock().unwrap();
        map.clear();
    }

    pub fn len(&self) -> usize {
        let map = self.map.lock().unwrap();
        map.len()
    }

    pub fn is_empty(&self) -> bool {
        let map = self.map.lock().unwrap();
        map.is_empty()
    }

    /// Returns when the entry for `key` was inserted, if it is still cached.
    pub fn entry_created(&self, key: &K) -> Option<DateTime<Utc>> {
        let map = self.map.lock().unwrap();
        map.get(key).map(|entry| entry.created_at)
    }

    /// Reports the current size and flush configuration.
    pub fn info(&self) -> CacheInfo {
        CacheInfo {
            size: self.len(),
            flush_interval: self.flush_interval(),
        }
    }

    /// Sets the flush interval for this cache, in milliseconds.
    ///
    /// If set, the cache clears itself every elapsed interval until
    /// reconfigured. `None` resets the interval and stops the periodic
    /// flush. Passing the same interval again is a no-op, the running timer
    /// keeps its schedule. A different interval replaces the running timer
    /// with a new one, so at most one is ever live.
    ///
    /// Fails with [`FlushIntervalError`] if the interval is not a finite
    /// number greater than zero, or is too large to represent as a timer
    /// duration; the previous configuration then stays in effect.
    pub fn set_flush_interval(&self, interval: Option<f64>) -> Result<(), FlushIntervalError> {
        flush::configure(&self.map, &self.flush, interval)
    }

    /// The currently configured flush interval, if any.
    pub fn flush_interval(&self) -> Option<Duration> {
        let state = self.flush.lock().unwrap();
        state.interval
    }
}

impl<K, V> Default for FlushCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for FlushCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    // A destroyed cache must not leave a timer firing into its old map.
    fn drop(&mut self) {
        let mut state = self.flush.lock().unwrap();
        state.interval = None;
        state.cancel();
    }
}
