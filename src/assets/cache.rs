//! Lazily populated asset cache.
//!
//! Fonts and frames are loaded on first request and then served from memory.
//! Once startup is done the owner can seal the cache: hits keep working,
//! misses become errors instead of surprise disk loads in the middle of a
//! frame.

use crate::error::AssetError;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct AssetCache<K, V> {
    entries: HashMap<K, V>,
    sealed: bool,
}

impl<K, V> Default for AssetCache<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            sealed: false,
        }
    }
}

impl<K: Eq + Hash + Clone + Debug, V> AssetCache<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the cached value, running `load` on the first request only.
    pub fn get_or_load<F>(&mut self, key: &K, load: F) -> Result<&V, AssetError>
    where
        F: FnOnce(&K) -> Result<V, String>,
    {
        if !self.entries.contains_key(key) {
            if self.sealed {
                return Err(AssetError::Sealed(format!("{:?}", key)));
            }
            let value = load(key).map_err(|message| AssetError::Load {
                key: format!("{:?}", key),
                message,
            })?;
            log::trace!("ASSETS: cached {:?}", key);
            self.entries.insert(key.clone(), value);
        }

        self.entries
            .get(key)
            .ok_or_else(|| AssetError::Sealed(format!("{:?}", key)))
    }

    /// Inserts a value eagerly. Ignored once sealed.
    pub fn preload(&mut self, key: K, value: V) -> bool {
        if self.sealed {
            return false;
        }
        self.entries.insert(key, value);
        true
    }

    pub fn seal(&mut self) {
        log::debug!("ASSETS: sealed with {} entries", self.entries.len());
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
