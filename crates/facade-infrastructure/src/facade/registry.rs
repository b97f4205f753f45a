//! Resolved Instance Registry
//!
//! Accessor key → currently active instance. Kept apart from the container's
//! own memoization so a facade can be hot-swapped without touching bindings.
//! An absent entry means "not yet resolved".

use super::instance::Instance;
use facade_domain::value_objects::AccessorKey;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Cache of the instance each facade currently forwards to
///
/// Lookups share a read lock; every mutation takes the single write lock.
#[derive(Debug, Default)]
pub struct ResolvedInstanceRegistry {
    entries: RwLock<HashMap<AccessorKey, Instance>>,
}

impl ResolvedInstanceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Current instance for `key`
    pub fn get(&self, key: &AccessorKey) -> Option<Instance> {
        self.read().get(key).cloned()
    }

    /// Whether `key` has an entry
    pub fn contains(&self, key: &AccessorKey) -> bool {
        self.read().contains_key(key)
    }

    /// Overwrite the entry for `key`, returning the previous instance
    pub fn insert(&self, key: AccessorKey, instance: Instance) -> Option<Instance> {
        debug!(accessor = %key, service = instance.service_name(), mock = instance.is_mock(), "Registry entry set");
        self.write().insert(key, instance)
    }

    /// Store `instance` unless another caller already cached one; returns the cached entry
    pub fn insert_if_absent(&self, key: AccessorKey, instance: Instance) -> Instance {
        self.write().entry(key).or_insert(instance).clone()
    }

    /// Remove the entry for `key`
    pub fn remove(&self, key: &AccessorKey) -> Option<Instance> {
        let removed = self.write().remove(key);
        if removed.is_some() {
            debug!(accessor = %key, "Registry entry cleared");
        }
        removed
    }

    /// Remove every entry, returning how many were dropped
    pub fn reset(&self) -> usize {
        let mut entries = self.write();
        let count = entries.len();
        entries.clear();
        if count > 0 {
            debug!(count, "Registry reset");
        }
        count
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the registry holds no entries
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Keys with a cached entry
    pub fn keys(&self) -> Vec<AccessorKey> {
        self.read().keys().cloned().collect()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<AccessorKey, Instance>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<AccessorKey, Instance>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
