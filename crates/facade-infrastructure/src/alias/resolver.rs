//! Alias Resolver
//!
//! Maps short names to fully-qualified facade type names. Entries are
//! merged up front but only loaded on first reference, after which the
//! loaded mapping is served from a concurrent cache.

use super::manifest::PackageManifest;
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info};

/// Lazy short-name → type-name resolver
#[derive(Debug, Default)]
pub struct AliasResolver {
    aliases: RwLock<BTreeMap<String, String>>,
    loaded: DashMap<String, String>,
    registered: AtomicBool,
}

impl AliasResolver {
    /// Resolver over an explicit alias table
    pub fn new(aliases: BTreeMap<String, String>) -> Self {
        Self {
            aliases: RwLock::new(aliases),
            loaded: DashMap::new(),
            registered: AtomicBool::new(false),
        }
    }

    /// Merge manifest aliases with configured ones; configured entries win
    pub fn from_sources(configured: &BTreeMap<String, String>, manifest: &PackageManifest) -> Self {
        let mut aliases = manifest.aliases();
        aliases.extend(
            configured
                .iter()
                .map(|(alias, target)| (alias.clone(), target.clone())),
        );
        Self::new(aliases)
    }

    /// Start answering lookups; returns false if already registered
    pub fn register(&self) -> bool {
        let first = !self.registered.swap(true, Ordering::SeqCst);
        if first {
            info!(aliases = self.len(), "Alias resolver registered");
        }
        first
    }

    /// Whether [`register`](Self::register) has been called
    pub fn is_registered(&self) -> bool {
        self.registered.load(Ordering::SeqCst)
    }

    /// Target for `alias`; loads and caches the mapping on first reference
    pub fn resolve(&self, alias: &str) -> Option<String> {
        if !self.is_registered() {
            return None;
        }
        if let Some(target) = self.loaded.get(alias) {
            return Some(target.value().clone());
        }

        let target = self
            .aliases
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(alias)
            .cloned()?;
        debug!(alias, target = %target, "Alias loaded");
        Some(
            self.loaded
                .entry(alias.to_string())
                .or_insert(target)
                .value()
                .clone(),
        )
    }

    /// Whether `alias` has been loaded
    pub fn is_loaded(&self, alias: &str) -> bool {
        self.loaded.contains_key(alias)
    }

    /// Add or replace an alias; a previously loaded mapping is dropped
    pub fn add_alias(&self, alias: impl Into<String>, target: impl Into<String>) {
        let alias = alias.into();
        self.loaded.remove(&alias);
        self.aliases
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(alias, target.into());
    }

    /// Snapshot of the merged alias table
    pub fn aliases(&self) -> BTreeMap<String, String> {
        self.aliases
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of known aliases
    pub fn len(&self) -> usize {
        self.aliases
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no alias is known
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
