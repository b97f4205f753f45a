//! Service Container
//!
//! Concrete [`ServiceContainer`] owning accessor bindings. Shared bindings
//! build once and memoize; plain bindings build a new instance on every
//! resolution. Swapped instances shadow both until forgotten.
//!
//! ## Resolution
//!
//! ```text
//! resolve(key)
//!   ├─ swapped[key]   → return
//!   ├─ instances[key] → return
//!   ├─ bindings[key]  → build ─┬─ shared → memoize in instances
//!   │                          └─ after-resolving callbacks
//!   └─ None
//! ```
//!
//! Factories run without any container lock held, so a factory may resolve
//! its own dependencies through the container it receives.

use facade_domain::error::Result;
use facade_domain::ports::{ResolvingCallback, Service, ServiceContainer, ServiceFactory};
use facade_domain::value_objects::AccessorKey;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

#[derive(Clone)]
struct Binding {
    factory: ServiceFactory,
    shared: bool,
}

#[derive(Default)]
struct ContainerState {
    bindings: HashMap<AccessorKey, Binding>,
    instances: HashMap<AccessorKey, Arc<dyn Service>>,
    swapped: HashMap<AccessorKey, Arc<dyn Service>>,
    resolved: HashSet<AccessorKey>,
    callbacks: HashMap<AccessorKey, Vec<ResolvingCallback>>,
}

/// In-process service container
///
/// # Example
///
/// ```ignore
/// let container = Container::new();
/// container.singleton("clock", |_| Ok(Arc::new(SystemClock::new())));
/// container.factory("request_id", |_| Ok(Arc::new(RequestId::generate())));
///
/// let clock = container.resolve(&"clock".into())?.expect("bound");
/// ```
#[derive(Default)]
pub struct Container {
    state: RwLock<ContainerState>,
}

impl Container {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a shared factory: built on first resolution, memoized afterwards
    pub fn singleton<K, F>(&self, key: K, factory: F)
    where
        K: Into<AccessorKey>,
        F: Fn(&dyn ServiceContainer) -> Result<Arc<dyn Service>> + Send + Sync + 'static,
    {
        self.bind(key.into(), Arc::new(factory), true);
    }

    /// Bind a factory that builds a new instance on every resolution
    pub fn factory<K, F>(&self, key: K, factory: F)
    where
        K: Into<AccessorKey>,
        F: Fn(&dyn ServiceContainer) -> Result<Arc<dyn Service>> + Send + Sync + 'static,
    {
        self.bind(key.into(), Arc::new(factory), false);
    }

    /// Whether `key` currently resolves to a swapped instance
    pub fn is_swapped(&self, key: &AccessorKey) -> bool {
        self.read().swapped.contains_key(key)
    }

    /// Keys with a binding, a registered instance or a swapped instance
    pub fn keys(&self) -> Vec<AccessorKey> {
        let state = self.read();
        let mut keys: HashSet<AccessorKey> = state.bindings.keys().cloned().collect();
        keys.extend(state.instances.keys().cloned());
        keys.extend(state.swapped.keys().cloned());
        let mut keys: Vec<AccessorKey> = keys.into_iter().collect();
        keys.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        keys
    }

    fn read(&self) -> RwLockReadGuard<'_, ContainerState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ContainerState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn lookup(&self, key: &AccessorKey) -> std::result::Result<Arc<dyn Service>, Option<Binding>> {
        let state = self.read();
        if let Some(service) = state.swapped.get(key).or_else(|| state.instances.get(key)) {
            return Ok(service.clone());
        }
        Err(state.bindings.get(key).cloned())
    }
}

impl ServiceContainer for Container {
    fn bind(&self, key: AccessorKey, factory: ServiceFactory, shared: bool) {
        debug!(accessor = %key, shared, "Binding service");
        let mut state = self.write();
        // A rebind invalidates whatever the previous binding memoized
        state.instances.remove(&key);
        state.bindings.insert(key, Binding { factory, shared });
    }

    fn instance(&self, key: AccessorKey, service: Arc<dyn Service>) {
        debug!(accessor = %key, service = service.service_name(), "Registering instance");
        self.write().instances.insert(key, service);
    }

    fn swap_instance(&self, key: AccessorKey, service: Arc<dyn Service>) {
        debug!(accessor = %key, service = service.service_name(), "Swapping container instance");
        self.write().swapped.insert(key, service);
    }

    fn forget_swapped(&self, key: &AccessorKey) {
        if self.write().swapped.remove(key).is_some() {
            debug!(accessor = %key, "Forgot swapped container instance");
        }
    }

    fn forget_all_swapped(&self) {
        let mut state = self.write();
        if !state.swapped.is_empty() {
            debug!(count = state.swapped.len(), "Forgetting all swapped container instances");
            state.swapped.clear();
        }
    }

    fn resolve(&self, key: &AccessorKey) -> Result<Option<Arc<dyn Service>>> {
        let binding = match self.lookup(key) {
            Ok(service) => return Ok(Some(service)),
            Err(None) => return Ok(None),
            Err(Some(binding)) => binding,
        };

        let built = (binding.factory)(self)?;

        let (service, callbacks) = {
            let mut state = self.write();
            let service = if binding.shared {
                // First writer wins when two callers race to build a singleton
                state
                    .instances
                    .entry(key.clone())
                    .or_insert(built)
                    .clone()
            } else {
                built
            };
            state.resolved.insert(key.clone());
            let callbacks = state.callbacks.get(key).cloned().unwrap_or_default();
            (service, callbacks)
        };

        debug!(accessor = %key, service = service.service_name(), shared = binding.shared, "Built service");

        for callback in callbacks {
            callback(&service);
        }

        Ok(Some(service))
    }

    fn bound(&self, key: &AccessorKey) -> bool {
        let state = self.read();
        state.bindings.contains_key(key)
            || state.instances.contains_key(key)
            || state.swapped.contains_key(key)
    }

    fn resolved(&self, key: &AccessorKey) -> bool {
        let state = self.read();
        state.resolved.contains(key)
            || state.instances.contains_key(key)
            || state.swapped.contains_key(key)
    }

    fn after_resolving(&self, key: AccessorKey, callback: ResolvingCallback) {
        self.write().callbacks.entry(key).or_default().push(callback);
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("Container")
            .field("bindings", &state.bindings.len())
            .field("instances", &state.instances.len())
            .field("swapped", &state.swapped.len())
            .finish()
    }
}
