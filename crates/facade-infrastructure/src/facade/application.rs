//! Facade Application Context
//!
//! Explicit replacement for a process-wide static registry. One
//! [`FacadeApplication`] owns the installed container handle and the
//! resolved-instance registry; every proxy holds a shared reference to it.
//!
//! ## Resolution
//!
//! ```text
//! resolve_facade_instance(target)
//!   ├─ Instance(i)          → i                (identity pass-through)
//!   ├─ registry[key]        → cached instance
//!   ├─ container.resolve()  → cache (if caching) → instance
//!   └─ no container / None  → Ok(None)
//! ```
//!
//! A clear that lands while the container is building wins: the stale
//! result is dropped and resolution starts over.
//!
//! ## Lifecycle
//!
//! ```text
//! new() → set_application(container) → begin_unit() ... drop → destroy()
//! ```

use super::instance::Instance;
use super::proxy::FacadeProxy;
use super::registry::ResolvedInstanceRegistry;
use facade_domain::error::{Error, Result};
use facade_domain::ports::ServiceContainer;
use facade_domain::value_objects::AccessorKey;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, info, warn};

/// What a facade resolves: a key to look up, or an instance used as-is
#[derive(Debug, Clone)]
pub enum ResolveTarget {
    /// Accessor key resolved through the registry and container
    Key(AccessorKey),
    /// Instance returned unchanged
    Instance(Instance),
}

impl From<AccessorKey> for ResolveTarget {
    fn from(key: AccessorKey) -> Self {
        Self::Key(key)
    }
}

impl From<&AccessorKey> for ResolveTarget {
    fn from(key: &AccessorKey) -> Self {
        Self::Key(key.clone())
    }
}

impl From<&'static str> for ResolveTarget {
    fn from(name: &'static str) -> Self {
        Self::Key(AccessorKey::from(name))
    }
}

impl From<Instance> for ResolveTarget {
    fn from(instance: Instance) -> Self {
        Self::Instance(instance)
    }
}

/// Shared facade context: container handle plus resolved-instance registry
pub struct FacadeApplication {
    container: RwLock<Option<Arc<dyn ServiceContainer>>>,
    registry: ResolvedInstanceRegistry,
    // Serializes mutations that touch both the registry and the container
    mutation: Mutex<()>,
    // Bumped by every clear; a resolution that straddles one is discarded
    generation: AtomicU64,
}

impl FacadeApplication {
    /// Create a context with no container installed and an empty registry
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            container: RwLock::new(None),
            registry: ResolvedInstanceRegistry::new(),
            mutation: Mutex::new(()),
            generation: AtomicU64::new(0),
        })
    }

    /// Install the container handle; fails if one is already installed
    pub fn set_application(&self, container: Arc<dyn ServiceContainer>) -> Result<()> {
        let _guard = self.lock_mutation();
        let mut slot = self
            .container
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            warn!("Facade application already installed, ignoring second bootstrap");
            return Err(Error::configuration(
                "a facade application container is already installed",
            ));
        }
        *slot = Some(container);
        info!("Facade application container installed");
        Ok(())
    }

    /// The installed container handle
    pub fn application(&self) -> Option<Arc<dyn ServiceContainer>> {
        self.container
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a container handle is installed
    pub fn has_application(&self) -> bool {
        self.container
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// The resolved-instance registry
    pub fn registry(&self) -> &ResolvedInstanceRegistry {
        &self.registry
    }

    /// Resolve `target`, caching container results in the registry
    pub fn resolve_facade_instance(
        &self,
        target: impl Into<ResolveTarget>,
    ) -> Result<Option<Instance>> {
        self.resolve_with(target.into(), true)
    }

    pub(crate) fn resolve_with(&self, target: ResolveTarget, cache: bool) -> Result<Option<Instance>> {
        let key = match target {
            ResolveTarget::Instance(instance) => return Ok(Some(instance)),
            ResolveTarget::Key(key) => key,
        };

        loop {
            let generation = self.generation.load(Ordering::SeqCst);

            if let Some(instance) = self.registry.get(&key) {
                return Ok(Some(instance));
            }

            let Some(container) = self.application() else {
                debug!(accessor = %key, "No facade application installed");
                return Ok(None);
            };

            // The container may run a factory, so it is consulted unlocked
            let Some(service) = container.resolve(&key)? else {
                return Ok(None);
            };
            let instance = Instance::from(service);

            let _guard = self.lock_mutation();
            if self.generation.load(Ordering::SeqCst) != generation {
                debug!(accessor = %key, "Resolved instances cleared during resolution, retrying");
                continue;
            }
            if !cache {
                return Ok(Some(instance));
            }

            let cached = self.registry.insert_if_absent(key.clone(), instance);
            debug!(accessor = %key, service = cached.service_name(), "Facade instance resolved");
            return Ok(Some(cached));
        }
    }

    /// Make `key` resolve to `instance` in the registry and the container
    pub fn swap(&self, key: &AccessorKey, instance: Instance) {
        let _guard = self.lock_mutation();
        if let Some(container) = self.application() {
            container.swap_instance(key.clone(), instance.as_service());
        }
        self.registry.insert(key.clone(), instance);
    }

    /// Forget the resolved instance for `key`, restoring its original binding
    pub fn clear_resolved_instance(&self, key: &AccessorKey) {
        let _guard = self.lock_mutation();
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.registry.remove(key);
        if let Some(container) = self.application() {
            container.forget_swapped(key);
        }
    }

    /// Forget every resolved instance and every swapped container instance
    pub fn clear_resolved_instances(&self) {
        let _guard = self.lock_mutation();
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.registry.reset();
        if let Some(container) = self.application() {
            container.forget_all_swapped();
        }
    }

    /// Clear all state and uninstall the container handle
    pub fn destroy(&self) {
        self.clear_resolved_instances();
        let _guard = self.lock_mutation();
        let previous = self
            .container
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if previous.is_some() {
            info!("Facade application destroyed");
        }
    }

    /// Open a unit of work; the registry is reset now and again when the guard drops
    pub fn begin_unit(self: &Arc<Self>) -> UnitOfWork {
        self.clear_resolved_instances();
        debug!("Unit of work started");
        UnitOfWork {
            app: Arc::clone(self),
        }
    }

    /// Proxy for `key` bound to this context
    pub fn proxy(self: &Arc<Self>, key: impl Into<AccessorKey>) -> FacadeProxy {
        FacadeProxy::new(key.into(), Arc::clone(self))
    }

    fn lock_mutation(&self) -> std::sync::MutexGuard<'_, ()> {
        self.mutation.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for FacadeApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacadeApplication")
            .field("has_application", &self.has_application())
            .field("resolved", &self.registry.len())
            .finish()
    }
}

/// Unit-of-work boundary guard
///
/// Swapped instances and mocks never outlive the unit that installed them.
#[must_use = "the registry is reset when the unit of work is dropped"]
#[derive(Debug)]
pub struct UnitOfWork {
    app: Arc<FacadeApplication>,
}

impl UnitOfWork {
    /// Context this unit runs against
    pub fn application(&self) -> &Arc<FacadeApplication> {
        &self.app
    }
}

impl Drop for UnitOfWork {
    fn drop(&mut self) {
        self.app.clear_resolved_instances();
        debug!("Unit of work finished");
    }
}
