//! Service Container Port
//!
//! The facade layer is defined entirely in terms of this contract. A
//! container owns bindings from accessor keys to factories or already-built
//! instances and resolves a key to a concrete service on demand.
//!
//! ## Resolution order
//!
//! ```text
//! swapped instance → registered/memoized instance → binding factory → None
//! ```

use crate::error::Result;
use crate::ports::service::Service;
use crate::value_objects::AccessorKey;
use std::sync::Arc;

/// Factory building a service, given access to the container for its dependencies
pub type ServiceFactory =
    Arc<dyn Fn(&dyn ServiceContainer) -> Result<Arc<dyn Service>> + Send + Sync>;

/// Callback invoked after the container builds a service for a key
pub type ResolvingCallback = Arc<dyn Fn(&Arc<dyn Service>) + Send + Sync>;

/// Binding and resolution contract of the service container
pub trait ServiceContainer: Send + Sync {
    /// Bind `key` to `factory`; shared bindings build once and memoize
    fn bind(&self, key: AccessorKey, factory: ServiceFactory, shared: bool);

    /// Register an already-built instance under `key`
    fn instance(&self, key: AccessorKey, service: Arc<dyn Service>);

    /// Install a swapped instance that shadows the binding for `key`
    fn swap_instance(&self, key: AccessorKey, service: Arc<dyn Service>);

    /// Drop the swapped instance for `key`, restoring the original binding
    fn forget_swapped(&self, key: &AccessorKey);

    /// Drop every swapped instance
    fn forget_all_swapped(&self);

    /// Resolve `key`, returning `None` when nothing is bound under it
    fn resolve(&self, key: &AccessorKey) -> Result<Option<Arc<dyn Service>>>;

    /// Whether anything is bound or registered under `key`
    fn bound(&self, key: &AccessorKey) -> bool;

    /// Whether `key` has been resolved or has a registered instance
    fn resolved(&self, key: &AccessorKey) -> bool;

    /// Run `callback` every time the container builds a service for `key`
    fn after_resolving(&self, key: AccessorKey, callback: ResolvingCallback);
}
