//! Facade Proxies
//!
//! A [`FacadeProxy`] stands for one accessor key. It resolves the backing
//! instance through its [`FacadeApplication`] and forwards calls to
//! whatever is currently bound, real or mock.

use super::application::{FacadeApplication, ResolveTarget};
use super::instance::Instance;
use facade_domain::error::{Error, Result};
use facade_domain::ports::Service;
use facade_domain::value_objects::AccessorKey;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Static accessor for a service bound in the container
///
/// # Example
///
/// ```ignore
/// struct Cache;
///
/// impl Facade for Cache {
///     fn accessor() -> AccessorKey {
///         AccessorKey::named("cache")
///     }
/// }
///
/// let value = Cache::proxy(&app).forward("get", &[json!("key")])?;
/// ```
pub trait Facade {
    /// Whether resolved instances are cached in the registry
    const CACHED: bool = true;

    /// Key this facade resolves
    fn accessor() -> AccessorKey;

    /// Proxy for this facade bound to `app`
    fn proxy(app: &Arc<FacadeApplication>) -> FacadeProxy {
        app.proxy(Self::accessor()).cached(Self::CACHED)
    }
}

/// Proxy forwarding calls for one accessor key
#[derive(Debug, Clone)]
pub struct FacadeProxy {
    key: AccessorKey,
    app: Arc<FacadeApplication>,
    cached: bool,
}

impl FacadeProxy {
    /// Create a caching proxy for `key`
    pub fn new(key: AccessorKey, app: Arc<FacadeApplication>) -> Self {
        Self {
            key,
            app,
            cached: true,
        }
    }

    /// Set whether container results are cached in the registry
    pub fn cached(mut self, cached: bool) -> Self {
        self.cached = cached;
        self
    }

    /// Key this proxy resolves
    pub fn accessor(&self) -> &AccessorKey {
        &self.key
    }

    /// Context this proxy resolves against
    pub fn facade_application(&self) -> &Arc<FacadeApplication> {
        &self.app
    }

    /// Currently resolvable instance, or `None` when nothing is bound
    pub fn root(&self) -> Result<Option<Instance>> {
        self.app
            .resolve_with(ResolveTarget::Key(self.key.clone()), self.cached)
    }

    /// Backing instance; fails when none can be produced
    pub fn resolve(&self) -> Result<Instance> {
        if let Some(instance) = self.root()? {
            return Ok(instance);
        }
        if self.app.has_application() {
            Err(Error::unbound_accessor(&self.key))
        } else {
            Err(Error::unresolved_root(format!(
                "no application installed while resolving '{}'",
                self.key
            )))
        }
    }

    /// Forward `method` with `args` to the backing instance
    ///
    /// Failures raised by the instance are returned unchanged.
    pub fn forward(&self, method: &str, args: &[Value]) -> Result<Value> {
        let instance = self.resolve()?;
        debug!(accessor = %self.key, method, "Forwarding facade call");
        instance.call(method, args)
    }

    /// Replace the backing instance
    pub fn swap(&self, instance: impl Into<Instance>) {
        let instance = instance.into();
        debug!(accessor = %self.key, service = instance.service_name(), "Swapping facade instance");
        self.app.swap(&self.key, instance);
    }

    /// Forget this proxy's resolved instance
    pub fn clear_resolved(&self) {
        self.app.clear_resolved_instance(&self.key);
    }

    /// Forget every resolved instance in the context
    pub fn clear_all_resolved(&self) {
        self.app.clear_resolved_instances();
    }

    /// Run `callback` with the root now if already resolved, and on every later resolution
    pub fn resolved<F>(&self, callback: F) -> Result<()>
    where
        F: Fn(&Instance) + Send + Sync + 'static,
    {
        let container = self.app.application().ok_or_else(|| {
            Error::unresolved_root(format!(
                "no application installed while registering a resolved callback for '{}'",
                self.key
            ))
        })?;

        let callback = Arc::new(callback);

        if container.resolved(&self.key) {
            if let Some(root) = self.root()? {
                callback(&root);
            }
        }

        container.after_resolving(
            self.key.clone(),
            Arc::new(move |service: &Arc<dyn Service>| {
                callback(&Instance::from(Arc::clone(service)));
            }),
        );
        Ok(())
    }
}
