//! Bootstrap - Composition Root
//!
//! Wires the container, the facade context, the alias resolver and the
//! query observer into one [`AppContext`].
//!
//! ```text
//! AppConfig → Container (default services)
//!                 ↓
//!          register_facades → FacadeApplication + AliasResolver
//!                 ↓
//!            AppContext ← QueryObserver
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(AppConfig::default())?;
//!
//! let now = context.facade::<Clock>().forward("now", &[])?;
//! let cache = context.proxy_for("Cache");
//! ```

use crate::alias::{AliasResolver, PackageManifest};
use crate::config::{AppConfig, FacadesConfig};
use crate::container::Container;
use crate::events::QueryObserver;
use crate::facade::{Facade, FacadeApplication, FacadeProxy, find_facade};
use crate::services::register_default_services;
use facade_domain::error::Result;
use facade_domain::ports::ServiceContainer;
use facade_domain::value_objects::AccessorKey;
use std::sync::Arc;
use tracing::info;

/// Install `container` into `app` and build the alias resolver
///
/// Previously resolved instances are cleared once the container is in
/// place, so nothing resolved before bootstrap survives it. A rejected
/// second bootstrap leaves the live context untouched.
pub fn register_facades(
    app: &FacadeApplication,
    container: Arc<dyn ServiceContainer>,
    config: &FacadesConfig,
) -> Result<AliasResolver> {
    app.set_application(container)?;
    app.clear_resolved_instances();

    let manifest = if config.discover_packages {
        PackageManifest::discover().without_packages(config.dont_discover.iter().cloned())
    } else {
        PackageManifest::empty()
    };

    let aliases = AliasResolver::from_sources(&config.aliases, &manifest);
    aliases.register();

    info!(
        aliases = aliases.len(),
        packages = manifest.packages().len(),
        "Facades registered"
    );
    Ok(aliases)
}

/// Application context holding everything bootstrap produced
#[derive(Debug)]
pub struct AppContext {
    config: Arc<AppConfig>,
    facades: Arc<FacadeApplication>,
    container: Arc<Container>,
    aliases: Arc<AliasResolver>,
    queries: Arc<QueryObserver>,
}

impl AppContext {
    /// Configuration the context was built from
    pub fn config(&self) -> &Arc<AppConfig> {
        &self.config
    }

    /// Facade context
    pub fn facades(&self) -> &Arc<FacadeApplication> {
        &self.facades
    }

    /// Service container
    pub fn container(&self) -> &Arc<Container> {
        &self.container
    }

    /// Alias resolver
    pub fn aliases(&self) -> &Arc<AliasResolver> {
        &self.aliases
    }

    /// Query observer hook
    pub fn queries(&self) -> &Arc<QueryObserver> {
        &self.queries
    }

    /// Proxy for facade type `F`
    pub fn facade<F: Facade>(&self) -> FacadeProxy {
        F::proxy(&self.facades)
    }

    /// Proxy for an accessor key
    pub fn proxy(&self, key: impl Into<AccessorKey>) -> FacadeProxy {
        self.facades.proxy(key)
    }

    /// Proxy for `name`: an alias of a registered facade, or else a raw accessor key
    pub fn proxy_for(&self, name: &str) -> FacadeProxy {
        let key = self
            .aliases
            .resolve(name)
            .and_then(|target| find_facade(&target))
            .map_or_else(|| AccessorKey::from(name.to_string()), |entry| entry.accessor_key());
        self.facades.proxy(key)
    }
}

/// Build the application context from `config`
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    info!("Initializing facade application");

    let container = Arc::new(Container::new());
    register_default_services(&container);

    let facades = FacadeApplication::new();
    let aliases = register_facades(&facades, container.clone(), &config.facades)?;
    let queries = QueryObserver::with_logging();

    Ok(AppContext {
        config: Arc::new(config),
        facades,
        container,
        aliases: Arc::new(aliases),
        queries: Arc::new(queries),
    })
}
