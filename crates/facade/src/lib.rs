//! # Facade
//!
//! Static accessors over a service container. A facade names a service by
//! accessor key, resolves it lazily, caches it, and forwards arbitrary calls
//! to whatever instance is currently bound, including mocks installed by
//! tests.
//!
//! ## Example
//!
//! ```ignore
//! use facade::infrastructure::{config::AppConfig, facades::Cache, init_app};
//! use serde_json::json;
//!
//! let context = init_app(AppConfig::default())?;
//! let cache = context.facade::<Cache>();
//! cache.forward("put", &[json!("greeting"), json!("hello")])?;
//!
//! // In tests: replace the cache with a mock for this unit of work
//! let _unit = context.facades().begin_unit();
//! cache.should_receive("get")?.and_return(json!("stubbed"));
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Error taxonomy, accessor keys, `Service` and `ServiceContainer` ports
//! - `infrastructure` - Container, registry, proxies, mocks, aliases, config, logging
//! - `cli` - The `facade` command line tool

/// Domain layer - error taxonomy, accessor keys and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use facade_domain::*;
}

/// Infrastructure layer - container, proxies, mocks and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use facade_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the facade surface at the crate root
pub use infrastructure::facade::{Facade, FacadeApplication, FacadeProxy, Instance, UnitOfWork};
pub use infrastructure::mock::{ExpectationBuilder, MockInstance};
pub use infrastructure::{AppContext, Container, init_app};
