//! # Infrastructure Layer
//!
//! Container, facade proxies and the technical concerns around them.
//!
//! ## Module Categories
//!
//! ### Resolution
//! | Module | Description |
//! |--------|-------------|
//! | [`container`] | Service container with shared and per-call bindings |
//! | [`facade`] | Facade proxies, resolved-instance registry, application context |
//! | [`mock`] | Mocks, spies and partial mocks installed behind facades |
//! | [`alias`] | Lazy short-name resolution and package alias manifests |
//!
//! ### Configuration & Bootstrap
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML file, environment |
//! | [`bootstrap`] | Composition root producing an `AppContext` |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`events`] | Query observer hook |
//!
//! ### Services
//! | Module | Description |
//! |--------|-------------|
//! | [`services`] | Clock, log and cache services |
//! | [`facades`] | Facades for those services |

pub mod alias;
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod container;
pub mod error_ext;
pub mod events;
pub mod facade;
pub mod facades;
pub mod logging;
pub mod mock;
pub mod services;

// Re-export commonly used types
pub use bootstrap::{AppContext, init_app, register_facades};
pub use container::Container;
pub use error_ext::ErrorContext;
pub use facade::{Facade, FacadeApplication, FacadeProxy, Instance};
pub use mock::MockInstance;
