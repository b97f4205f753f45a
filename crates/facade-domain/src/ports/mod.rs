//! Domain Port Interfaces
//!
//! Boundary contracts between the facade layer and the services and
//! container it is defined in terms of.
//!
//! ## Organization
//!
//! - **service** - Capability set every facade-backed instance satisfies
//! - **container** - Binding and resolution contract of the service container
//! - **events** - Observer callbacks invoked by collaborators

/// Service container contract
pub mod container;
/// Observer callback types
pub mod events;
/// Forwarded-call capability
pub mod service;

pub use container::{ResolvingCallback, ServiceContainer, ServiceFactory};
pub use events::QueryListener;
pub use service::Service;
