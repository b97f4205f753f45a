//! Facade proxies, the resolved-instance registry and the context tying them
//! to a container.

pub mod application;
pub mod catalog;
pub mod instance;
pub mod proxy;
pub mod registry;

pub use application::{FacadeApplication, ResolveTarget, UnitOfWork};
pub use catalog::{FACADES, FacadeEntry, find_facade, list_facades};
pub use instance::Instance;
pub use proxy::{Facade, FacadeProxy};
pub use registry::ResolvedInstanceRegistry;
