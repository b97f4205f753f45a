//! # Facade Domain
//!
//! Core types of the facade service locator: the error taxonomy, accessor
//! keys and the ports the infrastructure layer implements.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`ports`] | `Service` capability and `ServiceContainer` contract |
//! | [`value_objects`] | Accessor keys, call arguments, query payloads |

pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Service, ServiceContainer};
pub use value_objects::AccessorKey;
