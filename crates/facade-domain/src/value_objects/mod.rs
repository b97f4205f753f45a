//! Domain Value Objects
//!
//! Immutable value objects shared by the container, the facade registry
//! and the services they resolve.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`AccessorKey`] | Identifier naming a logical service behind a facade |
//! | [`Arguments`] | Typed view over the positional arguments of a forwarded call |
//! | [`QueryExecuted`] | Payload handed to query observers |

/// Accessor keys for facades and container bindings
pub mod accessor;
/// Positional arguments of forwarded calls
pub mod arguments;
/// Executed statement payloads
pub mod query;

pub use accessor::AccessorKey;
pub use arguments::Arguments;
pub use query::QueryExecuted;
