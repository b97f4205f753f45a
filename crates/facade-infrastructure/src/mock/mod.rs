//! Test doubles for facades: mocks, spies and partial mocks installed into
//! the resolved-instance registry.

pub mod expectation;
pub mod instance;
mod substitution;

pub use expectation::{CallCount, ExpectationBuilder};
pub use instance::{MockInstance, MockKind, RecordedCall};
