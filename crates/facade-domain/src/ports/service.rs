//! Service Port
//!
//! Every instance a facade forwards to implements [`Service`]. Calls arrive
//! as a method name plus positional JSON arguments; each implementation maps
//! the name onto its own method table and reports unknown names with
//! [`Error::MethodNotFound`](crate::error::Error::MethodNotFound).

use crate::error::Result;
use downcast_rs::{DowncastSync, impl_downcast};
use serde_json::Value;
use std::fmt::Debug;

/// Forwarded-call capability shared by real services and mocks
///
/// # Example
///
/// ```rust
/// use facade_domain::error::{Error, Result};
/// use facade_domain::ports::Service;
/// use facade_domain::value_objects::Arguments;
/// use serde_json::{Value, json};
///
/// #[derive(Debug)]
/// struct Greeter;
///
/// impl Service for Greeter {
///     fn service_name(&self) -> &str {
///         "Greeter"
///     }
///
///     fn call(&self, method: &str, args: &[Value]) -> Result<Value> {
///         let args = Arguments::new(method, args);
///         match method {
///             "greet" => {
///                 let name: String = args.required(0)?;
///                 Ok(json!(format!("hello {name}")))
///             }
///             _ => Err(Error::method_not_found(self.service_name(), method)),
///         }
///     }
/// }
///
/// let greeting = Greeter.call("greet", &[json!("ada")]).unwrap();
/// assert_eq!(greeting, json!("hello ada"));
/// ```
pub trait Service: DowncastSync + Debug {
    /// Name used in diagnostics and as the default mock name
    fn service_name(&self) -> &str;

    /// Invoke `method` with positional `args`
    fn call(&self, method: &str, args: &[Value]) -> Result<Value>;

    /// Methods this service answers, when it publishes its method table
    fn methods(&self) -> &[&'static str] {
        &[]
    }
}

impl_downcast!(sync Service);
