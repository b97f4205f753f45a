//! Forwarded Call Arguments
//!
//! Facades forward calls as a method name plus positional JSON values.
//! [`Arguments`] gives services typed access to those values without each
//! implementation re-implementing bounds and conversion checks.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Typed view over the positional arguments of one forwarded call
///
/// ## Example
///
/// ```rust
/// use facade_domain::value_objects::Arguments;
/// use serde_json::json;
///
/// let values = [json!("greeting"), json!(3)];
/// let args = Arguments::new("put", &values);
///
/// let key: String = args.required(0).unwrap();
/// let ttl: Option<u64> = args.optional(1).unwrap();
/// assert_eq!(key, "greeting");
/// assert_eq!(ttl, Some(3));
/// assert!(args.required::<String>(2).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    method: &'a str,
    values: &'a [Value],
}

impl<'a> Arguments<'a> {
    /// Wrap the arguments of a call to `method`
    pub fn new(method: &'a str, values: &'a [Value]) -> Self {
        Self { method, values }
    }

    /// Method the arguments belong to
    pub fn method(&self) -> &'a str {
        self.method
    }

    /// Number of positional arguments
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the call carries no arguments
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw argument at `index`
    pub fn get(&self, index: usize) -> Option<&'a Value> {
        self.values.get(index)
    }

    /// Deserialize the argument at `index`, failing when it is missing
    pub fn required<T: DeserializeOwned>(&self, index: usize) -> Result<T> {
        let value = self.values.get(index).ok_or_else(|| {
            Error::invalid_argument(format!(
                "{}() expects an argument at position {}",
                self.method, index
            ))
        })?;
        self.convert(index, value)
    }

    /// Deserialize the argument at `index` if present and not null
    pub fn optional<T: DeserializeOwned>(&self, index: usize) -> Result<Option<T>> {
        match self.values.get(index) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => self.convert(index, value).map(Some),
        }
    }

    fn convert<T: DeserializeOwned>(&self, index: usize, value: &Value) -> Result<T> {
        serde_json::from_value(value.clone()).map_err(|e| {
            Error::invalid_argument(format!(
                "{}() argument {} has the wrong type: {}",
                self.method, index, e
            ))
        })
    }
}

/// Render call arguments for diagnostics
pub fn render(values: &[Value]) -> String {
    values
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
