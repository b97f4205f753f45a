//! In-memory cache service

use dashmap::DashMap;
use facade_domain::error::{Error, Result};
use facade_domain::ports::Service;
use facade_domain::value_objects::Arguments;
use serde_json::Value;

/// Key/value cache held in process memory
#[derive(Debug, Default)]
pub struct ArrayCache {
    entries: DashMap<String, Value>,
}

impl ArrayCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Service for ArrayCache {
    fn service_name(&self) -> &str {
        "ArrayCache"
    }

    fn call(&self, method: &str, args: &[Value]) -> Result<Value> {
        let args = Arguments::new(method, args);
        match method {
            // get(key, default = null)
            "get" => {
                let key: String = args.required(0)?;
                Ok(self
                    .entries
                    .get(&key)
                    .map(|entry| entry.value().clone())
                    .or_else(|| args.get(1).cloned())
                    .unwrap_or(Value::Null))
            }
            "put" => {
                let key: String = args.required(0)?;
                let value = args.get(1).cloned().unwrap_or(Value::Null);
                self.entries.insert(key, value);
                Ok(Value::Bool(true))
            }
            "has" => {
                let key: String = args.required(0)?;
                Ok(Value::Bool(self.entries.contains_key(&key)))
            }
            "forget" => {
                let key: String = args.required(0)?;
                Ok(Value::Bool(self.entries.remove(&key).is_some()))
            }
            "flush" => {
                self.entries.clear();
                Ok(Value::Bool(true))
            }
            _ => Err(Error::method_not_found(self.service_name(), method)),
        }
    }

    fn methods(&self) -> &[&'static str] {
        &["get", "put", "has", "forget", "flush"]
    }
}
