//! System clock service

use chrono::{SecondsFormat, Utc};
use facade_domain::error::{Error, Result};
use facade_domain::ports::Service;
use serde_json::{Value, json};

/// Wall clock backed by the system time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    /// Create the clock
    pub fn new() -> Self {
        Self
    }
}

impl Service for SystemClock {
    fn service_name(&self) -> &str {
        "SystemClock"
    }

    fn call(&self, method: &str, _args: &[Value]) -> Result<Value> {
        match method {
            "now" => Ok(json!(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))),
            "timestamp" => Ok(json!(Utc::now().timestamp())),
            _ => Err(Error::method_not_found(self.service_name(), method)),
        }
    }

    fn methods(&self) -> &[&'static str] {
        &["now", "timestamp"]
    }
}
