//! Log Service
//!
//! Records every entry it receives and emits it as a `tracing` event, so a
//! facade call shows up both in the service history and in the subscriber.

use chrono::{DateTime, Utc};
use facade_domain::error::{Error, Result};
use facade_domain::ports::Service;
use facade_domain::value_objects::Arguments;
use serde::Serialize;
use serde_json::Value;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, error, info, warn};

/// Recorded log entry
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Level the entry was written at
    pub level: String,
    /// Message text
    pub message: String,
    /// Structured context, null when none was given
    pub context: Value,
    /// When the entry was written
    pub logged_at: DateTime<Utc>,
}

/// Logger recording entries in memory
#[derive(Debug, Default)]
pub struct LogService {
    entries: Mutex<Vec<LogEntry>>,
}

impl LogService {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries written so far
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn write(&self, level: &str, args: &Arguments<'_>) -> Result<Value> {
        let message: String = args.required(0)?;
        let context: Value = args.optional(1)?.unwrap_or(Value::Null);

        match level {
            "error" => error!(target: "facade::log", %context, "{message}"),
            "warning" => warn!(target: "facade::log", %context, "{message}"),
            "debug" => debug!(target: "facade::log", %context, "{message}"),
            _ => info!(target: "facade::log", %context, "{message}"),
        }

        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LogEntry {
                level: level.to_string(),
                message,
                context,
                logged_at: Utc::now(),
            });
        Ok(Value::Null)
    }
}

impl Service for LogService {
    fn service_name(&self) -> &str {
        "LogService"
    }

    fn call(&self, method: &str, args: &[Value]) -> Result<Value> {
        let args = Arguments::new(method, args);
        match method {
            "info" | "warning" | "error" | "debug" => self.write(method, &args),
            "entries" => Ok(serde_json::to_value(self.entries())?),
            _ => Err(Error::method_not_found(self.service_name(), method)),
        }
    }

    fn methods(&self) -> &[&'static str] {
        &["info", "warning", "error", "debug", "entries"]
    }
}
