//! Query Observer
//!
//! Listeners are registered once at bootstrap and invoked synchronously, in
//! registration order, for every executed statement. The payload is passed
//! through untouched.

use facade_domain::ports::QueryListener;
use facade_domain::value_objects::QueryExecuted;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Fan-out hook for executed statements
#[derive(Default)]
pub struct QueryObserver {
    listeners: RwLock<Vec<QueryListener>>,
}

impl QueryObserver {
    /// Observer without listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Observer with the tracing listener already registered
    pub fn with_logging() -> Self {
        let observer = Self::new();
        observer.listen(log_query);
        observer
    }

    /// Register `listener` for every later dispatch
    pub fn listen<F>(&self, listener: F)
    where
        F: Fn(&QueryExecuted) + Send + Sync + 'static,
    {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    /// Hand `event` to every listener
    pub fn dispatch(&self, event: &QueryExecuted) {
        let listeners = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in &listeners {
            listener(event);
        }
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl fmt::Debug for QueryObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryObserver")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Listener logging each statement at debug level
pub fn log_query(event: &QueryExecuted) {
    debug!(
        sql = %event.sql,
        bindings = %serde_json::Value::from(event.bindings.clone()),
        elapsed_ms = event.elapsed_ms,
        "Query executed"
    );
}
