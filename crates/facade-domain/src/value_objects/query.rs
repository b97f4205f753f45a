//! Executed Statement Payload

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event payload describing one executed statement
///
/// Produced by the data-access layer and handed unchanged to every query
/// observer. Nothing in the facade layer inspects or validates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryExecuted {
    /// Statement text
    pub sql: String,
    /// Ordered parameter bindings
    pub bindings: Vec<Value>,
    /// Execution time in milliseconds
    pub elapsed_ms: f64,
}

impl QueryExecuted {
    /// Create a new executed statement payload
    pub fn new<S: Into<String>>(sql: S, bindings: Vec<Value>, elapsed_ms: f64) -> Self {
        Self {
            sql: sql.into(),
            bindings,
            elapsed_ms,
        }
    }
}
