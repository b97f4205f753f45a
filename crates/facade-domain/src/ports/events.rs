//! Observer callback types

use crate::value_objects::QueryExecuted;
use std::sync::Arc;

/// Listener registered once at bootstrap and invoked for every executed statement
pub type QueryListener = Arc<dyn Fn(&QueryExecuted) + Send + Sync>;
