//! Demo services bound under the default accessors

pub mod cache;
pub mod clock;
pub mod log;

pub use cache::ArrayCache;
pub use clock::SystemClock;
pub use log::{LogEntry, LogService};

use crate::constants::{CACHE_ACCESSOR, CLOCK_ACCESSOR, LOG_ACCESSOR};
use crate::container::Container;
use facade_domain::ports::Service;
use std::sync::Arc;

/// Bind the clock, log and cache services as singletons
pub fn register_default_services(container: &Container) {
    container.singleton(CLOCK_ACCESSOR, |_| Ok(Arc::new(SystemClock::new()) as Arc<dyn Service>));
    container.singleton(LOG_ACCESSOR, |_| Ok(Arc::new(LogService::new()) as Arc<dyn Service>));
    container.singleton(CACHE_ACCESSOR, |_| Ok(Arc::new(ArrayCache::new()) as Arc<dyn Service>));
}
