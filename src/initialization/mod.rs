//! Application initialization and resource setup.
//!
//! Provides the shared-resource constructors: the logger, the DNS
//! resolver, and the concurrency semaphore.

mod logger;
mod resolver;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Initializes a semaphore for controlling concurrency.
///
/// The engine acquires one permit per domain task, so the permit count caps
/// how many domains run their network work at any instant.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count))
}
