//! Application-level helpers: domain-list handling and progress logging.

mod domains;
mod logging;

// Re-export public API
pub use domains::{dedup_preserving_order, load_domains, normalize_domain};
pub use logging::log_progress;
