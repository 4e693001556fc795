//! Error taxonomies and scan statistics.

mod stats;
mod types;

// Re-export public API
pub use stats::{print_scan_statistics, ScanStats};
pub use types::{ErrorType, InfoType, InitializationError, WarningType};
