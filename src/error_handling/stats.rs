//! Scan statistics tracking.
//!
//! Thread-safe counters over the error/warning/info taxonomies, shared
//! across domain tasks via `Arc`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType, WarningType};

/// Thread-safe scan statistics tracker.
///
/// Every taxonomy variant gets a counter at construction, so increments
/// never allocate and can run concurrently from any number of tasks.
pub struct ScanStats {
    errors: HashMap<ErrorType, AtomicUsize>,
    warnings: HashMap<WarningType, AtomicUsize>,
    info: HashMap<InfoType, AtomicUsize>,
}

impl ScanStats {
    /// Creates a tracker with every counter initialized to zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }

        let mut warnings = HashMap::new();
        for warning in WarningType::iter() {
            warnings.insert(warning, AtomicUsize::new(0));
        }

        let mut info = HashMap::new();
        for info_type in InfoType::iter() {
            info.insert(info_type, AtomicUsize::new(0));
        }

        ScanStats {
            errors,
            warnings,
            info,
        }
    }

    /// Increments the counter for `error`.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Increments the counter for `warning`.
    pub fn increment_warning(&self, warning: WarningType) {
        if let Some(counter) = self.warnings.get(&warning) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Increments the counter for `info`.
    pub fn increment_info(&self, info: InfoType) {
        if let Some(counter) = self.info.get(&info) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Current count for `error`.
    pub fn error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    /// Current count for `warning`.
    pub fn warning_count(&self, warning: WarningType) -> usize {
        self.warnings
            .get(&warning)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    /// Current count for `info`.
    pub fn info_count(&self, info: InfoType) -> usize {
        self.info
            .get(&info)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }
}

impl Default for ScanStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Logs every non-zero counter at the end of a run.
pub fn print_scan_statistics(stats: &ScanStats) {
    let mut any = false;

    for error in ErrorType::iter() {
        let count = stats.error_count(error);
        if count > 0 {
            log::info!("{error:?}: {count}");
            any = true;
        }
    }
    for warning in WarningType::iter() {
        let count = stats.warning_count(warning);
        if count > 0 {
            log::info!("{warning:?}: {count}");
            any = true;
        }
    }
    for info in InfoType::iter() {
        let count = stats.info_count(info);
        if count > 0 {
            log::info!("{info:?}: {count}");
            any = true;
        }
    }

    if !any {
        log::info!("No errors or warnings recorded during the scan");
    }
}
