//! Error type definitions.
//!
//! This module defines initialization errors plus the error, warning, and
//! info taxonomies tallied by [`super::ScanStats`] during a scan.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    #[allow(dead_code)] // Reserved for resolver configs that can fail
    DnsResolverError(String),
}

/// Hard failures observed during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// A record query timed out.
    RecordTimeout,
    /// A record query failed outside the classified conditions.
    RecordResolutionError,
    /// A WHOIS lookup failed (absorbed; registration left absent).
    RegistrationLookupError,
    /// A whole domain task failed and was omitted from the report.
    DomainTaskError,
}

/// Missing-but-expected data; not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    /// A name exists but has no records of a queried type.
    RecordNoAnswer,
    /// A scanned domain does not exist (NXDOMAIN).
    DomainNonExistent,
    /// The zone transfer was refused or failed.
    ZoneTransferUnavailable,
}

/// Notable events that are neither errors nor warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// A nameserver actually handed over its zone.
    ZoneTransferSucceeded,
}
