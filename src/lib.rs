//! zone_recon library: concurrent DNS reconnaissance
//!
//! For each target domain this library resolves a fixed set of 17 DNS
//! record types, attempts an unauthenticated zone transfer (AXFR), and
//! fetches WHOIS registration metadata, merging the three sources into one
//! per-domain result. Domains are scanned concurrently on a bounded worker
//! pool; every failure mode of DNS resolution is classified into a stable
//! outcome vocabulary instead of surfacing as an error.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use zone_recon::initialization::init_resolver;
//! use zone_recon::{DigZoneTransfer, HickoryLookup, ReconEngine, WhoisClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = init_resolver()?;
//! let engine = ReconEngine::new(
//!     Arc::new(HickoryLookup::new(resolver)),
//!     Arc::new(DigZoneTransfer::default()),
//!     Arc::new(WhoisClient::new()),
//! );
//!
//! let domains = vec!["example.com".to_string(), "example.org".to_string()];
//! let report = engine.analyze_domains(&domains, 10).await;
//! println!("{}", report.to_json()?);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context. The default zone-transfer capability invokes the external
//! `dig` binary directly (argument vector, no shell).

#![warn(missing_docs)]

mod app;
mod axfr;
pub mod config;
mod dns;
mod engine;
mod error_handling;
pub mod initialization;
mod report;
mod scanner;
mod whois;

// Re-export public API
pub use app::{dedup_preserving_order, load_domains, normalize_domain};
pub use axfr::{
    attempt_zone_transfer, DigZoneTransfer, ToolOutput, ZoneTransfer, ZoneTransferError,
};
pub use config::{Config, LogFormat, LogLevel};
pub use dns::{
    resolve_record, DnsLookup, HickoryLookup, LookupError, RecordType, ResolutionOutcome,
    NO_ANSWER_SENTINEL, NXDOMAIN_SENTINEL, RECORD_TYPE_COUNT, TIMEOUT_SENTINEL,
};
pub use engine::ReconEngine;
pub use error_handling::{
    print_scan_statistics, ErrorType, InfoType, InitializationError, ScanStats, WarningType,
};
pub use report::{DomainResult, ScanReport};
pub use scanner::scan_records;
pub use whois::{RegistrationInfo, RegistrationProvider, WhoisClient, WhoisError};
