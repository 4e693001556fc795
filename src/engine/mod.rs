//! The reconnaissance engine: bounded fan-out across domains.
//!
//! One task per domain runs the three phases sequentially (record scan,
//! zone-transfer probe, registration lookup); tasks run concurrently up to
//! the configured limit. Completed results drain through a single
//! collection point, so report insertion needs no extra synchronization
//! and insertion order is completion order.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Result};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{info, warn};

use crate::app::{dedup_preserving_order, log_progress};
use crate::axfr::{attempt_zone_transfer, ZoneTransfer};
use crate::config::LOGGING_INTERVAL;
use crate::dns::{DnsLookup, RecordType, ResolutionOutcome};
use crate::error_handling::{ErrorType, InfoType, ScanStats, WarningType};
use crate::initialization::init_semaphore;
use crate::report::{DomainResult, ScanReport};
use crate::scanner::scan_records;
use crate::whois::{RegistrationProvider, WhoisError};

/// Orchestrates record scans, zone-transfer probes, and registration
/// lookups across many domains on a bounded worker pool.
///
/// The three capabilities are injected so implementations (and test
/// doubles) can be swapped without touching the orchestration.
pub struct ReconEngine {
    lookup: Arc<dyn DnsLookup>,
    zone_transfer: Arc<dyn ZoneTransfer>,
    registration: Arc<dyn RegistrationProvider>,
    stats: Arc<ScanStats>,
}

impl ReconEngine {
    /// Builds an engine over the given capability implementations.
    pub fn new(
        lookup: Arc<dyn DnsLookup>,
        zone_transfer: Arc<dyn ZoneTransfer>,
        registration: Arc<dyn RegistrationProvider>,
    ) -> Self {
        Self {
            lookup,
            zone_transfer,
            registration,
            stats: Arc::new(ScanStats::new()),
        }
    }

    /// Counters accumulated across every scan run by this engine.
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// Scans every domain and returns the merged report.
    ///
    /// The input is treated as a set: duplicates collapse to the first
    /// occurrence, so the report is keyed by unique domain. At most
    /// `concurrency` domain tasks run their network work at any instant
    /// (values below 1 are treated as 1); within one task the phases run
    /// sequentially. The call blocks until every submitted domain
    /// finishes — there is no streaming and no batch deadline.
    ///
    /// Failure isolation is domain-scoped: a task that fails or panics is
    /// logged and its domain omitted from the report; the batch itself
    /// never fails.
    pub async fn analyze_domains(&self, domains: &[String], concurrency: usize) -> ScanReport {
        let concurrency = concurrency.max(1);
        let domains = dedup_preserving_order(domains.to_vec());
        let total = domains.len();
        info!("Starting DNS inspection for {total} domains (concurrency: {concurrency})");

        let semaphore = init_semaphore(concurrency);
        let start_time = Instant::now();
        let mut tasks = FuturesUnordered::new();

        for domain in &domains {
            let permit = match Arc::clone(&semaphore).acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    warn!("Semaphore closed, skipping domain: {domain}");
                    continue;
                }
            };

            let domain = domain.clone();
            let lookup = Arc::clone(&self.lookup);
            let zone_transfer = Arc::clone(&self.zone_transfer);
            let registration = Arc::clone(&self.registration);
            let stats = Arc::clone(&self.stats);

            tasks.push(tokio::spawn(async move {
                let _permit = permit;
                scan_domain(domain, lookup, zone_transfer, registration, stats).await
            }));
        }

        let mut report = ScanReport::new();
        let mut completed = 0usize;
        while let Some(joined) = tasks.next().await {
            completed += 1;
            match joined {
                Ok(Ok(result)) => report.insert(result),
                Ok(Err(e)) => {
                    self.stats.increment_error(ErrorType::DomainTaskError);
                    warn!("Domain task failed and was omitted from the report: {e:#}");
                }
                Err(join_error) => {
                    self.stats.increment_error(ErrorType::DomainTaskError);
                    warn!("Domain task panicked and was omitted from the report: {join_error:?}");
                }
            }
            if completed % LOGGING_INTERVAL == 0 && completed < total {
                log_progress(start_time, completed, total);
            }
        }

        log_progress(start_time, completed, total);
        report
    }
}

/// One domain's full unit of work: record scan, then zone-transfer probe,
/// then registration lookup, sequentially on one worker.
async fn scan_domain(
    domain: String,
    lookup: Arc<dyn DnsLookup>,
    zone_transfer: Arc<dyn ZoneTransfer>,
    registration: Arc<dyn RegistrationProvider>,
    stats: Arc<ScanStats>,
) -> Result<DomainResult> {
    let records = scan_records(&domain, lookup.as_ref()).await;
    for outcome in records.values() {
        match outcome {
            ResolutionOutcome::Timeout => stats.increment_error(ErrorType::RecordTimeout),
            ResolutionOutcome::ResolutionError(_) => {
                stats.increment_error(ErrorType::RecordResolutionError)
            }
            ResolutionOutcome::NoAnswer => stats.increment_warning(WarningType::RecordNoAnswer),
            ResolutionOutcome::NonExistentDomain => {
                stats.increment_warning(WarningType::DomainNonExistent)
            }
            ResolutionOutcome::Resolved(_) => {}
        }
    }

    // AXFR only works against the zone's own servers, so the probe targets
    // whatever the NS scan just resolved.
    let nameservers = match records.get(&RecordType::NS) {
        Some(ResolutionOutcome::Resolved(servers)) => servers.clone(),
        _ => Vec::new(),
    };
    let zone = attempt_zone_transfer(&domain, &nameservers, zone_transfer.as_ref()).await;
    match &zone {
        Some(_) => stats.increment_info(InfoType::ZoneTransferSucceeded),
        None => stats.increment_warning(WarningType::ZoneTransferUnavailable),
    }

    // Empty input is a caller bug and fails the whole domain task; every
    // other WHOIS failure degrades to an absent registration.
    let registration = match registration.lookup(&domain).await {
        Ok(info) => Some(info),
        Err(e @ WhoisError::InvalidDomain(_)) => {
            return Err(anyhow!(e).context(format!("registration lookup rejected {domain:?}")));
        }
        Err(e) => {
            stats.increment_error(ErrorType::RegistrationLookupError);
            warn!("WHOIS lookup failed for {domain}: {e}");
            None
        }
    };

    Ok(DomainResult {
        domain,
        records,
        zone_transfer: zone,
        registration,
    })
}
