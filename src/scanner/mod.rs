//! Per-domain record scanning.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use crate::dns::{resolve_record, DnsLookup, RecordType, ResolutionOutcome};

/// Scans every record type in the canonical set for one domain.
///
/// Queries run sequentially within the domain; parallelism lives at the
/// domain level in the engine. Individual failures are classified into the
/// outcome, never propagated, so the returned map always carries all 17
/// keys.
pub async fn scan_records(
    domain: &str,
    lookup: &dyn DnsLookup,
) -> BTreeMap<RecordType, ResolutionOutcome> {
    log::info!("Scanning DNS records for {domain}");
    let mut records = BTreeMap::new();

    for record_type in RecordType::iter() {
        log::debug!("Resolving {record_type} for {domain}");
        let outcome = resolve_record(lookup, domain, record_type).await;
        match &outcome {
            ResolutionOutcome::Resolved(values) => {
                log::debug!("{record_type} records for {domain}: {values:?}");
            }
            ResolutionOutcome::NoAnswer => {
                log::debug!("No answer for {record_type} on {domain}");
            }
            ResolutionOutcome::NonExistentDomain => {
                log::warn!("{domain} does not exist (NXDOMAIN)");
            }
            ResolutionOutcome::Timeout => {
                log::warn!("Timeout resolving {record_type} for {domain}");
            }
            ResolutionOutcome::ResolutionError(message) => {
                log::warn!("Error resolving {record_type} for {domain}: {message}");
            }
        }
        records.insert(record_type, outcome);
    }

    records
}
