//! Per-domain results and the aggregated scan report.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::dns::{RecordType, ResolutionOutcome};
use crate::whois::RegistrationInfo;

/// Everything learned about one domain in one scan.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DomainResult {
    /// The scanned domain name.
    pub domain: String,
    /// One classified outcome per record type; always all 17 keys, in
    /// canonical order.
    pub records: BTreeMap<RecordType, ResolutionOutcome>,
    /// Zone lines when the transfer succeeded; `None` collapses refusal,
    /// failure, and tool error.
    pub zone_transfer: Option<Vec<String>>,
    /// Registration metadata; `None` when the WHOIS lookup failed.
    pub registration: Option<RegistrationInfo>,
}

/// Aggregated results for one scan batch, keyed by domain.
///
/// Insertion order is completion order, which the serialized map
/// preserves; no ordering is guaranteed across domains. A domain's
/// presence means its record scan completed (its zone transfer and
/// registration may still be absent).
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    results: Vec<DomainResult>,
}

impl ScanReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a completed domain result.
    pub fn insert(&mut self, result: DomainResult) {
        self.results.push(result);
    }

    /// Looks up a domain's result by name.
    pub fn get(&self, domain: &str) -> Option<&DomainResult> {
        self.results.iter().find(|r| r.domain == domain)
    }

    /// Whether the report holds a result for `domain`.
    pub fn contains(&self, domain: &str) -> bool {
        self.get(domain).is_some()
    }

    /// Number of domain results in the report.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the report holds no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results in completion order.
    pub fn iter(&self) -> impl Iterator<Item = &DomainResult> {
        self.results.iter()
    }

    /// Domain names in completion order.
    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|r| r.domain.as_str())
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for ScanReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.results.len()))?;
        for result in &self.results {
            map.serialize_entry(&result.domain, result)?;
        }
        map.end()
    }
}
