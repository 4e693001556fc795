// Engine behavior driven through stub capabilities: outcome classification,
// zone-transfer handling, registration resilience, concurrency bounds, and
// per-domain failure isolation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use strum::IntoEnumIterator;

use zone_recon::{
    attempt_zone_transfer, DnsLookup, LookupError, ReconEngine, RecordType, RegistrationInfo,
    RegistrationProvider, ResolutionOutcome, ToolOutput, WhoisError, ZoneTransfer,
    ZoneTransferError, RECORD_TYPE_COUNT,
};

#[derive(Clone)]
enum LookupBehavior {
    Resolve(Vec<String>),
    NoRecords,
    NxDomain,
    Timeout,
    Fail(String),
}

struct StubLookup {
    behavior: LookupBehavior,
}

impl StubLookup {
    fn new(behavior: LookupBehavior) -> Self {
        Self { behavior }
    }
}

#[async_trait]
impl DnsLookup for StubLookup {
    async fn query(
        &self,
        _domain: &str,
        _record_type: RecordType,
    ) -> Result<Vec<String>, LookupError> {
        match &self.behavior {
            LookupBehavior::Resolve(values) => Ok(values.clone()),
            LookupBehavior::NoRecords => Err(LookupError::NoRecords),
            LookupBehavior::NxDomain => Err(LookupError::NxDomain),
            LookupBehavior::Timeout => Err(LookupError::Timeout),
            LookupBehavior::Fail(message) => Err(LookupError::Other(message.clone())),
        }
    }
}

/// Lookup stub that panics for one specific domain and answers normally
/// for the rest.
struct PanickingLookup {
    panic_domain: String,
}

#[async_trait]
impl DnsLookup for PanickingLookup {
    async fn query(
        &self,
        domain: &str,
        _record_type: RecordType,
    ) -> Result<Vec<String>, LookupError> {
        if domain == self.panic_domain {
            panic!("unhandled failure for {domain}");
        }
        Ok(vec!["192.0.2.1".to_string()])
    }
}

/// Lookup stub that tracks how many queries are in flight at once.
struct CountingLookup {
    active: AtomicUsize,
    max_active: AtomicUsize,
}

impl CountingLookup {
    fn new() -> Self {
        Self {
            active: AtomicUsize::new(0),
            max_active: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl DnsLookup for CountingLookup {
    async fn query(
        &self,
        _domain: &str,
        _record_type: RecordType,
    ) -> Result<Vec<String>, LookupError> {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(2)).await;
        self.active.fetch_sub(1, Ordering::SeqCst);
        Ok(vec!["192.0.2.1".to_string()])
    }
}

struct StubZoneTransfer {
    success: bool,
    stdout: String,
    invocation_error: bool,
}

impl StubZoneTransfer {
    /// Models dig's behavior on a REFUSED reply: clean exit, comment-only
    /// stdout.
    fn refused() -> Self {
        Self {
            success: true,
            stdout: "; Transfer failed.\n".to_string(),
            invocation_error: false,
        }
    }

    fn failed_exit() -> Self {
        Self {
            success: false,
            stdout: String::new(),
            invocation_error: false,
        }
    }

    fn succeeding(stdout: &str) -> Self {
        Self {
            success: true,
            stdout: stdout.to_string(),
            invocation_error: false,
        }
    }

    fn broken() -> Self {
        Self {
            success: false,
            stdout: String::new(),
            invocation_error: true,
        }
    }
}

#[async_trait]
impl ZoneTransfer for StubZoneTransfer {
    async fn attempt(
        &self,
        _domain: &str,
        _nameserver: &str,
    ) -> Result<ToolOutput, ZoneTransferError> {
        if self.invocation_error {
            return Err(ZoneTransferError::Invocation {
                tool: "stub-dig".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such tool"),
            });
        }
        Ok(ToolOutput {
            success: self.success,
            stdout: self.stdout.clone(),
            stderr: String::new(),
        })
    }
}

/// Zone-transfer stub whose answer depends on which nameserver is asked.
struct PerServerZoneTransfer {
    answers: std::collections::HashMap<String, ToolOutput>,
    attempts: AtomicUsize,
}

#[async_trait]
impl ZoneTransfer for PerServerZoneTransfer {
    async fn attempt(
        &self,
        _domain: &str,
        nameserver: &str,
    ) -> Result<ToolOutput, ZoneTransferError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .answers
            .get(nameserver)
            .cloned()
            .unwrap_or_else(|| ToolOutput {
                success: true,
                stdout: "; Transfer failed.\n".to_string(),
                stderr: String::new(),
            }))
    }
}

struct StubRegistration {
    fail: bool,
}

#[async_trait]
impl RegistrationProvider for StubRegistration {
    async fn lookup(&self, domain: &str) -> Result<RegistrationInfo, WhoisError> {
        if domain.trim().is_empty() {
            return Err(WhoisError::InvalidDomain(domain.to_string()));
        }
        if self.fail {
            return Err(WhoisError::Protocol("stub failure".to_string()));
        }
        Ok(RegistrationInfo {
            registrar: Some("Stub Registrar".to_string()),
            ..Default::default()
        })
    }
}

fn engine_with(
    lookup: impl DnsLookup + 'static,
    zone: StubZoneTransfer,
    registration: StubRegistration,
) -> ReconEngine {
    ReconEngine::new(Arc::new(lookup), Arc::new(zone), Arc::new(registration))
}

fn domains(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_domain_result_always_has_all_17_record_keys() {
    let engine = engine_with(
        StubLookup::new(LookupBehavior::Resolve(vec!["192.0.2.1".into()])),
        StubZoneTransfer::refused(),
        StubRegistration { fail: false },
    );

    let report = engine.analyze_domains(&domains(&["example.com"]), 1).await;
    let result = report.get("example.com").expect("domain should be present");

    assert_eq!(result.records.len(), RECORD_TYPE_COUNT);
    let keys: Vec<RecordType> = result.records.keys().copied().collect();
    let canonical: Vec<RecordType> = RecordType::iter().collect();
    assert_eq!(keys, canonical);
    for outcome in result.records.values() {
        assert_eq!(
            *outcome,
            ResolutionOutcome::Resolved(vec!["192.0.2.1".into()])
        );
    }
}

#[tokio::test]
async fn test_no_records_classifies_every_type_as_no_answer() {
    let engine = engine_with(
        StubLookup::new(LookupBehavior::NoRecords),
        StubZoneTransfer::refused(),
        StubRegistration { fail: false },
    );

    let report = engine.analyze_domains(&domains(&["example.com"]), 1).await;
    let result = report.get("example.com").unwrap();
    for outcome in result.records.values() {
        assert_eq!(*outcome, ResolutionOutcome::NoAnswer);
    }
}

#[tokio::test]
async fn test_nxdomain_classifies_every_type_as_non_existent() {
    let engine = engine_with(
        StubLookup::new(LookupBehavior::NxDomain),
        StubZoneTransfer::refused(),
        StubRegistration { fail: false },
    );

    let report = engine
        .analyze_domains(&domains(&["nope.invalid"]), 1)
        .await;
    let result = report.get("nope.invalid").unwrap();
    for outcome in result.records.values() {
        assert_eq!(*outcome, ResolutionOutcome::NonExistentDomain);
    }
}

#[tokio::test]
async fn test_timeout_and_error_classification() {
    let engine = engine_with(
        StubLookup::new(LookupBehavior::Timeout),
        StubZoneTransfer::refused(),
        StubRegistration { fail: false },
    );
    let report = engine.analyze_domains(&domains(&["slow.example"]), 1).await;
    for outcome in report.get("slow.example").unwrap().records.values() {
        assert_eq!(*outcome, ResolutionOutcome::Timeout);
    }

    let engine = engine_with(
        StubLookup::new(LookupBehavior::Fail("servfail".into())),
        StubZoneTransfer::refused(),
        StubRegistration { fail: false },
    );
    let report = engine
        .analyze_domains(&domains(&["broken.example"]), 1)
        .await;
    for outcome in report.get("broken.example").unwrap().records.values() {
        assert_eq!(
            *outcome,
            ResolutionOutcome::ResolutionError("servfail".into())
        );
    }
}

fn nameservers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_zone_transfer_non_success_exit_is_absent() {
    let ns = nameservers(&["ns1.example.net."]);

    let probe = StubZoneTransfer::failed_exit();
    assert_eq!(attempt_zone_transfer("example.com", &ns, &probe).await, None);

    let probe = StubZoneTransfer::broken();
    assert_eq!(attempt_zone_transfer("example.com", &ns, &probe).await, None);
}

#[tokio::test]
async fn test_zone_transfer_refused_reply_with_clean_exit_is_absent() {
    // dig exits 0 for any received reply, so a REFUSED answer leaves a
    // clean exit with comment-only stdout. That must not count as a
    // served zone.
    let ns = nameservers(&["ns1.example.net."]);

    let probe = StubZoneTransfer::refused();
    assert_eq!(attempt_zone_transfer("example.com", &ns, &probe).await, None);

    let probe = StubZoneTransfer::succeeding("");
    assert_eq!(attempt_zone_transfer("example.com", &ns, &probe).await, None);

    let probe = StubZoneTransfer::succeeding("; <<>> DiG <<>> AXFR example.com\n; Transfer failed.\n");
    assert_eq!(attempt_zone_transfer("example.com", &ns, &probe).await, None);
}

#[tokio::test]
async fn test_zone_transfer_skipped_without_nameservers() {
    let probe = StubZoneTransfer::succeeding("example.com. 3600 IN SOA ns1 host 1 2 3 4 5");
    assert_eq!(attempt_zone_transfer("example.com", &[], &probe).await, None);
}

#[tokio::test]
async fn test_zone_transfer_success_splits_stdout_into_lines() {
    let ns = nameservers(&["ns1.example.net."]);
    let probe = StubZoneTransfer::succeeding("a\nb\nc");
    assert_eq!(
        attempt_zone_transfer("example.com", &ns, &probe).await,
        Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    );
}

#[tokio::test]
async fn test_zone_transfer_tries_each_nameserver() {
    // First server refuses, second serves the zone.
    let mut answers = std::collections::HashMap::new();
    answers.insert(
        "ns2.example.net.".to_string(),
        ToolOutput {
            success: true,
            stdout: "example.com. 3600 IN SOA ns1 host 1 2 3 4 5".to_string(),
            stderr: String::new(),
        },
    );
    let probe = PerServerZoneTransfer {
        answers,
        attempts: AtomicUsize::new(0),
    };

    let ns = nameservers(&["ns1.example.net.", "ns2.example.net."]);
    let zone = attempt_zone_transfer("example.com", &ns, &probe).await;
    assert_eq!(
        zone,
        Some(vec![
            "example.com. 3600 IN SOA ns1 host 1 2 3 4 5".to_string()
        ])
    );
    assert_eq!(probe.attempts.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_zone_transfer_outcome_lands_in_domain_result() {
    // The resolved NS answers become the transfer targets, so the lookup
    // stub must resolve for the probe to run at all.
    let engine = engine_with(
        StubLookup::new(LookupBehavior::Resolve(vec!["ns1.example.net.".into()])),
        StubZoneTransfer::succeeding("zone line 1\nzone line 2"),
        StubRegistration { fail: false },
    );
    let report = engine.analyze_domains(&domains(&["example.com"]), 1).await;
    let result = report.get("example.com").unwrap();
    assert_eq!(
        result.zone_transfer,
        Some(vec!["zone line 1".to_string(), "zone line 2".to_string()])
    );
}

#[tokio::test]
async fn test_zone_transfer_absent_when_ns_scan_resolved_nothing() {
    let engine = engine_with(
        StubLookup::new(LookupBehavior::NoRecords),
        StubZoneTransfer::succeeding("zone line 1"),
        StubRegistration { fail: false },
    );
    let report = engine.analyze_domains(&domains(&["example.com"]), 1).await;
    assert_eq!(report.get("example.com").unwrap().zone_transfer, None);
}

#[tokio::test]
async fn test_failing_registration_leaves_domain_in_report() {
    let engine = engine_with(
        StubLookup::new(LookupBehavior::NoRecords),
        StubZoneTransfer::refused(),
        StubRegistration { fail: true },
    );

    let report = engine.analyze_domains(&domains(&["example.com"]), 1).await;
    let result = report.get("example.com").expect(
        "a WHOIS failure must not drop the domain",
    );
    assert!(result.registration.is_none());
}

#[tokio::test]
async fn test_successful_registration_is_merged() {
    let engine = engine_with(
        StubLookup::new(LookupBehavior::NoRecords),
        StubZoneTransfer::refused(),
        StubRegistration { fail: false },
    );

    let report = engine.analyze_domains(&domains(&["example.com"]), 1).await;
    let registration = report
        .get("example.com")
        .unwrap()
        .registration
        .as_ref()
        .expect("registration should be present");
    assert_eq!(registration.registrar.as_deref(), Some("Stub Registrar"));
}

#[tokio::test]
async fn test_empty_domain_task_is_omitted_but_batch_survives() {
    let engine = engine_with(
        StubLookup::new(LookupBehavior::NoRecords),
        StubZoneTransfer::refused(),
        StubRegistration { fail: false },
    );

    // The empty domain trips the registration lookup's fail-fast input
    // validation; that task fails and only that domain is dropped.
    let batch = vec![
        "example.com".to_string(),
        String::new(),
        "example.org".to_string(),
    ];
    let report = engine.analyze_domains(&batch, 2).await;

    assert_eq!(report.len(), 2);
    assert!(report.contains("example.com"));
    assert!(report.contains("example.org"));
    assert!(!report.contains(""));
}

#[tokio::test]
async fn test_all_domains_present_regardless_of_completion_order() {
    let engine = engine_with(
        StubLookup::new(LookupBehavior::Resolve(vec!["192.0.2.1".into()])),
        StubZoneTransfer::refused(),
        StubRegistration { fail: false },
    );

    let batch = domains(&["a.example", "b.example", "c.example"]);
    let report = engine.analyze_domains(&batch, 2).await;

    assert_eq!(report.len(), 3);
    for domain in &batch {
        assert!(report.contains(domain), "missing {domain}");
    }
}

#[tokio::test]
async fn test_duplicate_domains_collapse_to_one_result() {
    let engine = engine_with(
        StubLookup::new(LookupBehavior::Resolve(vec!["192.0.2.1".into()])),
        StubZoneTransfer::refused(),
        StubRegistration { fail: false },
    );

    let batch = domains(&["example.com", "example.com", "example.org", "example.com"]);
    let report = engine.analyze_domains(&batch, 2).await;

    // The batch is a set: each domain appears exactly once in the report,
    // so the serialized JSON object has no duplicate keys.
    assert_eq!(report.len(), 2);
    let mut scanned: Vec<&str> = report.domains().collect();
    scanned.sort_unstable();
    assert_eq!(scanned, vec!["example.com", "example.org"]);
}

#[tokio::test]
async fn test_panicking_task_is_isolated() {
    let engine = ReconEngine::new(
        Arc::new(PanickingLookup {
            panic_domain: "bad.example".to_string(),
        }),
        Arc::new(StubZoneTransfer::refused()),
        Arc::new(StubRegistration { fail: false }),
    );

    let batch = domains(&["good.example", "bad.example", "fine.example"]);
    let report = engine.analyze_domains(&batch, 3).await;

    assert_eq!(report.len(), 2);
    assert!(report.contains("good.example"));
    assert!(report.contains("fine.example"));
    assert!(!report.contains("bad.example"));
}

#[tokio::test]
async fn test_concurrency_bound_is_respected() {
    let lookup = Arc::new(CountingLookup::new());
    let engine = ReconEngine::new(
        Arc::clone(&lookup) as Arc<dyn DnsLookup>,
        Arc::new(StubZoneTransfer::refused()),
        Arc::new(StubRegistration { fail: false }),
    );

    let batch = domains(&[
        "a.example", "b.example", "c.example", "d.example", "e.example", "f.example",
    ]);
    let report = engine.analyze_domains(&batch, 2).await;

    assert_eq!(report.len(), 6);
    // Record queries run sequentially within a domain, so in-flight queries
    // can never exceed the number of concurrently running domain tasks.
    assert!(
        lookup.max_active.load(Ordering::SeqCst) <= 2,
        "observed {} concurrent queries with a bound of 2",
        lookup.max_active.load(Ordering::SeqCst)
    );
}

#[tokio::test]
async fn test_zero_concurrency_is_clamped() {
    let engine = engine_with(
        StubLookup::new(LookupBehavior::NoRecords),
        StubZoneTransfer::refused(),
        StubRegistration { fail: false },
    );
    let report = engine.analyze_domains(&domains(&["example.com"]), 0).await;
    assert_eq!(report.len(), 1);
}
