//! Configuration constants.

/// Default number of domains scanned concurrently.
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Progress log cadence, in completed domains.
pub const LOGGING_INTERVAL: usize = 5;

// DNS resolution
/// DNS query timeout in seconds. Most queries complete well under a
/// second; 5s gives slow authoritatives a chance while still failing fast
/// across a 17-type scan.
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Resolver-internal retry attempts. This is capability-level policy; the
/// scan layer itself never retries a query.
pub const DNS_ATTEMPTS: usize = 2;

// Zone transfer
/// Default zone-transfer tool binary.
pub const DEFAULT_AXFR_TOOL: &str = "dig";
/// Seconds the transfer tool waits before giving up on a nameserver.
pub const AXFR_TIMEOUT_SECS: u64 = 10;

// WHOIS
/// WHOIS TCP port.
pub const WHOIS_PORT: u16 = 43;
/// Per-operation WHOIS timeout in seconds (connect, write, and each read).
pub const WHOIS_TIMEOUT_SECS: u64 = 10;
/// Upper bound on a WHOIS response; larger responses abort the read.
pub const WHOIS_MAX_RESPONSE_BYTES: usize = 1024 * 1024;
/// Server used to discover the registry WHOIS server for unknown TLDs.
pub const IANA_WHOIS_SERVER: &str = "whois.iana.org";
