//! WHOIS registration data structures and errors.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Registration metadata for a domain, as parsed from a WHOIS response.
///
/// Every field is best-effort: registries differ wildly in what they
/// expose, so absence of a field never indicates a lookup failure. The raw
/// response text is always retained for downstream consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegistrationInfo {
    /// Registrar name
    pub registrar: Option<String>,
    /// Domain creation date
    pub creation_date: Option<DateTime<Utc>>,
    /// Domain expiration date
    pub expiration_date: Option<DateTime<Utc>>,
    /// Last update date
    pub updated_date: Option<DateTime<Utc>>,
    /// Domain status entries (e.g. "clientTransferProhibited")
    pub status: Vec<String>,
    /// Nameservers from WHOIS
    pub nameservers: Vec<String>,
    /// Raw WHOIS text (for debugging/fallback)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

/// Error types for WHOIS lookups.
#[derive(Error, Debug)]
pub enum WhoisError {
    /// The domain failed input validation before any network activity.
    #[error("invalid domain: {0:?}")]
    InvalidDomain(String),

    /// No WHOIS server could be determined for the TLD.
    #[error("no WHOIS server known for TLD {0:?}")]
    ServerNotFound(String),

    /// A network operation exceeded the client timeout.
    #[error("WHOIS {0} timed out")]
    Timeout(String),

    /// A network operation failed.
    #[error("WHOIS I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The server response violated protocol expectations.
    #[error("WHOIS protocol error: {0}")]
    Protocol(String),
}
