//! Per-record resolution outcomes and their wire vocabulary.

use serde::ser::{Serialize, Serializer};

use super::lookup::{DnsLookup, LookupError};
use super::records::RecordType;

/// Sentinel emitted when a name has no records of the requested type.
pub const NO_ANSWER_SENTINEL: &str = "NoAnswer";
/// Sentinel emitted when the domain does not exist.
pub const NXDOMAIN_SENTINEL: &str = "NXDOMAIN (Domain does not exist)";
/// Sentinel emitted when the query timed out.
pub const TIMEOUT_SENTINEL: &str = "Timeout (Query timed out)";

/// Classified result of resolving one record type for one domain.
///
/// Exactly one variant exists per (domain, record type) pair per scan;
/// lookup failures are mapped here, never propagated as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// Answer strings in response order.
    Resolved(Vec<String>),
    /// The name exists but carries no records of this type.
    NoAnswer,
    /// NXDOMAIN: the domain itself does not exist.
    NonExistentDomain,
    /// The query timed out.
    Timeout,
    /// Any other resolver failure, carrying the original message.
    ResolutionError(String),
}

/// The mapping table from lookup failures to outcomes.
impl From<LookupError> for ResolutionOutcome {
    fn from(error: LookupError) -> Self {
        match error {
            LookupError::NoRecords => ResolutionOutcome::NoAnswer,
            LookupError::NxDomain => ResolutionOutcome::NonExistentDomain,
            LookupError::Timeout => ResolutionOutcome::Timeout,
            LookupError::Other(message) => ResolutionOutcome::ResolutionError(message),
        }
    }
}

/// Downstream consumers depend on these exact strings; resolved records
/// serialize as an array of answer strings instead.
impl Serialize for ResolutionOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ResolutionOutcome::Resolved(values) => values.serialize(serializer),
            ResolutionOutcome::NoAnswer => serializer.serialize_str(NO_ANSWER_SENTINEL),
            ResolutionOutcome::NonExistentDomain => serializer.serialize_str(NXDOMAIN_SENTINEL),
            ResolutionOutcome::Timeout => serializer.serialize_str(TIMEOUT_SENTINEL),
            ResolutionOutcome::ResolutionError(message) => {
                serializer.serialize_str(&format!("Error: {message}"))
            }
        }
    }
}

/// Resolves one record type for one domain and classifies the outcome.
///
/// Never fails: every failure path of the lookup capability maps to an
/// outcome variant. Performs exactly one query; a timeout is reported, not
/// retried.
pub async fn resolve_record(
    lookup: &dyn DnsLookup,
    domain: &str,
    record_type: RecordType,
) -> ResolutionOutcome {
    match lookup.query(domain, record_type).await {
        Ok(values) => ResolutionOutcome::Resolved(values),
        Err(error) => error.into(),
    }
}
