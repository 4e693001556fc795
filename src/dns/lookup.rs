//! The DNS lookup capability and its `hickory-resolver` implementation.

use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::TokioAsyncResolver;
use thiserror::Error;

use super::records::RecordType;

/// Failure conditions a DNS lookup can surface.
///
/// This is the finite vocabulary the scanner classifies into resolution
/// outcomes. Anything the underlying resolver reports that doesn't fit the
/// first three buckets is carried as `Other` with the original message for
/// diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The name exists but has no records of the requested type.
    #[error("no records found")]
    NoRecords,

    /// The domain does not exist (NXDOMAIN).
    #[error("domain does not exist")]
    NxDomain,

    /// The query timed out.
    #[error("query timed out")]
    Timeout,

    /// Any other resolver failure, with its original message.
    #[error("{0}")]
    Other(String),
}

/// DNS lookup capability consumed by the scanner.
///
/// Implementations perform exactly one network query per call; retry
/// policy, if any, belongs inside the implementation, never to callers.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    /// Queries `record_type` for `domain`, returning the answer strings in
    /// response order.
    async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, LookupError>;
}

/// Production lookup capability backed by `hickory-resolver`.
pub struct HickoryLookup {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryLookup {
    /// Wraps a shared resolver, typically from [`crate::initialization::init_resolver`].
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl DnsLookup for HickoryLookup {
    async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, LookupError> {
        match self.resolver.lookup(domain, record_type.to_hickory()).await {
            Ok(lookup) => Ok(lookup.iter().map(|rdata| rdata.to_string()).collect()),
            Err(e) => Err(classify_resolve_error(&e)),
        }
    }
}

/// Maps hickory's error kinds onto the finite lookup-error vocabulary.
fn classify_resolve_error(error: &ResolveError) -> LookupError {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound {
            response_code: ResponseCode::NXDomain,
            ..
        } => LookupError::NxDomain,
        ResolveErrorKind::NoRecordsFound { .. } => LookupError::NoRecords,
        ResolveErrorKind::Timeout => LookupError::Timeout,
        _ => LookupError::Other(error.to_string()),
    }
}
