//! DNS record types, the lookup capability, and outcome classification.
//!
//! This module defines:
//! - The fixed 17-element record-type set, in canonical scan order
//! - The `DnsLookup` capability trait with its `hickory-resolver` backend
//! - `ResolutionOutcome` and the lookup-error → outcome mapping table
//!
//! All operations are async; the production backend respects the resolver
//! timeout configured at initialization.

mod lookup;
mod outcome;
mod records;

// Re-export public API
pub use lookup::{DnsLookup, HickoryLookup, LookupError};
pub use outcome::{
    resolve_record, ResolutionOutcome, NO_ANSWER_SENTINEL, NXDOMAIN_SENTINEL, TIMEOUT_SENTINEL,
};
pub use records::{RecordType, RECORD_TYPE_COUNT};
