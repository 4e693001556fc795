//! The fixed record-type set scanned for every domain.

use hickory_resolver::proto::rr::RecordType as HickoryRecordType;
use serde::Serialize;
use strum_macros::{Display as DisplayMacro, EnumIter as EnumIterMacro};

/// Number of record types queried per domain.
pub const RECORD_TYPE_COUNT: usize = 17;

/// DNS record types queried for every scanned domain.
///
/// Declaration order is the canonical scan order: `EnumIter` iteration and
/// the derived `Ord` (and therefore `BTreeMap` key order) both follow it,
/// so a domain's record map always lists outcomes in this sequence.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIterMacro,
    DisplayMacro,
    Serialize,
)]
#[allow(clippy::upper_case_acronyms, missing_docs)]
pub enum RecordType {
    A,
    AAAA,
    AFSDB,
    CAA,
    CNAME,
    MX,
    NS,
    SOA,
    TXT,
    PTR,
    SRV,
    SSHFP,
    TLSA,
    DS,
    DNSKEY,
    NSEC,
    NSEC3,
}

impl RecordType {
    /// Maps to the wire-level record type used by `hickory-resolver`.
    ///
    /// AFSDB has no named variant in hickory's enum, so it goes out under
    /// its IANA type code (18), which the resolver handles generically.
    pub fn to_hickory(self) -> HickoryRecordType {
        match self {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::AFSDB => HickoryRecordType::Unknown(18),
            RecordType::CAA => HickoryRecordType::CAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::SSHFP => HickoryRecordType::SSHFP,
            RecordType::TLSA => HickoryRecordType::TLSA,
            RecordType::DS => HickoryRecordType::DS,
            RecordType::DNSKEY => HickoryRecordType::DNSKEY,
            RecordType::NSEC => HickoryRecordType::NSEC,
            RecordType::NSEC3 => HickoryRecordType::NSEC3,
        }
    }
}
