//! Key/value parsing of raw WHOIS responses.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use super::types::RegistrationInfo;

/// Extracts the structured fields from a raw WHOIS response.
///
/// WHOIS has no standard schema; this recognizes the key spellings used by
/// the major registries and keeps the first value seen for single-valued
/// fields. The raw text is always carried along.
pub(crate) fn parse_registration(raw: &str) -> RegistrationInfo {
    let mut info = RegistrationInfo::default();

    for line in raw.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_ascii_lowercase();
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        match key.as_str() {
            "registrar" => {
                if info.registrar.is_none() {
                    info.registrar = Some(value.to_string());
                }
            }
            "creation date" | "created" | "registered on" => {
                if info.creation_date.is_none() {
                    info.creation_date = parse_date(value);
                }
            }
            "registry expiry date" | "expiration date" | "expiry date" | "expires" => {
                if info.expiration_date.is_none() {
                    info.expiration_date = parse_date(value);
                }
            }
            "updated date" | "last updated" | "last-update" | "changed" => {
                if info.updated_date.is_none() {
                    info.updated_date = parse_date(value);
                }
            }
            "domain status" | "status" => {
                info.status.push(value.to_string());
            }
            "name server" | "nameserver" | "nserver" => {
                let ns = value.to_ascii_lowercase();
                if !info.nameservers.contains(&ns) {
                    info.nameservers.push(ns);
                }
            }
            _ => {}
        }
    }

    info.raw_text = Some(raw.to_string());
    info
}

/// Attempts the date formats commonly seen in WHOIS responses.
fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y.%m.%d %H:%M:%S"];
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&dt));
        }
    }

    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%b-%Y", "%d/%m/%Y", "%Y.%m.%d"];
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
        }
    }

    None
}
