//! WHOIS registration lookup.
//!
//! Provides the `RegistrationProvider` capability trait, a raw TCP port-43
//! client implementation, and key/value parsing of registry responses into
//! `RegistrationInfo`. Lookups are best-effort: the engine absorbs every
//! failure except empty-input validation, which fails fast.

mod client;
mod parse;
mod types;

// Re-export public API
pub use client::{RegistrationProvider, WhoisClient};
pub use types::{RegistrationInfo, WhoisError};
