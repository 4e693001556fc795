//! Raw TCP WHOIS client (port 43).

use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::config::{
    IANA_WHOIS_SERVER, WHOIS_MAX_RESPONSE_BYTES, WHOIS_PORT, WHOIS_TIMEOUT_SECS,
};

use super::parse::parse_registration;
use super::types::{RegistrationInfo, WhoisError};

/// WHOIS capability consumed by the engine.
#[async_trait]
pub trait RegistrationProvider: Send + Sync {
    /// Fetches registration metadata for `domain`.
    ///
    /// Fails fast with [`WhoisError::InvalidDomain`] for an empty domain
    /// before any network activity. All other failures surface as errors
    /// for the caller to absorb at the orchestration boundary.
    async fn lookup(&self, domain: &str) -> Result<RegistrationInfo, WhoisError>;
}

/// Production WHOIS capability: a raw TCP client against port 43.
///
/// Server selection pins Verisign's registry server for `.com`/`.net` and
/// asks IANA (`refer:` line) for every other TLD. When a registry response
/// points at the registrar's own server, that referral is followed once for
/// the fuller record.
pub struct WhoisClient {
    timeout: Duration,
}

impl WhoisClient {
    /// Creates a client with the default per-operation timeout.
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(WHOIS_TIMEOUT_SECS),
        }
    }

    /// Overrides the per-operation timeout (connect, write, and each read).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sends one query to `server` and reads the full response.
    async fn query_server(&self, server: &str, query: &str) -> Result<String, WhoisError> {
        let addr = format!("{server}:{WHOIS_PORT}");

        let mut stream = timeout(self.timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| WhoisError::Timeout(format!("connection to {server}")))??;

        timeout(self.timeout, stream.write_all(format!("{query}\r\n").as_bytes()))
            .await
            .map_err(|_| WhoisError::Timeout(format!("write to {server}")))??;

        let mut response = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = timeout(self.timeout, stream.read(&mut buf))
                .await
                .map_err(|_| WhoisError::Timeout(format!("read from {server}")))??;
            if n == 0 {
                break;
            }
            response.extend_from_slice(&buf[..n]);
            if response.len() > WHOIS_MAX_RESPONSE_BYTES {
                return Err(WhoisError::Protocol(format!(
                    "response from {server} exceeded {WHOIS_MAX_RESPONSE_BYTES} bytes"
                )));
            }
        }

        Ok(String::from_utf8_lossy(&response).into_owned())
    }

    /// Determines which registry WHOIS server to ask for `domain`.
    async fn server_for(&self, domain: &str) -> Result<String, WhoisError> {
        // rsplit always yields at least one element
        let tld = domain.rsplit('.').next().unwrap_or(domain);
        if let Some(server) = builtin_server(tld) {
            return Ok(server.to_string());
        }

        log::debug!("No built-in WHOIS server for .{tld}, asking {IANA_WHOIS_SERVER}");
        let response = self.query_server(IANA_WHOIS_SERVER, tld).await?;
        response
            .lines()
            .find_map(|line| line.strip_prefix("refer:").map(|v| v.trim().to_string()))
            .filter(|server| !server.is_empty())
            .ok_or_else(|| WhoisError::ServerNotFound(tld.to_string()))
    }
}

impl Default for WhoisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistrationProvider for WhoisClient {
    async fn lookup(&self, domain: &str) -> Result<RegistrationInfo, WhoisError> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(WhoisError::InvalidDomain(domain.to_string()));
        }

        let server = self.server_for(domain).await?;
        log::debug!("WHOIS query for {domain} via {server}");
        let mut raw = self.query_server(&server, domain).await?;

        // Thin registries (notably .com/.net) answer with a pointer to the
        // registrar's server, which holds the fuller record.
        if let Some(referral) = extract_registrar_referral(&raw) {
            if !referral.eq_ignore_ascii_case(&server) {
                match self.query_server(&referral, domain).await {
                    Ok(full) => raw = full,
                    Err(e) => {
                        log::debug!("Registrar WHOIS referral {referral} failed for {domain}: {e}")
                    }
                }
            }
        }

        Ok(parse_registration(&raw))
    }
}

/// Registry WHOIS servers pinned locally, skipping the IANA round trip.
///
/// Kept deliberately tiny: registry operators change over time, and a
/// stale entry here would shadow the live IANA referral that already
/// covers every TLD. Only Verisign's server is pinned.
fn builtin_server(tld: &str) -> Option<&'static str> {
    match tld {
        "com" | "net" => Some("whois.verisign-grs.com"),
        _ => None,
    }
}

/// Finds a registrar-server pointer in a registry response.
fn extract_registrar_referral(raw: &str) -> Option<String> {
    raw.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        let key = key.trim().to_ascii_lowercase();
        if key == "registrar whois server" || key == "whois server" || key == "whois" {
            let value = value
                .trim()
                .trim_start_matches("https://")
                .trim_start_matches("http://");
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        } else {
            None
        }
    })
}
