//! Zone-transfer probing via an external transfer tool.
//!
//! Transfers are attempted against the zone's own authoritative servers;
//! recursive resolvers do not serve AXFR for arbitrary zones. The probe is
//! binary: either one nameserver hands over zone records, or the result is
//! absent. Refusal, timeout, and tool-invocation failure are deliberately
//! not distinguished for callers.

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

use crate::config::{AXFR_TIMEOUT_SECS, DEFAULT_AXFR_TOOL};

/// Captured output of one zone-transfer tool invocation.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Whether the tool exited with a success status.
    pub success: bool,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl ToolOutput {
    /// Whether stdout carries actual zone records.
    ///
    /// dig exits 0 for any received reply, refusals included, leaving
    /// stdout with only `;`-prefixed comment lines such as
    /// `"; Transfer failed."`. Exit status alone cannot distinguish a
    /// served zone from a refusal.
    pub fn has_answer_records(&self) -> bool {
        self.stdout.lines().any(|line| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with(';')
        })
    }
}

/// Error types for zone-transfer tool invocation.
#[derive(Error, Debug)]
pub enum ZoneTransferError {
    /// The external tool could not be started.
    #[error("failed to invoke {tool}: {source}")]
    Invocation {
        /// The tool binary that failed to start.
        tool: String,
        /// The underlying spawn failure.
        #[source]
        source: std::io::Error,
    },
}

/// Zone-transfer capability consumed by the engine.
#[async_trait]
pub trait ZoneTransfer: Send + Sync {
    /// Runs one transfer attempt against `nameserver` and captures the
    /// tool's exit state and output. Implementations own their timeout
    /// behavior.
    async fn attempt(
        &self,
        domain: &str,
        nameserver: &str,
    ) -> Result<ToolOutput, ZoneTransferError>;
}

/// Production capability backed by `dig AXFR`.
///
/// The domain is passed as a structural argument; nothing here goes through
/// a shell, so untrusted domain input cannot inject commands.
pub struct DigZoneTransfer {
    binary: String,
    timeout_secs: u64,
}

impl DigZoneTransfer {
    /// Uses `binary` as the dig executable with a per-attempt timeout.
    pub fn new(binary: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            binary: binary.into(),
            timeout_secs,
        }
    }
}

impl Default for DigZoneTransfer {
    fn default() -> Self {
        Self::new(DEFAULT_AXFR_TOOL, AXFR_TIMEOUT_SECS)
    }
}

#[async_trait]
impl ZoneTransfer for DigZoneTransfer {
    async fn attempt(
        &self,
        domain: &str,
        nameserver: &str,
    ) -> Result<ToolOutput, ZoneTransferError> {
        let output = Command::new(&self.binary)
            .arg("AXFR")
            .arg(domain)
            .arg(format!("@{nameserver}"))
            .arg(format!("+time={}", self.timeout_secs))
            .output()
            .await
            .map_err(|source| ZoneTransferError::Invocation {
                tool: self.binary.clone(),
                source,
            })?;

        Ok(ToolOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Attempts a zone transfer against each authoritative server in turn and
/// collapses every failure mode to `None`.
///
/// A transfer counts only when the tool exits successfully AND its stdout
/// carries answer records; exit status alone is not trusted because the
/// tool reports success for any received reply, refusals included. The
/// first server that hands over records wins, and its full stdout is
/// returned as an ordered sequence of lines.
pub async fn attempt_zone_transfer(
    domain: &str,
    nameservers: &[String],
    tool: &dyn ZoneTransfer,
) -> Option<Vec<String>> {
    if nameservers.is_empty() {
        log::debug!("No authoritative nameservers known for {domain}, skipping zone transfer");
        return None;
    }

    for nameserver in nameservers {
        log::debug!("Attempting zone transfer for {domain} via {nameserver}");
        match tool.attempt(domain, nameserver).await {
            Ok(output) if output.success && output.has_answer_records() => {
                let lines: Vec<String> = output.stdout.lines().map(str::to_string).collect();
                log::info!(
                    "Zone transfer for {domain} via {nameserver} returned {} lines",
                    lines.len()
                );
                return Some(lines);
            }
            Ok(output) => {
                let detail = if output.stderr.trim().is_empty() {
                    output.stdout.trim().to_string()
                } else {
                    output.stderr.trim().to_string()
                };
                log::debug!("Zone transfer refused or failed for {domain} via {nameserver}: {detail}");
            }
            Err(e) => {
                log::warn!("Zone transfer tool error for {domain} via {nameserver}: {e}");
            }
        }
    }
    None
}
