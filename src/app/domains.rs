//! Domain-list loading and normalization.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Normalizes one raw domain entry.
///
/// Trims whitespace, lowercases, and strips a trailing dot. Blank entries
/// and `#` comments yield `None`.
pub fn normalize_domain(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    Some(trimmed.trim_end_matches('.').to_ascii_lowercase())
}

/// Loads domains from a file, one per line.
///
/// Blank lines and `#` comments are skipped; entries are normalized but
/// not deduplicated (see [`dedup_preserving_order`]).
pub async fn load_domains(path: &Path) -> Result<Vec<String>> {
    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open domains file {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();

    let mut domains = Vec::new();
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read domains file")?
    {
        if let Some(domain) = normalize_domain(&line) {
            domains.push(domain);
        }
    }
    Ok(domains)
}

/// Deduplicates while preserving first-seen order.
pub fn dedup_preserving_order(domains: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    domains
        .into_iter()
        .filter(|domain| seen.insert(domain.clone()))
        .collect()
}
