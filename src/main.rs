//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `zone_recon` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Domain-list assembly (flags and/or file)
//! - Report emission and user-facing summary output
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;

use zone_recon::initialization::{init_logger_with, init_resolver};
use zone_recon::{
    dedup_preserving_order, load_domains, normalize_domain, print_scan_statistics, Config,
    DigZoneTransfer, HickoryLookup, ReconEngine, WhoisClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run(config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("zone_recon error: {e:#}");
            process::exit(1);
        }
    }
}

async fn run(config: Config) -> Result<()> {
    let mut domains: Vec<String> = config
        .domains
        .iter()
        .filter_map(|raw| normalize_domain(raw))
        .collect();
    if let Some(path) = &config.file {
        domains.extend(load_domains(path).await?);
    }
    let domains = dedup_preserving_order(domains);
    if domains.is_empty() {
        bail!("no domains to scan (use --domains and/or --file)");
    }

    let resolver = init_resolver().context("Failed to initialize DNS resolver")?;
    let engine = ReconEngine::new(
        Arc::new(HickoryLookup::new(resolver)),
        Arc::new(DigZoneTransfer::default()),
        Arc::new(WhoisClient::new()),
    );

    let start_time = std::time::Instant::now();
    let report = engine.analyze_domains(&domains, config.concurrency).await;
    print_scan_statistics(engine.stats());

    let json = report.to_json().context("Failed to serialize scan report")?;
    match &config.output {
        Some(path) => {
            tokio::fs::write(path, &json)
                .await
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("Report saved in {}", path.display());
        }
        None => println!("{json}"),
    }

    let scanned = report.len();
    let omitted = domains.len().saturating_sub(scanned);
    println!(
        "✅ Scanned {} domain{} ({} omitted) in {:.1}s",
        scanned,
        if scanned == 1 { "" } else { "s" },
        omitted,
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
