//! Configuration types and CLI options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use super::constants::DEFAULT_CONCURRENCY;

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Scan configuration and command-line options.
///
/// Doubles as the library configuration: construct it programmatically for
/// embedding, or let clap populate it from the command line.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "zone_recon",
    about = "DNS reconnaissance: record scans, zone-transfer probes, and WHOIS lookups across many domains"
)]
pub struct Config {
    /// Comma-separated list of domains to scan
    #[arg(long, value_delimiter = ',')]
    pub domains: Vec<String>,

    /// File with one domain per line (blank lines and '#' comments skipped)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Maximum number of domains scanned concurrently
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Write the JSON report to this path instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            file: None,
            concurrency: DEFAULT_CONCURRENCY,
            output: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
