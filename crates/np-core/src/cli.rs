//! Command-line interface for the netpulse binary.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Network telemetry analytics pipeline.
#[derive(Parser, Debug)]
#[command(name = "netpulse", version, about)]
pub struct Cli {
    /// Path to the telemetry CSV file
    pub csv: PathBuf,

    /// Location to write the generated dashboard HTML
    #[arg(long, default_value = "reports/network_performance_dashboard.html")]
    pub dashboard: PathBuf,

    /// Location to write detected bottlenecks
    #[arg(long, default_value = "reports/bottlenecks.csv")]
    pub bottlenecks: PathBuf,

    /// Optional JSON thresholds file (overrides NETPULSE_THRESHOLDS)
    #[arg(long)]
    pub thresholds: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Structured log output formats.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable line format
    Text,
    /// One JSON object per event
    Json,
}
