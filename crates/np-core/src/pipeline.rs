//! Pipeline orchestration: load → aggregate → summarize → detect.

use crate::detect::detect_performance_bottlenecks;
use crate::reliability::summarize_reliability_metrics;
use crate::stats::compute_latency_stats;
use crate::table::TelemetryTable;
use np_common::{Bottleneck, LatencyStats, ReliabilitySummary, Result};
use np_config::Thresholds;
use std::path::Path;
use tracing::info;

/// All pipeline outputs, derived from one immutable table.
#[derive(Debug, Clone)]
pub struct AnalyticsBundle {
    pub telemetry: TelemetryTable,
    pub latency_stats: Vec<LatencyStats>,
    pub reliability: Vec<ReliabilitySummary>,
    pub bottlenecks: Vec<Bottleneck>,
}

/// Run the full batch pipeline over one telemetry CSV file.
///
/// All-or-nothing: any load failure propagates and nothing is produced.
/// There is no retry policy; re-running after fixing the input is the only
/// recovery path.
pub fn run_pipeline(csv_path: &Path, thresholds: &Thresholds) -> Result<AnalyticsBundle> {
    let telemetry = TelemetryTable::load_csv(csv_path)?;
    info!(records = telemetry.len(), path = %csv_path.display(), "telemetry loaded");
    Ok(analyze(telemetry, thresholds))
}

/// Run the analytic stages over an already-loaded table.
pub fn analyze(telemetry: TelemetryTable, thresholds: &Thresholds) -> AnalyticsBundle {
    let latency_stats = compute_latency_stats(&telemetry);
    info!(partitions = latency_stats.len(), "latency statistics computed");

    let reliability = summarize_reliability_metrics(&telemetry);
    info!(regions = reliability.len(), "reliability KPIs summarized");

    let bottlenecks = detect_performance_bottlenecks(&telemetry, thresholds);
    info!(flagged = bottlenecks.len(), "bottlenecks detected");

    AnalyticsBundle {
        telemetry,
        latency_stats,
        reliability,
        bottlenecks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata::sample_table;

    #[test]
    fn bundle_carries_all_four_artifacts() {
        let bundle = analyze(sample_table(), &Thresholds::default());
        assert_eq!(bundle.telemetry.len(), 6);
        assert_eq!(bundle.latency_stats.len(), 4);
        assert_eq!(bundle.reliability.len(), 2);
        assert_eq!(bundle.bottlenecks.len(), 1);
    }

    #[test]
    fn analysis_is_idempotent() {
        let thresholds = Thresholds::default();
        let first = analyze(sample_table(), &thresholds);
        let second = analyze(sample_table(), &thresholds);
        assert_eq!(first.latency_stats, second.latency_stats);
        assert_eq!(first.reliability, second.reliability);
        assert_eq!(first.bottlenecks, second.bottlenecks);
    }

    #[test]
    fn empty_table_degrades_to_empty_outputs() {
        let bundle = analyze(TelemetryTable::from_records(Vec::new()), &Thresholds::default());
        assert!(bundle.latency_stats.is_empty());
        assert!(bundle.reliability.is_empty());
        assert!(bundle.bottlenecks.is_empty());
    }

    #[test]
    fn missing_file_propagates() {
        let err = run_pipeline(Path::new("/nonexistent/telemetry.csv"), &Thresholds::default());
        assert!(err.is_err());
    }
}
