//! Bottleneck detection over the whole telemetry table.
//!
//! A record is flagged when at least one of five independent conditions
//! holds (logical OR):
//! 1. latency above the fixed latency threshold
//! 2. packet loss above the fixed loss threshold
//! 3. CPU utilization above the fixed CPU threshold
//! 4. latency z-score over the ENTIRE table above the z cutoff
//! 5. packet-loss z-score over the entire table above the z cutoff
//!
//! Z-scores use the global population mean/std, never per-group values; a
//! population std of 0 is replaced by 1.0 (policy, handled in np-math).

use crate::table::TelemetryTable;
use np_common::Bottleneck;
use np_config::Thresholds;

/// Divisor floor for the loss overshoot ratio, so a tiny configured loss
/// threshold cannot blow up the severity score.
const LOSS_RATIO_EPSILON: f64 = 1e-6;

/// Metric family label carried by every bottleneck. The current policy does
/// not discriminate which condition fired.
pub const METRIC_LABEL: &str = "latency/packet_loss/cpu";

/// Flag anomalous records and score their severity.
///
/// Severity is the maximum of the three fixed-threshold overshoot ratios,
/// clamped at 0 (a record flagged only by a z-score condition reports 0)
/// and rounded to two decimals. Output preserves the row order of the
/// timestamp-sorted table.
pub fn detect_performance_bottlenecks(
    table: &TelemetryTable,
    thresholds: &Thresholds,
) -> Vec<Bottleneck> {
    let latencies: Vec<f64> = table.records().iter().map(|r| r.latency_ms).collect();
    let losses: Vec<f64> = table.records().iter().map(|r| r.packet_loss_pct).collect();
    let z_latency = np_math::z_scores(&latencies);
    let z_loss = np_math::z_scores(&losses);

    let mut bottlenecks = Vec::new();
    for (i, record) in table.records().iter().enumerate() {
        let flagged = record.latency_ms > thresholds.latency_ms
            || record.packet_loss_pct > thresholds.packet_loss_pct
            || record.cpu_utilization_pct > thresholds.cpu_pct
            || z_latency[i] > thresholds.zscore_cutoff
            || z_loss[i] > thresholds.zscore_cutoff;
        if !flagged {
            continue;
        }

        let severity = (record.latency_ms - thresholds.latency_ms) / thresholds.latency_ms;
        let severity = severity.max(
            (record.packet_loss_pct - thresholds.packet_loss_pct)
                / thresholds.packet_loss_pct.max(LOSS_RATIO_EPSILON),
        );
        let severity = severity.max(
            (record.cpu_utilization_pct - thresholds.cpu_pct) / thresholds.cpu_pct,
        );

        bottlenecks.push(Bottleneck {
            device_id: record.device_id.clone(),
            region: record.region.clone(),
            metric: METRIC_LABEL.to_string(),
            severity: np_math::round2(severity.max(0.0)),
            description: format!(
                "High latency and loss event observed at {} (latency {} ms, loss {}%).",
                record.timestamp.format("%Y-%m-%d %H:%M:%S"),
                record.latency_ms,
                record.packet_loss_pct
            ),
        });
    }

    tracing::debug!(
        flagged = bottlenecks.len(),
        total = table.len(),
        "bottleneck detection complete"
    );
    bottlenecks
}
