//! Telemetry record and derived result row types.
//!
//! All four types are plain values: produced once by a pipeline stage,
//! never mutated afterwards, serialized as-is into exports and reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped measurement from a network device.
///
/// `region` and `device_id` are opaque identifiers at this layer; they are
/// grouping keys, not validated enums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    pub timestamp: DateTime<Utc>,
    pub device_id: String,
    pub region: String,
    /// Offered traffic in Mbps, non-negative.
    pub traffic_mbps: f64,
    /// Round-trip latency in milliseconds, expected > 0.
    pub latency_ms: f64,
    /// Packet loss percentage, expected in [0, 100], typically small.
    pub packet_loss_pct: f64,
    /// CPU utilization percentage, expected in [0, 100].
    pub cpu_utilization_pct: f64,
}

/// A flagged record indicating a performance or reliability anomaly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bottleneck {
    pub device_id: String,
    pub region: String,
    /// Metric family label. The current detection policy always emits the
    /// coarse `"latency/packet_loss/cpu"` label rather than naming the
    /// specific condition that fired.
    pub metric: String,
    /// Unitless overshoot score, >= 0, unbounded above, 2 decimal places.
    pub severity: f64,
    /// Human-readable sentence embedding the triggering timestamp and the
    /// raw latency/loss values.
    pub description: String,
}

/// Latency descriptive statistics for one (region, device) partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyStats {
    pub region: String,
    pub device_id: String,
    pub mean_latency_ms: f64,
    pub median_latency_ms: f64,
    pub max_latency_ms: f64,
    /// Population standard deviation; a single-sample partition reports 0.
    pub latency_std_ms: f64,
    pub samples: u64,
}

/// Reliability KPIs averaged over one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliabilitySummary {
    pub region: String,
    /// Mean of per-record `100 - min(packet_loss_pct, 5)`.
    pub uptime_score: f64,
    /// Mean of per-record `100 - min(latency_ms, 200) / 2`.
    pub performance_score: f64,
    pub avg_cpu_utilization_pct: f64,
}
