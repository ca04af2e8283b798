//! Per-region reliability KPIs.
//!
//! Two scores are derived per record, without mutating the stored record:
//! - uptime_score: `100 - min(packet_loss_pct, 5)`. Loss beyond the 5% cap
//!   does not penalize further, so the floor is 95.
//! - performance_score: `100 - min(latency_ms, 200) / 2`. Latency beyond
//!   200 ms is capped, so the floor is 0.
//!
//! Scores and raw CPU utilization are then averaged per region.

use crate::table::TelemetryTable;
use np_common::ReliabilitySummary;
use std::collections::BTreeMap;

/// Packet loss above this cap no longer reduces the uptime score.
const LOSS_CAP_PCT: f64 = 5.0;

/// Latency above this cap no longer reduces the performance score.
const LATENCY_CAP_MS: f64 = 200.0;

/// Derived uptime score for one record.
pub fn uptime_score(packet_loss_pct: f64) -> f64 {
    100.0 - packet_loss_pct.min(LOSS_CAP_PCT)
}

/// Derived performance score for one record.
pub fn performance_score(latency_ms: f64) -> f64 {
    100.0 - latency_ms.min(LATENCY_CAP_MS) / 2.0
}

/// Average the derived scores and raw CPU utilization by region.
///
/// One output row per region present in the input, ordered by region name.
/// An empty table yields an empty vector.
pub fn summarize_reliability_metrics(table: &TelemetryTable) -> Vec<ReliabilitySummary> {
    #[derive(Default)]
    struct Accumulator {
        uptime: f64,
        performance: f64,
        cpu: f64,
        count: u64,
    }

    let mut regions: BTreeMap<String, Accumulator> = BTreeMap::new();
    for record in table.records() {
        let acc = regions.entry(record.region.clone()).or_default();
        acc.uptime += uptime_score(record.packet_loss_pct);
        acc.performance += performance_score(record.latency_ms);
        acc.cpu += record.cpu_utilization_pct;
        acc.count += 1;
    }

    regions
        .into_iter()
        .map(|(region, acc)| {
            let n = acc.count as f64;
            ReliabilitySummary {
                region,
                uptime_score: acc.uptime / n,
                performance_score: acc.performance / n,
                avg_cpu_utilization_pct: acc.cpu / n,
            }
        })
        .collect()
}
