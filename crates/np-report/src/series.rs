//! Chart series preparation.
//!
//! These helpers reshape the pipeline artifacts into the per-trace vectors
//! the dashboard template embeds. Grouping containers are BTreeMaps so the
//! trace order is stable across runs.

use np_common::{LatencyStats, TelemetryRecord};
use std::collections::{BTreeMap, BTreeSet};

/// Latency samples of one region over time.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSeries {
    pub region: String,
    pub timestamps: Vec<String>,
    pub latencies: Vec<f64>,
}

/// Hourly traffic totals, one row per hour bucket, one column per region.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficHeatmap {
    pub regions: Vec<String>,
    pub hours: Vec<String>,
    /// `totals[hour_idx][region_idx]`, Mbps summed over the bucket; 0 where
    /// a region has no samples in the bucket.
    pub totals: Vec<Vec<f64>>,
}

/// Mean latency bars of one region's devices.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionDeviceBars {
    pub region: String,
    pub devices: Vec<String>,
    pub mean_latencies: Vec<f64>,
}

/// Per-region latency time series, in input (timestamp) order.
pub fn latency_trend(records: &[TelemetryRecord]) -> Vec<RegionSeries> {
    let mut by_region: BTreeMap<&str, RegionSeries> = BTreeMap::new();
    for r in records {
        let entry = by_region
            .entry(r.region.as_str())
            .or_insert_with(|| RegionSeries {
                region: r.region.clone(),
                timestamps: Vec::new(),
                latencies: Vec::new(),
            });
        entry
            .timestamps
            .push(r.timestamp.format("%Y-%m-%d %H:%M:%S").to_string());
        entry.latencies.push(r.latency_ms);
    }
    by_region.into_values().collect()
}

/// Traffic summed into (hour, region) buckets.
pub fn hourly_traffic(records: &[TelemetryRecord]) -> TrafficHeatmap {
    let mut regions: BTreeSet<String> = BTreeSet::new();
    let mut buckets: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    for r in records {
        regions.insert(r.region.clone());
        let hour = r.timestamp.format("%Y-%m-%d %H:00").to_string();
        *buckets
            .entry(hour)
            .or_default()
            .entry(r.region.clone())
            .or_insert(0.0) += r.traffic_mbps;
    }

    let regions: Vec<String> = regions.into_iter().collect();
    let mut hours = Vec::with_capacity(buckets.len());
    let mut totals = Vec::with_capacity(buckets.len());
    for (hour, per_region) in buckets {
        totals.push(
            regions
                .iter()
                .map(|region| per_region.get(region).copied().unwrap_or(0.0))
                .collect(),
        );
        hours.push(hour);
    }

    TrafficHeatmap {
        regions,
        hours,
        totals,
    }
}

/// Mean latency per device, grouped by region for per-region bar traces.
pub fn mean_latency_by_device(latency_stats: &[LatencyStats]) -> Vec<RegionDeviceBars> {
    let mut by_region: BTreeMap<&str, RegionDeviceBars> = BTreeMap::new();
    for s in latency_stats {
        let entry = by_region
            .entry(s.region.as_str())
            .or_insert_with(|| RegionDeviceBars {
                region: s.region.clone(),
                devices: Vec::new(),
                mean_latencies: Vec::new(),
            });
        entry.devices.push(s.device_id.clone());
        entry.mean_latencies.push(s.mean_latency_ms);
    }
    by_region.into_values().collect()
}
