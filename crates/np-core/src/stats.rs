//! Latency descriptive statistics per (region, device) partition.

use crate::table::TelemetryTable;
use np_common::LatencyStats;
use std::collections::BTreeMap;

/// Compute latency statistics for every (region, device_id) pair present in
/// the table.
///
/// One output row per observed partition, ordered by (region, device_id).
/// The standard deviation uses the population definition, so a partition
/// with a single sample reports 0 rather than NaN. An empty table yields an
/// empty vector.
pub fn compute_latency_stats(table: &TelemetryTable) -> Vec<LatencyStats> {
    let mut partitions: BTreeMap<(String, String), Vec<f64>> = BTreeMap::new();
    for record in table.records() {
        partitions
            .entry((record.region.clone(), record.device_id.clone()))
            .or_default()
            .push(record.latency_ms);
    }

    partitions
        .into_iter()
        .map(|((region, device_id), latencies)| {
            let summary = np_math::summarize(&latencies);
            LatencyStats {
                region,
                device_id,
                mean_latency_ms: summary.mean,
                median_latency_ms: summary.median,
                max_latency_ms: summary.max,
                latency_std_ms: summary.std,
                samples: summary.count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata::sample_table;

    #[test]
    fn one_row_per_distinct_partition() {
        let stats = compute_latency_stats(&sample_table());
        assert_eq!(stats.len(), 4);

        let keys: Vec<(&str, &str)> = stats
            .iter()
            .map(|s| (s.region.as_str(), s.device_id.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("us-east", "edge-01"),
                ("us-east", "edge-02"),
                ("us-west", "edge-02"),
                ("us-west", "edge-03"),
            ]
        );
    }

    #[test]
    fn partition_statistics_are_correct() {
        let stats = compute_latency_stats(&sample_table());
        let east_01 = stats
            .iter()
            .find(|s| s.region == "us-east" && s.device_id == "edge-01")
            .unwrap();
        assert_eq!(east_01.samples, 2);
        assert!((east_01.mean_latency_ms - 52.5).abs() < 1e-9);
        assert!((east_01.median_latency_ms - 52.5).abs() < 1e-9);
        assert_eq!(east_01.max_latency_ms, 55.0);
        assert!((east_01.latency_std_ms - 2.5).abs() < 1e-9);
    }

    #[test]
    fn single_sample_partition_has_zero_std() {
        let stats = compute_latency_stats(&sample_table());
        let west_02 = stats
            .iter()
            .find(|s| s.region == "us-west" && s.device_id == "edge-02")
            .unwrap();
        assert_eq!(west_02.samples, 1);
        assert_eq!(west_02.latency_std_ms, 0.0);
        assert_eq!(west_02.max_latency_ms, 200.0);
    }

    #[test]
    fn empty_table_yields_empty_stats() {
        let table = TelemetryTable::from_records(Vec::new());
        assert!(compute_latency_stats(&table).is_empty());
    }
}
