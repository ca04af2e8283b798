//! Shared test fixtures for np-core unit tests.

use crate::table::TelemetryTable;
use chrono::{TimeZone, Utc};
use np_common::TelemetryRecord;

/// The canonical 6-row scenario: two devices in us-east, two in us-west,
/// with exactly one record (edge-02 in us-west) tripping all three fixed
/// detection thresholds.
pub(crate) fn sample_table() -> TelemetryTable {
    let rows: [(&str, &str, f64, f64, f64, f64); 6] = [
        ("edge-01", "us-east", 100.0, 50.0, 0.5, 70.0),
        ("edge-01", "us-east", 120.0, 55.0, 0.4, 72.0),
        ("edge-02", "us-east", 80.0, 60.0, 0.6, 65.0),
        ("edge-02", "us-west", 90.0, 200.0, 5.0, 95.0),
        ("edge-03", "us-west", 110.0, 45.0, 0.3, 60.0),
        ("edge-03", "us-west", 95.0, 50.0, 0.2, 58.0),
    ];

    let records = rows
        .iter()
        .enumerate()
        .map(
            |(i, (device_id, region, traffic, latency, loss, cpu))| TelemetryRecord {
                timestamp: Utc.with_ymd_and_hms(2023, 1, 1, 0, i as u32, 0).unwrap(),
                device_id: device_id.to_string(),
                region: region.to_string(),
                traffic_mbps: *traffic,
                latency_ms: *latency,
                packet_loss_pct: *loss,
                cpu_utilization_pct: *cpu,
            },
        )
        .collect();

    TelemetryTable::from_records(records)
}
