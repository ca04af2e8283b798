//! End-to-end pipeline tests over real files.

use np_config::Thresholds;
use np_core::{export, pipeline, TelemetryTable};
use std::path::PathBuf;

const HEADER: &str =
    "timestamp,device_id,region,traffic_mbps,latency_ms,packet_loss_pct,cpu_utilization_pct";

/// The canonical 6-row scenario, with rows deliberately shuffled on disk.
fn write_sample_csv(dir: &tempfile::TempDir) -> PathBuf {
    let rows = [
        "2023-01-01 00:04:00,edge-03,us-west,110,45,0.3,60",
        "2023-01-01 00:00:00,edge-01,us-east,100,50,0.5,70",
        "2023-01-01 00:03:00,edge-02,us-west,90,200,5.0,95",
        "2023-01-01 00:01:00,edge-01,us-east,120,55,0.4,72",
        "2023-01-01 00:05:00,edge-03,us-west,95,50,0.2,58",
        "2023-01-01 00:02:00,edge-02,us-east,80,60,0.6,65",
    ];
    let path = dir.path().join("telemetry.csv");
    std::fs::write(&path, format!("{HEADER}\n{}\n", rows.join("\n"))).unwrap();
    path
}

#[test]
fn full_run_over_sample_file() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_sample_csv(&dir);

    let bundle = pipeline::run_pipeline(&csv, &Thresholds::default()).unwrap();

    // Rows arrive sorted even though the file is shuffled.
    let timestamps: Vec<_> = bundle.telemetry.records().iter().map(|r| r.timestamp).collect();
    assert!(timestamps.windows(2).all(|w| w[0] <= w[1]));

    assert_eq!(bundle.latency_stats.len(), 4);
    assert_eq!(bundle.reliability.len(), 2);
    assert_eq!(bundle.bottlenecks.len(), 1);
    assert_eq!(bundle.bottlenecks[0].device_id, "edge-02");
    assert_eq!(bundle.bottlenecks[0].severity, 1.5);
}

#[test]
fn two_runs_export_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_sample_csv(&dir);
    let thresholds = Thresholds::default();

    let first = pipeline::run_pipeline(&csv, &thresholds).unwrap();
    let second = pipeline::run_pipeline(&csv, &thresholds).unwrap();

    let path_a = dir.path().join("a.csv");
    let path_b = dir.path().join("b.csv");
    export::export_bottlenecks(&first.bottlenecks, &path_a).unwrap();
    export::export_bottlenecks(&second.bottlenecks, &path_b).unwrap();

    assert_eq!(
        std::fs::read(&path_a).unwrap(),
        std::fs::read(&path_b).unwrap()
    );
}

#[test]
fn header_only_file_degrades_to_empty_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("empty.csv");
    std::fs::write(&csv, format!("{HEADER}\n")).unwrap();

    let bundle = pipeline::run_pipeline(&csv, &Thresholds::default()).unwrap();
    assert!(bundle.telemetry.is_empty());
    assert!(bundle.latency_stats.is_empty());
    assert!(bundle.reliability.is_empty());
    assert!(bundle.bottlenecks.is_empty());

    // An empty run still exports a header-only bottleneck file.
    let out = dir.path().join("bottlenecks.csv");
    export::export_bottlenecks(&bundle.bottlenecks, &out).unwrap();
    let content = std::fs::read_to_string(&out).unwrap();
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn missing_column_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("bad.csv");
    std::fs::write(
        &csv,
        "timestamp,device_id,region,traffic_mbps,packet_loss_pct,cpu_utilization_pct\n",
    )
    .unwrap();

    let err = pipeline::run_pipeline(&csv, &Thresholds::default()).unwrap_err();
    assert_eq!(err.code(), 21);
}

#[test]
fn exported_bottlenecks_reload_as_csv() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_sample_csv(&dir);
    let bundle = pipeline::run_pipeline(&csv, &Thresholds::default()).unwrap();

    let out = dir.path().join("bottlenecks.csv");
    export::export_bottlenecks(&bundle.bottlenecks, &out).unwrap();

    let content = std::fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("device_id,region,metric,severity,description")
    );
    let row = lines.next().unwrap();
    assert!(row.starts_with("edge-02,us-west,latency/packet_loss/cpu,1.5,"));
    assert!(row.contains("2023-01-01 00:03:00"));
}

#[test]
fn custom_thresholds_change_detection() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_sample_csv(&dir);

    let strict = Thresholds {
        latency_ms: 40.0,
        ..Thresholds::default()
    };
    let bundle = pipeline::run_pipeline(&csv, &strict).unwrap();
    assert_eq!(bundle.bottlenecks.len(), 6);
}

#[test]
fn loader_matches_in_memory_table() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_sample_csv(&dir);

    let loaded = TelemetryTable::load_csv(&csv).unwrap();
    assert_eq!(loaded.len(), 6);
    assert_eq!(loaded.records()[3].device_id, "edge-02");
    assert_eq!(loaded.records()[3].latency_ms, 200.0);
}
