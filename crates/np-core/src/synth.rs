//! Synthetic telemetry generation for analysis pipelines.
//!
//! Produces seeded, reproducible telemetry for 20 edge devices across four
//! regions at a fixed cadence. A small fraction of records gets injected
//! latency/loss/CPU spikes to emulate bottlenecks.

use chrono::{DateTime, Duration, TimeZone, Utc};
use np_common::{Result, TelemetryRecord};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Gamma, Normal};
use std::path::Path;

const REGIONS: [&str; 4] = ["us-east", "us-west", "eu-central", "ap-south"];

/// Fraction of records receiving an injected spike.
const SPIKE_PROBABILITY: f64 = 0.02;

/// Generator parameters.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub records: usize,
    pub start: DateTime<Utc>,
    pub minutes_between: i64,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            records: 12_000,
            start: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            minutes_between: 1,
            seed: 2024,
        }
    }
}

/// Create synthetic telemetry for multiple network devices.
///
/// Distributions: traffic ~ Gamma(4, 20), latency ~ Normal(50, 10) floored
/// at 1 ms, loss ~ Normal(0.5, 0.2) floored at 0, CPU ~ Normal(55, 15)
/// clipped to [0, 100]. Spiked records multiply latency by 1.8-2.4, add
/// 1.5-3.0 points of loss, and add 15-25 points of CPU (capped at 100).
pub fn simulate_telemetry_records(config: &GeneratorConfig) -> Vec<TelemetryRecord> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let device_ids: Vec<String> = (1..=20).map(|i| format!("edge-{i:02}")).collect();
    let traffic_dist = Gamma::new(4.0, 20.0).expect("valid gamma parameters");
    let latency_dist = Normal::new(50.0, 10.0).expect("valid normal parameters");
    let loss_dist = Normal::new(0.5, 0.2).expect("valid normal parameters");
    let cpu_dist = Normal::new(55.0, 15.0).expect("valid normal parameters");

    let mut records = Vec::with_capacity(config.records);
    for i in 0..config.records {
        let timestamp = config.start + Duration::minutes(i as i64 * config.minutes_between);
        let device_id = device_ids[rng.random_range(0..device_ids.len())].clone();
        let region = REGIONS[rng.random_range(0..REGIONS.len())].to_string();

        let traffic_mbps: f64 = traffic_dist.sample(&mut rng);
        let mut latency_ms: f64 = latency_dist.sample(&mut rng);
        let mut packet_loss: f64 = loss_dist.sample(&mut rng);
        packet_loss = packet_loss.max(0.0);
        let mut cpu_util: f64 = cpu_dist.sample(&mut rng);
        cpu_util = cpu_util.clamp(0.0, 100.0);

        // Inject occasional spikes to emulate bottlenecks.
        if rng.random::<f64>() < SPIKE_PROBABILITY {
            latency_ms *= rng.random_range(1.8..2.4);
            packet_loss += rng.random_range(1.5..3.0);
            cpu_util = (cpu_util + rng.random_range(15.0..25.0)).min(100.0);
        }

        records.push(TelemetryRecord {
            timestamp,
            device_id,
            region,
            traffic_mbps: round2(traffic_mbps),
            latency_ms: round2(latency_ms.max(1.0)),
            packet_loss_pct: round3(packet_loss),
            cpu_utilization_pct: round2(cpu_util),
        });
    }

    records
}

/// Write generated records as a telemetry CSV, creating parent directories
/// as needed. The output round-trips through the pipeline loader.
pub fn write_telemetry_csv(records: &[TelemetryRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut out = String::with_capacity(64 + records.len() * 80);
    out.push_str("timestamp,device_id,region,traffic_mbps,latency_ms,packet_loss_pct,cpu_utilization_pct\n");
    for r in records {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            r.timestamp.format("%Y-%m-%d %H:%M:%S"),
            r.device_id,
            r.region,
            r.traffic_mbps,
            r.latency_ms,
            r.packet_loss_pct,
            r.cpu_utilization_pct,
        ));
    }

    std::fs::write(path, out)?;
    Ok(())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
