//! Bottleneck detection threshold configuration.

use np_common::{schema, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_latency_ms() -> f64 {
    120.0
}

fn default_packet_loss_pct() -> f64 {
    2.0
}

fn default_cpu_pct() -> f64 {
    90.0
}

fn default_zscore_cutoff() -> f64 {
    2.5
}

/// Detection thresholds, passed explicitly into the detector.
///
/// The defaults match the shipped detection policy: 120 ms latency, 2% loss,
/// 90% CPU, and a 2.5 global z-score cutoff for the statistical criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Optional schema version stamp for thresholds files; checked for
    /// major-version compatibility when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,

    /// Fixed latency threshold in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: f64,

    /// Fixed packet-loss threshold in percent.
    #[serde(default = "default_packet_loss_pct")]
    pub packet_loss_pct: f64,

    /// Fixed CPU utilization threshold in percent.
    #[serde(default = "default_cpu_pct")]
    pub cpu_pct: f64,

    /// Global z-score cutoff applied to latency and loss.
    #[serde(default = "default_zscore_cutoff")]
    pub zscore_cutoff: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            schema_version: None,
            latency_ms: default_latency_ms(),
            packet_loss_pct: default_packet_loss_pct(),
            cpu_pct: default_cpu_pct(),
            zscore_cutoff: default_zscore_cutoff(),
        }
    }
}

impl Thresholds {
    /// Load thresholds from a JSON file and validate them.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let thresholds: Thresholds = serde_json::from_str(&content)
            .map_err(|e| Error::InvalidThresholds(format!("{}: {e}", path.display())))?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Semantic validation: every threshold must be strictly positive, and a
    /// declared schema version must be major-compatible.
    pub fn validate(&self) -> Result<()> {
        if let Some(version) = &self.schema_version {
            if !schema::is_compatible(version) {
                return Err(Error::InvalidThresholds(format!(
                    "schema version {version} incompatible with {}",
                    schema::SCHEMA_VERSION
                )));
            }
        }
        for (name, value) in [
            ("latency_ms", self.latency_ms),
            ("packet_loss_pct", self.packet_loss_pct),
            ("cpu_pct", self.cpu_pct),
            ("zscore_cutoff", self.zscore_cutoff),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidThresholds(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }
        Ok(())
    }
}
