//! Telemetry CSV loading and the in-memory table.
//!
//! The loader is deliberately strict: a header row is required, columns are
//! located by name (any column order is accepted), and the first malformed
//! row aborts the load with its row number. Rows are sorted ascending by
//! timestamp before the table is handed to any aggregation.

use chrono::{DateTime, NaiveDateTime, Utc};
use np_common::{Error, Result, TelemetryRecord};
use std::path::Path;

/// Required CSV columns, by header name.
const REQUIRED_COLUMNS: [&str; 7] = [
    "timestamp",
    "device_id",
    "region",
    "traffic_mbps",
    "latency_ms",
    "packet_loss_pct",
    "cpu_utilization_pct",
];

/// Immutable, timestamp-sorted telemetry table.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryTable {
    records: Vec<TelemetryRecord>,
}

impl TelemetryTable {
    /// Build a table from records, enforcing the ascending-timestamp
    /// invariant. Equal timestamps keep their given order.
    pub fn from_records(mut records: Vec<TelemetryRecord>) -> Self {
        records.sort_by_key(|r| r.timestamp);
        Self { records }
    }

    /// Load a telemetry CSV file.
    ///
    /// Any malformed row, missing column, or unparseable timestamp is fatal;
    /// a file containing only the header yields an empty table.
    pub fn load_csv(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_csv(&content)
    }

    /// Parse telemetry CSV content. See [`TelemetryTable::load_csv`].
    pub fn parse_csv(content: &str) -> Result<Self> {
        let mut lines = content.lines().enumerate();

        let header = loop {
            match lines.next() {
                Some((_, line)) if line.trim().is_empty() => continue,
                Some((_, line)) => break line,
                None => return Err(Error::Input("empty file: no header row".into())),
            }
        };

        let columns: Vec<&str> = header.split(',').map(str::trim).collect();
        let mut index = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, name) in index.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = columns
                .iter()
                .position(|c| *c == name)
                .ok_or_else(|| Error::MissingColumn { name: name.into() })?;
        }
        let width = index.iter().max().copied().unwrap_or(0) + 1;

        let mut records = Vec::new();
        for (line_no, line) in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line_no + 1; // 1-based, counting the header line
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() < width {
                return Err(Error::Input(format!(
                    "row {row}: expected at least {width} fields, got {}",
                    fields.len()
                )));
            }
            records.push(TelemetryRecord {
                timestamp: parse_timestamp(fields[index[0]], row)?,
                device_id: fields[index[1]].to_string(),
                region: fields[index[2]].to_string(),
                traffic_mbps: parse_f64(fields[index[3]], "traffic_mbps", row)?,
                latency_ms: parse_f64(fields[index[4]], "latency_ms", row)?,
                packet_loss_pct: parse_f64(fields[index[5]], "packet_loss_pct", row)?,
                cpu_utilization_pct: parse_f64(fields[index[6]], "cpu_utilization_pct", row)?,
            });
        }

        Ok(Self::from_records(records))
    }

    /// Records in ascending timestamp order.
    pub fn records(&self) -> &[TelemetryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Accepted timestamp formats: RFC 3339, or a naive
/// `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS` taken as UTC.
fn parse_timestamp(value: &str, row: usize) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(Error::BadTimestamp {
        row,
        value: value.to_string(),
    })
}

fn parse_f64(value: &str, column: &str, row: usize) -> Result<f64> {
    value.parse::<f64>().map_err(|e| Error::BadField {
        row,
        column: column.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}
