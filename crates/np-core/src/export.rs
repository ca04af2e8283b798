//! Bottleneck CSV export.
//!
//! Columns are exactly `device_id, region, metric, severity, description`.
//! The header is written even for an empty list. Fields containing commas,
//! quotes, or newlines are RFC 4180 quoted; descriptions always contain
//! commas.

use np_common::{Bottleneck, Result};
use std::path::Path;

const HEADER: &str = "device_id,region,metric,severity,description";

/// Write bottlenecks to a CSV file, creating parent directories as needed.
pub fn export_bottlenecks(bottlenecks: &[Bottleneck], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut out = String::with_capacity(64 + bottlenecks.len() * 128);
    out.push_str(HEADER);
    out.push('\n');
    for b in bottlenecks {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            csv_field(&b.device_id),
            csv_field(&b.region),
            csv_field(&b.metric),
            b.severity,
            csv_field(&b.description),
        ));
    }

    std::fs::write(path, out)?;
    Ok(())
}

/// Quote a field per RFC 4180 when it contains a delimiter, quote, or
/// newline; return it verbatim otherwise.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
