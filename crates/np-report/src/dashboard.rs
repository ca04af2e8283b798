//! Dashboard assembly and rendering.

use crate::series;
use askama::Template;
use chrono::Utc;
use np_common::{schema, Bottleneck, Error, LatencyStats, ReliabilitySummary, Result, TelemetryRecord};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;

/// One plotly figure: a mount-point id plus serialized data/layout JSON.
pub struct ChartSpec {
    pub div_id: String,
    pub data: String,
    pub layout: String,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate<'a> {
    charts: Vec<ChartSpec>,
    bottlenecks: &'a [Bottleneck],
    schema_version: &'a str,
    generated_at: String,
}

/// Render the dashboard HTML to `output`, creating parent directories as
/// needed. Charts backed by no data are skipped entirely, and the
/// bottleneck table section is omitted when the list is empty.
pub fn render_dashboard(
    records: &[TelemetryRecord],
    latency_stats: &[LatencyStats],
    reliability: &[ReliabilitySummary],
    bottlenecks: &[Bottleneck],
    output: &Path,
) -> Result<PathBuf> {
    let template = DashboardTemplate {
        charts: build_charts(records, latency_stats, reliability)?,
        bottlenecks,
        schema_version: schema::SCHEMA_VERSION,
        generated_at: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    };
    let html = template
        .render()
        .map_err(|e| Error::Report(e.to_string()))?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output, html)?;

    info!(path = %output.display(), bottlenecks = bottlenecks.len(), "dashboard written");
    Ok(output.to_path_buf())
}

fn build_charts(
    records: &[TelemetryRecord],
    latency_stats: &[LatencyStats],
    reliability: &[ReliabilitySummary],
) -> Result<Vec<ChartSpec>> {
    let mut charts = Vec::new();

    if !records.is_empty() {
        let traces: Vec<_> = series::latency_trend(records)
            .into_iter()
            .map(|s| {
                json!({
                    "type": "scatter",
                    "mode": "lines+markers",
                    "name": s.region,
                    "x": s.timestamps,
                    "y": s.latencies,
                })
            })
            .collect();
        charts.push(chart(
            "latency-trend",
            json!(traces),
            json!({
                "title": "Latency trend by region",
                "xaxis": { "title": "Timestamp" },
                "yaxis": { "title": "Latency (ms)" },
            }),
        )?);

        let heatmap = series::hourly_traffic(records);
        charts.push(chart(
            "traffic-heatmap",
            json!([{
                "type": "heatmap",
                "z": heatmap.totals,
                "x": heatmap.regions,
                "y": heatmap.hours,
                "colorscale": "Viridis",
                "colorbar": { "title": "Mbps" },
            }]),
            json!({
                "title": "Hourly traffic heatmap",
                "xaxis": { "title": "Region" },
                "yaxis": { "title": "Timestamp" },
            }),
        )?);
    }

    if !latency_stats.is_empty() {
        let traces: Vec<_> = series::mean_latency_by_device(latency_stats)
            .into_iter()
            .map(|bars| {
                json!({
                    "type": "bar",
                    "name": bars.region,
                    "x": bars.devices,
                    "y": bars.mean_latencies,
                })
            })
            .collect();
        charts.push(chart(
            "device-latency",
            json!(traces),
            json!({
                "title": "Average latency by device",
                "barmode": "group",
                "yaxis": { "title": "Mean latency (ms)" },
            }),
        )?);
    }

    if !reliability.is_empty() {
        let regions: Vec<&str> = reliability.iter().map(|r| r.region.as_str()).collect();
        let kpis: [(&str, Vec<f64>); 3] = [
            (
                "uptime_score",
                reliability.iter().map(|r| r.uptime_score).collect(),
            ),
            (
                "performance_score",
                reliability.iter().map(|r| r.performance_score).collect(),
            ),
            (
                "avg_cpu_utilization_pct",
                reliability.iter().map(|r| r.avg_cpu_utilization_pct).collect(),
            ),
        ];
        let traces: Vec<_> = kpis
            .iter()
            .map(|(name, values)| {
                json!({
                    "type": "bar",
                    "name": name,
                    "x": regions,
                    "y": values,
                })
            })
            .collect();
        charts.push(chart(
            "reliability-kpis",
            json!(traces),
            json!({
                "title": "Reliability KPIs by region",
                "barmode": "group",
            }),
        )?);
    }

    Ok(charts)
}

fn chart(div_id: &str, data: serde_json::Value, layout: serde_json::Value) -> Result<ChartSpec> {
    Ok(ChartSpec {
        div_id: div_id.to_string(),
        data: serde_json::to_string(&data)?,
        layout: serde_json::to_string(&layout)?,
    })
}
