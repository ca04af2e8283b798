//! netpulse core: the bottleneck detection and aggregation pipeline.
//!
//! The pipeline is a single-pass batch computation over an in-memory,
//! timestamp-sorted telemetry table:
//!
//! load → latency stats → reliability KPIs → bottleneck detection
//!
//! Every stage is a pure function of the immutable [`table::TelemetryTable`];
//! no stage depends on another's output. Any load failure aborts the whole
//! run; zero rows is not an error and degrades to empty outputs.

pub mod cli;
pub mod detect;
pub mod exit_codes;
pub mod export;
pub mod logging;
pub mod pipeline;
pub mod reliability;
pub mod stats;
pub mod synth;
pub mod table;

#[cfg(test)]
pub(crate) mod testdata;

pub use detect::detect_performance_bottlenecks;
pub use exit_codes::ExitCode;
pub use pipeline::{run_pipeline, AnalyticsBundle};
pub use reliability::summarize_reliability_metrics;
pub use stats::compute_latency_stats;
pub use table::TelemetryTable;
