//! netpulse common types and errors.
//!
//! This crate provides foundational types shared across the workspace:
//! - The telemetry record and the three derived result row types
//! - The unified error type with stable numeric codes
//! - Output schema versioning

pub mod error;
pub mod schema;
pub mod types;

pub use error::{Error, Result};
pub use schema::SCHEMA_VERSION;
pub use types::{Bottleneck, LatencyStats, ReliabilitySummary, TelemetryRecord};
