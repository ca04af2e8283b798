//! netpulse configuration loading and validation.
//!
//! This crate provides:
//! - Typed thresholds struct for bottleneck detection
//! - Config resolution (CLI flag → env var → built-in defaults)
//! - Semantic validation

pub mod resolve;
pub mod thresholds;

pub use resolve::{resolve_thresholds, THRESHOLDS_ENV_VAR};
pub use thresholds::Thresholds;
