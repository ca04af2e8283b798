//! netpulse HTML dashboard generation.
//!
//! Chart series are precomputed in Rust ([`series`]) and embedded into a
//! single self-contained HTML document as JSON, drawn client-side by
//! plotly.js loaded from a CDN. No analytic logic lives here: every number
//! in the dashboard arrives already computed by np-core.

pub mod dashboard;
pub mod series;

pub use dashboard::render_dashboard;
