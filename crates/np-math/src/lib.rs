//! netpulse math utilities.

pub mod descriptive;

pub use descriptive::*;
