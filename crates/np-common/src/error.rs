//! Error types for netpulse.

use thiserror::Error;

/// Result type alias for netpulse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for netpulse.
///
/// The pipeline is all-or-nothing: any of these aborts the run. Empty input
/// is deliberately NOT represented here; a zero-row table degrades to empty
/// outputs instead of failing.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid thresholds: {0}")]
    InvalidThresholds(String),

    // Input errors (20-29)
    #[error("malformed telemetry input: {0}")]
    Input(String),

    #[error("required column missing from header: {name}")]
    MissingColumn { name: String },

    #[error("row {row}: unparseable timestamp '{value}'")]
    BadTimestamp { row: usize, value: String },

    #[error("row {row}: bad value '{value}' for column {column}: {reason}")]
    BadField {
        row: usize,
        column: String,
        value: String,
        reason: String,
    },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Report errors (70-79)
    #[error("report generation failed: {0}")]
    Report(String),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used for detailed error reporting and exit-code mapping.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidThresholds(_) => 11,
            Error::Input(_) => 20,
            Error::MissingColumn { .. } => 21,
            Error::BadTimestamp { .. } => 22,
            Error::BadField { .. } => 23,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
            Error::Report(_) => 70,
        }
    }

    /// True for errors caused by the telemetry input file rather than the
    /// environment or configuration.
    pub fn is_input(&self) -> bool {
        matches!(self.code(), 20..=29)
    }
}
