//! Exit codes for the netpulse CLI.
//!
//! Exit codes communicate the failure class without requiring output
//! parsing. These are stable.

use np_common::Error;

/// Exit codes for netpulse operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Run completed, outputs written
    Clean = 0,

    /// Configuration error (bad thresholds file)
    ConfigError = 10,

    /// Telemetry input error (malformed CSV, missing columns, bad timestamps)
    InputError = 11,

    /// I/O error (unreadable input, unwritable destination, failed render)
    IoError = 13,

    /// Internal/unknown error
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success.
    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Clean)
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err.code() {
            10..=19 => ExitCode::ConfigError,
            20..=29 => ExitCode::InputError,
            60..=79 => ExitCode::IoError,
            _ => ExitCode::InternalError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_classes_map_to_codes() {
        let err = Error::MissingColumn { name: "latency_ms".into() };
        assert_eq!(ExitCode::from(&err), ExitCode::InputError);

        let err = Error::InvalidThresholds("cpu_pct must be > 0".into());
        assert_eq!(ExitCode::from(&err), ExitCode::ConfigError);

        let err = Error::Report("template failed".into());
        assert_eq!(ExitCode::from(&err), ExitCode::IoError);
    }

    #[test]
    fn clean_is_the_only_success() {
        assert!(ExitCode::Clean.is_success());
        assert!(!ExitCode::InputError.is_success());
        assert_eq!(ExitCode::Clean.as_i32(), 0);
        assert_eq!(ExitCode::InputError.as_i32(), 11);
    }
}
