//! Thresholds resolution: CLI flag → env var → built-in defaults.

use crate::Thresholds;
use np_common::Result;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a thresholds JSON file.
pub const THRESHOLDS_ENV_VAR: &str = "NETPULSE_THRESHOLDS";

/// Resolve the effective thresholds.
///
/// An explicit CLI path wins; otherwise `NETPULSE_THRESHOLDS` is consulted;
/// otherwise the built-in defaults apply. A path that resolves but fails to
/// load or validate is an error, not a silent fallback.
pub fn resolve_thresholds(cli_path: Option<&Path>) -> Result<Thresholds> {
    if let Some(path) = cli_path {
        return Thresholds::from_file(path);
    }
    if let Ok(env_path) = std::env::var(THRESHOLDS_ENV_VAR) {
        if !env_path.is_empty() {
            return Thresholds::from_file(&PathBuf::from(env_path));
        }
    }
    Ok(Thresholds::default())
}
