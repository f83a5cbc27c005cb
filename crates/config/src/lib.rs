pub mod schema;

pub use schema::{ChartConfig, DriverConfig, PerfConfig};

use perf_core::{PerfError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.
///
/// A missing file yields `PerfConfig::default()`; any other read failure is
/// surfaced as [`PerfError::Io`]. The parsed document is validated before it
/// is returned.
pub fn load(path: impl AsRef<Path>) -> Result<PerfConfig> {
    let path = path.as_ref();
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("No config at '{}'; running with defaults.", path.display());
            return Ok(PerfConfig::default());
        }
        Err(e) => return Err(e.into()),
    };

    let config = parse(&raw)?;
    tracing::debug!("Loaded config from '{}'", path.display());
    Ok(config)
}

/// Parse and validate configuration from a TOML string.
pub fn parse(raw: &str) -> Result<PerfConfig> {
    let config: PerfConfig =
        toml::from_str(raw).map_err(|e| PerfError::Config(format!("TOML parse error: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Environment variable that overrides [`default_path`].
pub const CONFIG_ENV: &str = "PERF_ANALYZER_CONFIG";

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
///
/// `$PERF_ANALYZER_CONFIG`, when set, names the file directly.
pub fn default_path() -> PathBuf {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(explicit);
    }

    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("perf-analyzer").join("perf-analyzer.toml")
}
