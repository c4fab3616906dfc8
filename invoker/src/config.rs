//! Panel configuration loaded from `invoker.toml`.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

/// Display options for the invoker panel.
///
/// All fields default to enabled, so a missing or partial config file keeps
/// the full panel behavior.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PanelConfig {
    /// Show the value returned by the last invocation in the status line.
    #[serde(default = "enabled")]
    pub show_return_value: bool,
    /// Show full method signatures in entry headers instead of bare names.
    #[serde(default = "enabled")]
    pub show_signatures: bool,
    /// Log each invocation outcome via `log::info!`.
    #[serde(default = "enabled")]
    pub log_invocations: bool,
}

fn enabled() -> bool {
    true
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            show_return_value: true,
            show_signatures: true,
            log_invocations: true,
        }
    }
}

/// Errors that can occur while loading a panel config file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file is not valid TOML for [`PanelConfig`].
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "failed to read config: {err}"),
            ConfigError::Parse(err) => write!(f, "failed to parse config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Load a panel config from a TOML file.
///
/// Callers typically fall back to [`PanelConfig::default`] on error.
pub fn load_config(path: &Path) -> Result<PanelConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_enabled() {
        let config = PanelConfig::default();
        assert!(config.show_return_value);
        assert!(config.show_signatures);
        assert!(config.log_invocations);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: PanelConfig = toml::from_str("show_signatures = false").unwrap();
        assert!(!config.show_signatures);
        assert!(config.show_return_value);
        assert!(config.log_invocations);
    }

    #[test]
    fn empty_toml_is_default() {
        let config: PanelConfig = toml::from_str("").unwrap();
        assert_eq!(config, PanelConfig::default());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/invoker.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
