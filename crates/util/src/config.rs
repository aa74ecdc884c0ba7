//! Read-only application configuration.
//!
//! A small JSON file in the standard configuration directory
//! (`~/.config/docubuilder/config.json` on most platforms) can set the start
//! path and the theme. The file is optional and never written by the
//! application; command-line flags take precedence over it.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::expand_tilde;

/// Environment variable allowing callers to override the config file path.
pub const CONFIG_PATH_ENV: &str = "DOCUBUILDER_CONFIG_PATH";

/// Default filename for the JSON payload.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Directory name below the platform config directory.
pub const APP_DIR_NAME: &str = "docubuilder";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure other than a missing file.
    #[error("config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse error at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Path the shell opens on start, e.g. `/documents`.
    pub start_path: Option<String>,
    /// Theme identifier, e.g. `docubuilder` or `docubuilder_dark`.
    pub theme: Option<String>,
}

impl AppConfig {
    /// Loads the file at `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Loads the config, falling back to defaults (with a warning) when the
    /// file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|error| {
            warn!(error = %error, "Failed to load config file; using defaults");
            Self::default()
        })
    }

    /// Applies values given on the command line over the file values.
    pub fn merged_with(self, start_path: Option<String>, theme: Option<String>) -> Self {
        Self {
            start_path: start_path.or(self.start_path),
            theme: theme.or(self.theme),
        }
    }
}

/// Location of the config file: the override variable when set, otherwise
/// the platform config directory.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    app_config_dir().join(CONFIG_FILE_NAME)
}

/// `<platform config dir>/docubuilder`, or `./docubuilder` when the platform
/// has no config directory.
pub fn app_config_dir() -> PathBuf {
    config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig::load_from(&dir.path().join("absent.json")).expect("load");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reads_start_path_and_theme() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "start_path": "/documents", "theme": "docubuilder_dark" }}"#).expect("write");

        let config = AppConfig::load_from(file.path()).expect("load");
        assert_eq!(config.start_path.as_deref(), Some("/documents"));
        assert_eq!(config.theme.as_deref(), Some("docubuilder_dark"));
    }

    #[test]
    fn malformed_file_is_an_error_but_load_or_default_recovers() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{ not json").expect("write");

        assert!(matches!(AppConfig::load_from(file.path()), Err(ConfigError::Parse { .. })));
        assert_eq!(AppConfig::load_or_default(file.path()), AppConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "collapsed": true }}"#).expect("write");
        assert!(AppConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn command_line_values_win() {
        let file_config = AppConfig {
            start_path: Some("/contacts".into()),
            theme: Some("docubuilder".into()),
        };
        let merged = file_config.merged_with(Some("/settings".into()), None);
        assert_eq!(merged.start_path.as_deref(), Some("/settings"));
        assert_eq!(merged.theme.as_deref(), Some("docubuilder"));
    }

    #[test]
    fn env_override_controls_config_path() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("/tmp/docubuilder-test.json"), || {
            assert_eq!(default_config_path(), PathBuf::from("/tmp/docubuilder-test.json"));
        });
        temp_env::with_var(CONFIG_PATH_ENV, Some("   "), || {
            assert!(default_config_path().ends_with("docubuilder/config.json"));
        });
    }
}
