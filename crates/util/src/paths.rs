use std::env;
use std::path::{Path, PathBuf};

use dirs_next::home_dir;

use crate::config::app_config_dir;

/// Environment variable overriding where the TUI writes its log file.
pub const LOG_PATH_ENV: &str = "DOCUBUILDER_LOG_PATH";

/// Default log filename inside the application config directory.
pub const LOG_FILE_NAME: &str = "docubuilder.log";

/// Expands a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(home_dir().as_deref(), path)
}

/// Expands a leading `~` against `home`. Without a home directory the input
/// is returned unchanged.
pub fn expand_tilde_with(home: Option<&Path>, path: &str) -> PathBuf {
    let trimmed = path.trim();
    let Some(home) = home else {
        return PathBuf::from(trimmed);
    };
    if trimmed == "~" {
        return home.to_path_buf();
    }
    match trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")) {
        Some(rest) => home.join(rest),
        None => PathBuf::from(trimmed),
    }
}

/// Log file location: the override variable when set, otherwise
/// `<config dir>/docubuilder/docubuilder.log`.
pub fn default_log_path() -> PathBuf {
    match env::var(LOG_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => expand_tilde(&path),
        _ => app_config_dir().join(LOG_FILE_NAME),
    }
}
