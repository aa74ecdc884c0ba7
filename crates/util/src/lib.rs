//! Configuration loading, filesystem locations and text helpers shared by the
//! DocuBuilder binary and TUI.

pub mod config;
pub mod paths;
pub mod text;

pub use config::{AppConfig, ConfigError, default_config_path};
pub use paths::{default_log_path, expand_tilde};
pub use text::{display_width, truncate_to_width};
