//! # DocuBuilder TUI
//!
//! Terminal rendition of the DocuBuilder navigation shell: a collapsible
//! sidebar built from the navigation model, a router that maps the current
//! path to a page, and placeholder pages for everything not built yet.
//!
//! Components follow a message/effect loop. Each handles keys and clicks,
//! mutates its own state, and returns [`docubuilder_types::Effect`]s that the
//! runtime applies (navigation, history, quit).

mod app;
mod ui;

use anyhow::Result;

pub use ui::theme::available_theme_ids;

/// Startup options for [`run`].
#[derive(Debug, Clone)]
pub struct ShellOptions {
    /// Path shown first; unknown paths open the not-found page.
    pub start_path: String,
    /// Theme id; `None` picks one from the terminal's color support.
    pub theme: Option<String>,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            start_path: "/".to_string(),
            theme: None,
        }
    }
}

/// Runs the shell until the user quits.
///
/// # Errors
///
/// Fails when the terminal cannot be put into raw mode or drawn to, or when
/// the route table is invalid.
pub async fn run(options: ShellOptions) -> Result<()> {
    ui::runtime::run_app(options).await
}
