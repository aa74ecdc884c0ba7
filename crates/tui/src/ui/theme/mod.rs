//! Theme styling for the TUI.
//!
//! Defines the DocuBuilder palettes, an ANSI 256-color fallback, semantic
//! theme roles, and helper builders for ratatui widgets. Prefer these helpers
//! over hard-coding colors.

use std::env;

use tracing::debug;

pub mod ansi256;
pub mod catalog;
pub mod docubuilder;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use catalog::ThemeDefinition;
pub use docubuilder::{DocuBuilderDarkTheme, DocuBuilderTheme};
pub use roles::Theme;

/// Theme plus the definition it was built from.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    fn from_definition(definition: &'static ThemeDefinition) -> Self {
        debug!(theme = definition.id, label = definition.label, "theme selected");
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme from `TUI_THEME`, the configured preference, and the
/// terminal's color capability, in that order. ANSI-only terminals always get
/// the fallback palette.
pub fn load(preferred_theme: Option<&str>) -> LoadedTheme {
    if detect_color_capability() == ColorCapability::Ansi256 {
        debug!("ANSI-only terminal detected; using fallback palette");
        return LoadedTheme::from_definition(catalog::default_ansi());
    }

    if let Ok(theme_name) = env::var("TUI_THEME")
        && let Some(definition) = catalog::resolve(theme_name.trim())
    {
        return LoadedTheme::from_definition(definition);
    }

    if let Some(name) = preferred_theme {
        match catalog::resolve(name.trim()) {
            Some(definition) => return LoadedTheme::from_definition(definition),
            None => debug!(theme = name, "unknown theme requested; using default"),
        }
    }

    LoadedTheme::from_definition(catalog::default_truecolor())
}

/// Ids accepted by [`load`], in catalog order.
pub fn available_theme_ids() -> Vec<&'static str> {
    catalog::all().iter().map(|definition| definition.id).collect()
}

fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var("TUI_COLOR_MODE").ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") || term.contains("direct") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}
