use super::{Ansi256Theme, DocuBuilderDarkTheme, DocuBuilderTheme, Theme};

/// Describes a selectable theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used in config files and on the command line.
    pub id: &'static str,
    /// Human-readable name shown in logs.
    pub label: &'static str,
    /// Alternative spellings accepted for `id`.
    pub aliases: &'static [&'static str],
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "docubuilder",
        label: "DocuBuilder",
        aliases: &["light", "default"],
        factory: || Box::new(DocuBuilderTheme::new()),
    },
    ThemeDefinition {
        id: "docubuilder_dark",
        label: "DocuBuilder Dark",
        aliases: &["dark", "docubuilder-dark"],
        factory: || Box::new(DocuBuilderDarkTheme::new()),
    },
    ThemeDefinition {
        id: "ansi256",
        label: "ANSI 256",
        aliases: &["256", "ansi"],
        factory: || Box::new(Ansi256Theme::new()),
    },
];

pub fn all() -> &'static [ThemeDefinition] {
    THEME_DEFINITIONS
}

/// Locate a definition by id or alias (case-insensitive).
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    THEME_DEFINITIONS.iter().find(|definition| {
        definition.id.eq_ignore_ascii_case(name) || definition.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    })
}

/// Preferred default for truecolor terminals.
pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

/// Preferred default for ANSI-only terminals.
pub fn default_ansi() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_ids_and_aliases_case_insensitively() {
        assert_eq!(resolve("DocuBuilder").map(|d| d.id), Some("docubuilder"));
        assert_eq!(resolve("dark").map(|d| d.id), Some("docubuilder_dark"));
        assert_eq!(resolve("ANSI").map(|d| d.id), Some("ansi256"));
        assert!(resolve("dracula").is_none());
    }

    #[test]
    fn defaults_point_at_expected_palettes() {
        assert_eq!(default_truecolor().id, "docubuilder");
        assert_eq!(default_ansi().id, "ansi256");
    }
}
