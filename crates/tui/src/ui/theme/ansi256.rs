//! ANSI 256-color fallback for terminals without truecolor support.
//!
//! Approximates the light DocuBuilder palette with indexed colors.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(255),
                surface: Color::Indexed(231),
                border: Color::Indexed(252),
                divider: Color::Indexed(252),

                text: Color::Indexed(236),
                text_secondary: Color::Indexed(243),
                text_muted: Color::Indexed(247),
                text_on_accent: Color::Indexed(231),

                accent_primary: Color::Indexed(29),
                accent_primary_strong: Color::Indexed(23),
                accent_subtle: Color::Indexed(194),

                info: Color::Indexed(27),
                error: Color::Indexed(160),

                selection_bg: Color::Indexed(254),
                selection_fg: Color::Indexed(236),
                focus: Color::Indexed(29),
            },
        }
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
