use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Brand palette shared with the web design tokens
pub const PRIMARY: Color = Color::Rgb(0x24, 0x85, 0x67); // #248567
pub const PRIMARY_HOVER: Color = Color::Rgb(0x1D, 0x6B, 0x53); // #1d6b53
pub const TEXT_MAIN: Color = Color::Rgb(0x2F, 0x2F, 0x2F); // #2f2f2f
pub const TEXT_SECONDARY: Color = Color::Rgb(0x6B, 0x72, 0x80); // #6b7280

// Neutral grays
pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const GRAY_50: Color = Color::Rgb(0xF9, 0xFA, 0xFB);
pub const GRAY_100: Color = Color::Rgb(0xF3, 0xF4, 0xF6);
pub const GRAY_200: Color = Color::Rgb(0xE5, 0xE7, 0xEB);
pub const GRAY_400: Color = Color::Rgb(0x9C, 0xA3, 0xAF);
pub const PRIMARY_TINT: Color = Color::Rgb(0xE9, 0xF3, 0xF0); // primary at 10% over white

// Dark surfaces
pub const SLATE_900: Color = Color::Rgb(0x17, 0x1B, 0x22);
pub const SLATE_800: Color = Color::Rgb(0x21, 0x26, 0x2F);
pub const SLATE_700: Color = Color::Rgb(0x33, 0x3A, 0x46);
pub const SLATE_400: Color = Color::Rgb(0x94, 0x9B, 0xA8);
pub const SLATE_100: Color = Color::Rgb(0xE6, 0xE8, 0xEC);
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x4F, 0xC0, 0x9A);
pub const PRIMARY_DARK_TINT: Color = Color::Rgb(0x1A, 0x33, 0x2C);

pub const INFO: Color = Color::Rgb(0x25, 0x63, 0xEB);
pub const ERROR: Color = Color::Rgb(0xDC, 0x26, 0x26);

/// Light theme matching the product's web styling.
#[derive(Debug, Clone)]
pub struct DocuBuilderTheme {
    roles: ThemeRoles,
}

impl DocuBuilderTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: GRAY_50,
                surface: WHITE,
                border: GRAY_200,
                divider: GRAY_200,

                text: TEXT_MAIN,
                text_secondary: TEXT_SECONDARY,
                text_muted: GRAY_400,
                text_on_accent: WHITE,

                accent_primary: PRIMARY,
                accent_primary_strong: PRIMARY_HOVER,
                accent_subtle: PRIMARY_TINT,

                info: INFO,
                error: ERROR,

                selection_bg: GRAY_100,
                selection_fg: TEXT_MAIN,
                focus: PRIMARY,
            },
        }
    }
}

impl Theme for DocuBuilderTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// Dark variant keeping the brand green as accent.
#[derive(Debug, Clone)]
pub struct DocuBuilderDarkTheme {
    roles: ThemeRoles,
}

impl DocuBuilderDarkTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: SLATE_900,
                surface: SLATE_800,
                border: SLATE_700,
                divider: SLATE_700,

                text: SLATE_100,
                text_secondary: SLATE_400,
                text_muted: TEXT_SECONDARY,
                text_on_accent: WHITE,

                accent_primary: PRIMARY_LIGHT,
                accent_primary_strong: PRIMARY,
                accent_subtle: PRIMARY_DARK_TINT,

                info: Color::Rgb(0x60, 0xA5, 0xFA),
                error: Color::Rgb(0xF8, 0x71, 0x71),

                selection_bg: SLATE_700,
                selection_fg: SLATE_100,
                focus: PRIMARY_LIGHT,
            },
        }
    }
}

impl Theme for DocuBuilderDarkTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
