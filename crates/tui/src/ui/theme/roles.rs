use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Semantic color roles used throughout the UI.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub divider: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    /// Text drawn on top of `accent_primary` (filled buttons, logo tile).
    pub text_on_accent: Color,

    /// Brand color: primary buttons, active navigation, focus cues.
    pub accent_primary: Color,
    /// Pressed shade of the brand color, used for the selected primary button.
    pub accent_primary_strong: Color,
    /// Tinted background behind active navigation rows.
    pub accent_subtle: Color,

    pub info: Color,
    pub error: Color,

    pub selection_bg: Color,
    pub selection_fg: Color,
    pub focus: Color,
}

/// Theme trait exposes semantic roles and common style builders.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }
    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    fn heading_style(&self) -> Style {
        Style::default().fg(self.roles().text).add_modifier(Modifier::BOLD)
    }

    fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.roles().focus } else { self.roles().border };
        Style::default().fg(color)
    }

    /// Keyboard cursor inside lists (sidebar rows, quick actions).
    fn selection_style(&self) -> Style {
        Style::default().fg(self.roles().selection_fg).bg(self.roles().selection_bg)
    }

    /// Navigation entry matching the current path.
    fn nav_active_style(&self) -> Style {
        Style::default()
            .fg(self.roles().accent_primary)
            .bg(self.roles().accent_subtle)
            .add_modifier(Modifier::BOLD)
    }

    /// Group header whose child matches the current path.
    fn nav_contains_active_style(&self) -> Style {
        Style::default().fg(self.roles().accent_primary)
    }

    fn accent_primary_style(&self) -> Style {
        Style::default().fg(self.roles().accent_primary)
    }

    fn status_error(&self) -> Style {
        Style::default().fg(self.roles().error)
    }
    fn status_info(&self) -> Style {
        Style::default().fg(self.roles().info)
    }
}
