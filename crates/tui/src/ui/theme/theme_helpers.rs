use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Filled brand-colored button; the selected one takes the pressed shade.
pub fn button_primary_style<T: Theme + ?Sized>(theme: &T, selected: bool) -> Style {
    let ThemeRoles {
        accent_primary,
        accent_primary_strong,
        text_on_accent,
        ..
    } = *theme.roles();
    let fill = if selected { accent_primary_strong } else { accent_primary };
    Style::default().bg(fill).fg(text_on_accent).add_modifier(Modifier::BOLD)
}

/// Outline button; the border carries the emphasis.
pub fn button_secondary_style<T: Theme + ?Sized>(theme: &T, selected: bool) -> Style {
    let style = Style::default().fg(theme.roles().text);
    if selected {
        return style.bg(theme.roles().selection_bg);
    }
    style
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonType {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy)]
pub struct ButtonRenderOptions {
    pub focused: bool,
    pub selected: bool,
    pub borders: Borders,
    pub button_type: ButtonType,
}

impl ButtonRenderOptions {
    pub fn new(focused: bool, selected: bool, borders: Borders, button_type: ButtonType) -> Self {
        Self {
            focused,
            selected,
            borders,
            button_type,
        }
    }
}

/// Renders a single-line button centered in `area`.
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, theme: &T, options: ButtonRenderOptions) {
    let style = match options.button_type {
        ButtonType::Primary => button_primary_style(theme, options.selected),
        ButtonType::Secondary => button_secondary_style(theme, options.selected),
    };
    let style = if options.focused {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    };

    let padding = if options.borders.is_empty() {
        Padding::horizontal(1)
    } else {
        Padding::ZERO
    };

    frame.render_widget(
        Paragraph::new(label).centered().style(style).block(
            Block::default()
                .borders(options.borders)
                .border_type(BorderType::Rounded)
                .border_style(theme.border_style(options.focused))
                .padding(padding),
        ),
        area,
    );
}

/// Formats `(key, description)` pairs for the hints bar.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    hints
        .iter()
        .flat_map(|(key, description)| {
            [
                Span::styled(*key, theme.accent_primary_style().add_modifier(Modifier::BOLD)),
                Span::styled(*description, theme.text_muted_style()),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DocuBuilderTheme;

    #[test]
    fn selected_primary_button_uses_pressed_shade() {
        let theme = DocuBuilderTheme::new();
        let roles = theme.roles();
        assert_eq!(button_primary_style(&theme, false).bg, Some(roles.accent_primary));
        assert_eq!(button_primary_style(&theme, true).bg, Some(roles.accent_primary_strong));
        assert_ne!(roles.accent_primary, roles.accent_primary_strong);
    }
}
