use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use docubuilder_types::{Effect, Msg, NavSection};
use docubuilder_util::{display_width, truncate_to_width};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Borders, Paragraph},
};

use super::icons::{disclosure, glyph};
use super::view::{CREATE_PATH, RowKind, SidebarAction, SidebarRow, SidebarView};
use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::theme::{
    Theme,
    theme_helpers::{self as th, ButtonRenderOptions, ButtonType, render_button},
};

/// Renders [`SidebarView`]s and turns sidebar input into state changes or
/// navigation effects.
#[derive(Debug, Default)]
pub struct SidebarComponent;

/// A line of the sidebar's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Row(usize),
    Divider,
    Blank,
}

impl SidebarComponent {
    /// Performs what a row does when activated by key or click.
    fn activate(app: &mut App, action: SidebarAction) -> Vec<Effect> {
        match action {
            SidebarAction::ToggleCollapse => app.update(&Msg::ToggleSidebar),
            SidebarAction::Create => vec![Effect::Navigate(CREATE_PATH.to_string())],
            SidebarAction::Navigate(path) => vec![Effect::Navigate(path.to_string())],
            SidebarAction::ToggleGroup(label) => {
                app.sidebar.toggle_group(label);
                let state = if app.sidebar.nav().is_expanded(label) { "geöffnet" } else { "geschlossen" };
                app.logs.info(format!("Gruppe {label} {state}"));
                Vec::new()
            }
        }
    }

    /// Right opens a closed group; Left closes an open one or jumps from a
    /// child to its group.
    fn disclose(app: &mut App, open: bool) {
        let view = app.sidebar.view(app.current_path());
        let Some(row) = view.rows.get(app.sidebar.cursor()) else {
            return;
        };
        match (row.kind, row.action, row.expanded) {
            (RowKind::Group, SidebarAction::ToggleGroup(label), Some(expanded)) if expanded != open => {
                app.sidebar.toggle_group(label);
            }
            (RowKind::Child { group }, _, _) if !open => {
                app.sidebar.set_cursor_to(SidebarAction::ToggleGroup(group));
            }
            _ => {}
        }
    }

    /// Top slots (header through secondary) and footer slots for `view`.
    fn slots(view: &SidebarView) -> (Vec<Slot>, Vec<Slot>) {
        let mut top = Vec::with_capacity(view.rows.len() + 3);
        let mut footer = vec![Slot::Divider];
        for (index, row) in view.rows.iter().enumerate() {
            match row.section {
                None => top.push(Slot::Row(index)),
                Some(NavSection::Primary) => {
                    if top.last() == Some(&Slot::Row(1)) {
                        top.push(Slot::Blank);
                    }
                    top.push(Slot::Row(index));
                }
                Some(NavSection::Secondary) => {
                    if !top.contains(&Slot::Divider) {
                        top.push(Slot::Divider);
                    }
                    top.push(Slot::Row(index));
                }
                Some(NavSection::Footer) => footer.push(Slot::Row(index)),
            }
        }
        (top, footer)
    }

    fn row_style(theme: &dyn Theme, row: &SidebarRow, under_cursor: bool) -> Style {
        let base = if row.active {
            theme.nav_active_style()
        } else if row.contains_active {
            theme.nav_contains_active_style()
        } else if matches!(row.kind, RowKind::Child { .. }) {
            theme.text_secondary_style()
        } else {
            theme.text_primary_style()
        };
        if under_cursor { base.patch(theme.selection_style()) } else { base }
    }

    fn row_line<'a>(theme: &dyn Theme, row: &SidebarRow, width: u16, collapsed: bool) -> Line<'a> {
        let width = width as usize;
        let icon = row.icon.map(glyph).unwrap_or(" ");
        if collapsed {
            let padding = width.saturating_sub(1) / 2;
            return Line::from(format!("{}{icon}", " ".repeat(padding)));
        }

        let (left, right) = match row.kind {
            RowKind::Header => (String::new(), format!("{icon} ")),
            RowKind::Child { .. } => (format!("     {}", row.label.unwrap_or_default()), String::new()),
            _ => (
                format!(" {icon}  {}", row.label.unwrap_or_default()),
                row.expanded.map(|expanded| format!("{} ", disclosure(expanded))).unwrap_or_default(),
            ),
        };

        if row.kind == RowKind::Header {
            let brand = truncate_to_width(row.label.unwrap_or_default(), width.saturating_sub(6));
            let gap = width.saturating_sub(4 + display_width(&brand) + display_width(&right));
            return Line::from(vec![
                Span::styled(" ▤ ", theme.accent_primary_style().add_modifier(Modifier::BOLD)),
                Span::styled(brand, theme.heading_style()),
                Span::raw(" ".repeat(gap + 1)),
                Span::styled(right, theme.text_muted_style()),
            ]);
        }

        let left = truncate_to_width(&left, width.saturating_sub(display_width(&right)));
        let gap = width.saturating_sub(display_width(&left) + display_width(&right));
        Line::from(format!("{left}{}{right}", " ".repeat(gap)))
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.sidebar.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => app.sidebar.move_cursor(1),
            KeyCode::Home => app.sidebar.cursor_to_first(),
            KeyCode::End => app.sidebar.cursor_to_last(),
            KeyCode::Right => Self::disclose(app, true),
            KeyCode::Left => Self::disclose(app, false),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(action) = app.sidebar.cursor_action() {
                    return Self::activate(app, action);
                }
            }
            KeyCode::Backspace => return vec![Effect::NavigateBack],
            KeyCode::Char('q') if key.modifiers == KeyModifiers::NONE => return vec![Effect::Quit],
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let Some(index) = app.sidebar.row_at(mouse.column, mouse.row) else {
            return Vec::new();
        };
        app.focus_sidebar();
        let Some(action) = app.sidebar.action_at(index) else {
            return Vec::new();
        };
        app.sidebar.set_cursor_to(action);
        Self::activate(app, action)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let focused = app.sidebar.focus.get();
        let view = app.sidebar.view(app.current_path());

        let block = th::block(theme, None, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (top, footer) = Self::slots(&view);
        let footer_y = inner.bottom().saturating_sub(footer.len() as u16).max(inner.y);
        let mut row_areas = vec![Rect::default(); view.rows.len()];

        let placed = top
            .iter()
            .enumerate()
            .map(|(offset, slot)| (inner.y + offset as u16, *slot))
            .take_while(|(y, _)| *y < footer_y)
            .chain(
                footer
                    .iter()
                    .enumerate()
                    .map(|(offset, slot)| (footer_y + offset as u16, *slot))
                    .take_while(|(y, _)| *y < inner.bottom()),
            );

        for (y, slot) in placed {
            let line_area = Rect::new(inner.x, y, inner.width, 1);
            match slot {
                Slot::Blank => {}
                Slot::Divider => {
                    let rule = "─".repeat(inner.width.saturating_sub(2) as usize);
                    frame.render_widget(
                        Paragraph::new(format!(" {rule}")).style(Style::default().fg(theme.roles().divider)),
                        line_area,
                    );
                }
                Slot::Row(index) => {
                    let row = &view.rows[index];
                    let under_cursor = focused && index == app.sidebar.cursor();
                    if row.kind == RowKind::Create {
                        let label = match row.label {
                            Some(label) => format!("{} {label}", glyph(docubuilder_types::Icon::Plus)),
                            None => glyph(docubuilder_types::Icon::Plus).to_string(),
                        };
                        let button_area = Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), 1);
                        render_button(
                            frame,
                            button_area,
                            &label,
                            theme,
                            ButtonRenderOptions::new(under_cursor, false, Borders::NONE, ButtonType::Primary),
                        );
                    } else {
                        let line = Self::row_line(theme, row, inner.width, view.collapsed);
                        frame.render_widget(Paragraph::new(line).style(Self::row_style(theme, row, under_cursor)), line_area);
                    }
                    row_areas[index] = line_area;
                }
            }
        }

        app.sidebar.last_area = area;
        app.sidebar.row_areas = row_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[
                (" ↑/↓", " Auswahl "),
                (" Enter", " Öffnen "),
                (" ←/→", " Gruppe "),
                (" Backspace", " Zurück "),
                (" q", " Beenden "),
            ],
        )
    }

    fn get_preferred_layout(&self, app: &App, area: Rect) -> Vec<Rect> {
        let width = app.sidebar.view(app.current_path()).width.min(area.width);
        vec![Rect::new(area.x, area.y, width, area.height)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::sidebar::SidebarState;
    use docubuilder_types::NavModel;

    #[test]
    fn slots_place_divider_between_sections_and_pin_footer() {
        let sidebar = SidebarState::new(NavModel::standard());
        let view = sidebar.view("/");
        let (top, footer) = SidebarComponent::slots(&view);

        assert_eq!(top[0], Slot::Row(0));
        assert_eq!(top[1], Slot::Row(1));
        assert_eq!(top[2], Slot::Blank);
        assert_eq!(top.iter().filter(|slot| **slot == Slot::Divider).count(), 1);
        assert_eq!(footer[0], Slot::Divider);
        assert_eq!(footer.len(), 4);
    }
}
