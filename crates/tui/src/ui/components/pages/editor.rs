use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use docubuilder_types::{Effect, Icon, editor_title};
use docubuilder_util::display_width;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::widgets::{ActionList, ActionTarget, Activation, PageAction, page_frame};
use crate::app::App;
use crate::ui::components::common::TextInputState;
use crate::ui::components::component::Component;
use crate::ui::components::sidebar::icons::glyph;
use crate::ui::theme::theme_helpers as th;

/// Editing tools in the tool column.
pub const TOOLS: &[(Icon, &str)] = &[(Icon::Type, "Text"), (Icon::Image, "Bild"), (Icon::Table, "Tabelle"), (Icon::Signature, "Signatur")];

const TOOL_IDS: [&str; 4] = ["tool.0", "tool.1", "tool.2", "tool.3"];

const ACTIONS: &[PageAction] = &[
    PageAction::secondary("title", None, "Titel", ActionTarget::Local),
    PageAction::secondary("download", Some(Icon::Download), "", ActionTarget::Inert),
    PageAction::secondary("more", Some(Icon::MoreHorizontal), "", ActionTarget::Inert),
    PageAction::secondary("share", Some(Icon::Share), "Teilen", ActionTarget::Inert),
    PageAction::primary("save", Icon::Save, "Speichern", ActionTarget::Inert),
    PageAction::secondary(TOOL_IDS[0], Some(Icon::Type), "Text", ActionTarget::Local),
    PageAction::secondary(TOOL_IDS[1], Some(Icon::Image), "Bild", ActionTarget::Local),
    PageAction::secondary(TOOL_IDS[2], Some(Icon::Table), "Tabelle", ActionTarget::Local),
    PageAction::secondary(TOOL_IDS[3], Some(Icon::Signature), "Signatur", ActionTarget::Local),
];

/// Document editor stub: an editable title, inert document actions, a tool
/// column, and an empty canvas. Nothing is saved; the title lives as long as
/// this page instance.
#[derive(Debug)]
pub struct EditorPage {
    actions: ActionList,
    title: TextInputState,
    editing_title: bool,
    tool: Option<usize>,
}

impl EditorPage {
    pub fn new(id: Option<&str>) -> Self {
        Self {
            actions: ActionList::new(ACTIONS),
            title: TextInputState::with_text(editor_title(id)),
            editing_title: false,
            tool: None,
        }
    }

    #[cfg(test)]
    pub fn title(&self) -> &str {
        self.title.input()
    }

    #[cfg(test)]
    pub fn tool(&self) -> Option<&'static str> {
        self.tool.map(|index| TOOLS[index].1)
    }

    fn apply(&mut self, activation: Activation) -> Vec<Effect> {
        match activation {
            Activation::Local("title") => self.editing_title = true,
            Activation::Local(id) => {
                if let Some(index) = TOOL_IDS.iter().position(|candidate| *candidate == id) {
                    self.tool = Some(index);
                }
            }
            other => return other.into_effects(),
        }
        Vec::new()
    }

    fn render_title(&self, frame: &mut Frame, area: Rect, app: &App, focused: bool) {
        let theme = &*app.ctx.theme;
        let selected = focused && (self.editing_title || self.actions.is_selected("title"));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_style(selected));
        let inner = block.inner(area);
        frame.render_widget(
            Paragraph::new(Span::styled(self.title.input().to_string(), theme.heading_style())).block(block),
            area,
        );
        if focused && self.editing_title && inner.width > 0 {
            let column = inner.x + self.title.cursor_column();
            frame.set_cursor_position(Position::new(column.min(inner.right().saturating_sub(1)), inner.y));
        }
    }

    fn render_tools(&mut self, frame: &mut Frame, area: Rect, app: &App, focused: bool) {
        let theme = &*app.ctx.theme;
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(theme.border_style(false));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        for (index, (icon, label)) in TOOLS.iter().enumerate() {
            let y = inner.y + (index as u16) * 2;
            if y >= inner.bottom() {
                break;
            }
            let row = Rect::new(inner.x, y, inner.width, 1);
            let mut style = if self.tool == Some(index) {
                theme.nav_active_style()
            } else {
                theme.text_primary_style()
            };
            if focused && self.actions.is_selected(TOOL_IDS[index]) {
                style = style.patch(theme.selection_style());
            }
            frame.render_widget(Paragraph::new(format!(" {} {label}", glyph(*icon))).style(style), row);
            self.actions.set_area(TOOL_IDS[index], row);
        }
    }
}

impl Component for EditorPage {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if self.editing_title {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.editing_title = false,
                _ => {
                    self.title.handle_key(key);
                }
            }
            return Vec::new();
        }
        match key.code {
            KeyCode::Char('e') => {
                self.actions.select("title");
                self.editing_title = true;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let activation = self.actions.activate_selected(app);
                return self.apply(activation);
            }
            _ => {
                self.actions.handle_nav_key(key);
            }
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let activation = self.actions.activate_at(app, mouse.column, mouse.row);
        self.apply(activation)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let focused = app.content_focus.get();
        let inner = page_frame(frame, area, &*app.ctx.theme, focused);
        self.actions.begin_render(area);

        let [top_bar, _, workspace] = Layout::vertical([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        let button_ids = ["download", "more", "share", "save"];
        let buttons_width: u16 = button_ids
            .iter()
            .filter_map(|id| self.actions.get(id).map(PageAction::width))
            .sum::<u16>()
            + button_ids.len() as u16;
        let [title_area, buttons_area] = Layout::horizontal([Constraint::Min(12), Constraint::Length(buttons_width)])
            .spacing(2)
            .areas(top_bar);
        self.render_title(frame, title_area, app, focused);
        self.actions.set_area("title", title_area);
        let buttons_line = Rect::new(buttons_area.x, buttons_area.y + 1, buttons_area.width, 1);
        self.actions
            .render_row(frame, buttons_line, &*app.ctx.theme, focused, &button_ids, Alignment::Right);

        let [tools_area, canvas_area] = Layout::horizontal([Constraint::Length(14), Constraint::Fill(1)]).areas(workspace);
        self.render_tools(frame, tools_area, app, focused);

        let theme = &*app.ctx.theme;
        let canvas = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_style(false));
        let canvas_inner = canvas.inner(canvas_area);
        frame.render_widget(canvas, canvas_area);
        let [_, text_area, _] = Layout::vertical([Constraint::Fill(1), Constraint::Length(2), Constraint::Fill(1)]).areas(canvas_inner);
        let heading = "Editor-Bereich";
        let lines = vec![
            Line::from(Span::styled(heading, theme.text_muted_style().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled("Hier wird das Dokument bearbeitet", theme.text_muted_style())),
        ];
        if display_width(heading) as u16 <= text_area.width {
            frame.render_widget(Paragraph::new(lines).centered(), text_area);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let hints: &[(&str, &str)] = if self.editing_title {
            &[(" Enter/Esc", " Titel übernehmen ")]
        } else {
            &[(" ←/→", " Auswahl "), (" Enter", " Ausführen "), (" e", " Titel bearbeiten ")]
        };
        th::build_hint_spans(&*app.ctx.theme, hints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_starts_from_route_id() {
        assert_eq!(EditorPage::new(Some("42")).title(), "Dokument 42");
        assert_eq!(EditorPage::new(None).title(), "Unbenanntes Dokument");
    }

    #[test]
    fn tools_are_selected_locally() {
        let mut page = EditorPage::new(None);
        assert_eq!(page.tool(), None);
        assert!(page.apply(Activation::Local("tool.3")).is_empty());
        assert_eq!(page.tool(), Some("Signatur"));
    }

    #[test]
    fn title_activation_enters_edit_mode() {
        let mut page = EditorPage::new(Some("7"));
        page.apply(Activation::Local("title"));
        assert!(page.editing_title);
        page.title.backspace();
        page.title.insert_char('8');
        assert_eq!(page.title(), "Dokument 8");
    }
}
