use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use docubuilder_types::{Effect, Icon};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Span,
    widgets::Borders,
};

use super::widgets::{
    ActionList, ActionTarget, Activation, PageAction, SearchBox, button_row, page_frame, render_empty_state, render_header,
    render_search_field,
};
use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::theme::theme_helpers::{self as th, ButtonRenderOptions, ButtonType, render_button};

pub const SEARCH_PLACEHOLDER: &str = "Dokumente durchsuchen...";

const ACTIONS: &[PageAction] = &[
    PageAction::primary("new", Icon::Plus, "Neues Dokument", ActionTarget::Navigate("/editor")),
    PageAction::secondary("search", None, SEARCH_PLACEHOLDER, ActionTarget::Local),
    PageAction::secondary("filter", Some(Icon::Filter), "Filter", ActionTarget::Inert),
    PageAction::secondary("view.list", Some(Icon::List), "", ActionTarget::Local),
    PageAction::secondary("view.grid", Some(Icon::LayoutGrid), "", ActionTarget::Local),
    PageAction::primary("first_document", Icon::Plus, "Erstes Dokument erstellen", ActionTarget::Navigate("/editor")),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::List => ViewMode::Grid,
            ViewMode::Grid => ViewMode::List,
        }
    }
}

/// Document overview. The view mode and search text belong to this page
/// instance and reset on every visit.
#[derive(Debug)]
pub struct DocumentsPage {
    actions: ActionList,
    search: SearchBox,
    view_mode: ViewMode,
}

impl Default for DocumentsPage {
    fn default() -> Self {
        Self {
            actions: ActionList::new(ACTIONS),
            search: SearchBox::default(),
            view_mode: ViewMode::default(),
        }
    }
}

impl DocumentsPage {
    #[cfg(test)]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    fn apply(&mut self, activation: Activation) -> Vec<Effect> {
        match activation {
            Activation::Local("search") => self.search.start_editing(),
            Activation::Local("view.list") => self.view_mode = ViewMode::List,
            Activation::Local("view.grid") => self.view_mode = ViewMode::Grid,
            other => return other.into_effects(),
        }
        Vec::new()
    }
}

impl Component for DocumentsPage {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if self.search.handle_key(key) {
            return Vec::new();
        }
        match key.code {
            KeyCode::Char('/') => {
                self.actions.select("search");
                self.search.start_editing();
            }
            KeyCode::Char('v') => self.view_mode = self.view_mode.toggled(),
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
        let theme = &*app.ctx.theme;
        let focused = app.content_focus.get();
        let inner = page_frame(frame, area, theme, focused);
        self.actions.begin_render(area);

        let [header_area, _, toolbar_area, _, body_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        render_header(frame, header_area, theme, "Dokumente", None);
        self.actions.render_row(frame, header_area, theme, focused, &["new"], Alignment::Right);

        let filter_width = self.actions.get("filter").map(PageAction::width).unwrap_or_default();
        let [search_area, filter_area, views_area] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(filter_width + 2), Constraint::Length(10)])
                .spacing(1)
                .areas(toolbar_area);
        render_search_field(
            frame,
            search_area,
            theme,
            SEARCH_PLACEHOLDER,
            &self.search.input,
            focused && self.actions.is_selected("search"),
            focused && self.search.editing,
        );
        self.actions.set_area("search", search_area);

        let centered_line = |area: Rect| Rect::new(area.x, area.y + 1, area.width, 1);
        self.actions.render_row(frame, centered_line(filter_area), theme, focused, &["filter"], Alignment::Center);

        // The active view mode renders as pressed.
        let views_line = centered_line(views_area);
        for (id, rect) in ["view.list", "view.grid"].into_iter().zip(button_row(views_line, &[3, 3], Alignment::Center)) {
            let pressed = (id == "view.grid") == (self.view_mode == ViewMode::Grid);
            let caption = self.actions.get(id).map(PageAction::caption).unwrap_or_default();
            let options = ButtonRenderOptions::new(focused && self.actions.is_selected(id), pressed, Borders::NONE, ButtonType::Secondary);
            render_button(frame, rect, &caption, theme, options);
            self.actions.set_area(id, rect);
        }

        let buttons = render_empty_state(
            frame,
            body_area,
            theme,
            Icon::FileText,
            "Keine Dokumente",
            "Du hast noch keine Dokumente erstellt. Erstelle dein erstes Dokument um loszulegen.",
        );
        self.actions.render_row(frame, buttons, theme, focused, &["first_document"], Alignment::Center);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let hints: &[(&str, &str)] = if self.search.editing {
            &[(" Esc", " Suche verlassen ")]
        } else {
            &[(" ←/→", " Auswahl "), (" Enter", " Öffnen "), (" /", " Suchen "), (" v", " Liste/Raster ")]
        };
        th::build_hint_spans(&*app.ctx.theme, hints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_mode_toggles_between_list_and_grid() {
        assert_eq!(ViewMode::default(), ViewMode::List);
        assert_eq!(ViewMode::List.toggled(), ViewMode::Grid);
        assert_eq!(ViewMode::List.toggled().toggled(), ViewMode::List);
    }

    #[test]
    fn view_actions_set_mode_locally() {
        let mut page = DocumentsPage::default();
        assert!(page.apply(Activation::Local("view.grid")).is_empty());
        assert_eq!(page.view_mode(), ViewMode::Grid);
        page.apply(Activation::Local("view.list"));
        assert_eq!(page.view_mode(), ViewMode::List);
    }

    #[test]
    fn search_action_starts_editing() {
        let mut page = DocumentsPage::default();
        page.apply(Activation::Local("search"));
        assert!(page.search.editing);
    }
}
