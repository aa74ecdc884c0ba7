use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use docubuilder_types::{Effect, Icon};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Span,
};

use super::widgets::{
    ActionList, ActionTarget, Activation, PageAction, SearchBox, page_frame, render_empty_state, render_header, render_search_field,
};
use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::theme::theme_helpers as th;

pub const SEARCH_PLACEHOLDER: &str = "Kontakte durchsuchen...";

const ACTIONS: &[PageAction] = &[
    PageAction::secondary("import", Some(Icon::Upload), "Importieren", ActionTarget::Inert),
    PageAction::primary("add", Icon::Plus, "Kontakt hinzufügen", ActionTarget::Inert),
    PageAction::secondary("search", None, SEARCH_PLACEHOLDER, ActionTarget::Local),
    PageAction::secondary("empty.import", Some(Icon::Upload), "Kontakte importieren", ActionTarget::Inert),
    PageAction::primary("empty.add", Icon::Plus, "Kontakt hinzufügen", ActionTarget::Inert),
];

#[derive(Debug)]
pub struct ContactsPage {
    actions: ActionList,
    search: SearchBox,
}

impl Default for ContactsPage {
    fn default() -> Self {
        Self {
            actions: ActionList::new(ACTIONS),
            search: SearchBox::default(),
        }
    }
}

impl ContactsPage {
    fn apply(&mut self, activation: Activation) -> Vec<Effect> {
        match activation {
            Activation::Local("search") => {
                self.search.start_editing();
                Vec::new()
            }
            other => other.into_effects(),
        }
    }
}

impl Component for ContactsPage {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if self.search.handle_key(key) {
            return Vec::new();
        }
        match key.code {
            KeyCode::Char('/') => {
                self.actions.select("search");
                self.search.start_editing();
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
        let theme = &*app.ctx.theme;
        let focused = app.content_focus.get();
        let inner = page_frame(frame, area, theme, focused);
        self.actions.begin_render(area);

        let [header_area, _, search_area, _, body_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        render_header(frame, header_area, theme, "Kontakte", None);
        self.actions.render_row(frame, header_area, theme, focused, &["import", "add"], Alignment::Right);

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

        let buttons = render_empty_state(
            frame,
            body_area,
            theme,
            Icon::Users,
            "Keine Kontakte",
            "Füge Kontakte hinzu um Dokumente schneller zu versenden und den Überblick zu behalten.",
        );
        self.actions.render_row(frame, buttons, theme, focused, &["empty.import", "empty.add"], Alignment::Center);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let hints: &[(&str, &str)] = if self.search.editing {
            &[(" Esc", " Suche verlassen ")]
        } else {
            &[(" ←/→", " Auswahl "), (" Enter", " Öffnen "), (" /", " Suchen ")]
        };
        th::build_hint_spans(&*app.ctx.theme, hints)
    }
}
