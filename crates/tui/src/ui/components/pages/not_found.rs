use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use docubuilder_types::{Effect, Icon};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Span,
};

use super::widgets::{ActionList, ActionTarget, PageAction, page_frame, render_empty_state};
use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::theme::theme_helpers as th;

pub const TITLE: &str = "Seite nicht gefunden";

const ACTIONS: &[PageAction] = &[PageAction::primary("home", Icon::Home, "Zur Startseite", ActionTarget::Navigate("/"))];

/// Shown for paths without a route. Keeps the requested path visible and
/// offers the way home.
#[derive(Debug)]
pub struct NotFoundPage {
    path: String,
    actions: ActionList,
}

impl NotFoundPage {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            actions: ActionList::new(ACTIONS),
        }
    }

    pub fn message(&self) -> String {
        format!("Unter {} gibt es keine Seite.", self.path)
    }
}

impl Component for NotFoundPage {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.actions.activate_selected(app).into_effects(),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        self.actions.activate_at(app, mouse.column, mouse.row).into_effects()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let focused = app.content_focus.get();
        let inner = page_frame(frame, area, theme, focused);
        self.actions.begin_render(area);

        let buttons = render_empty_state(frame, inner, theme, Icon::Search, TITLE, &self.message());
        self.actions.render_row(frame, buttons, theme, focused, &["home"], Alignment::Center);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" Enter", " Zur Startseite ")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_requested_path() {
        assert_eq!(NotFoundPage::new("/nope").message(), "Unter /nope gibt es keine Seite.");
    }
}
