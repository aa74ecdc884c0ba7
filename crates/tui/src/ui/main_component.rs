//! The shared layout: sidebar on the left, the current page beside it, the
//! optional activity log below the page, and a hints bar at the bottom.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use docubuilder_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::components::pages::page_component;
use super::components::{Component, LogsComponent, SidebarComponent};
use super::theme::theme_helpers as th;
use crate::app::App;

const GLOBAL_HINTS: &[(&str, &str)] = &[
    (" Tab", " Fokus "),
    (" Ctrl+B", " Sidebar "),
    (" Ctrl+L", " Protokoll "),
    (" Alt+←/→", " Verlauf "),
    (" Ctrl+C", " Beenden "),
];

#[derive(Debug)]
pub struct MainView {
    /// Component for the page the router selected.
    pub content_view: Box<dyn Component>,
    pub sidebar_view: SidebarComponent,
    pub logs_view: LogsComponent,
}

impl MainView {
    pub fn new(app: &App) -> Self {
        Self {
            content_view: page_component(app.page()),
            sidebar_view: SidebarComponent,
            logs_view: LogsComponent,
        }
    }

    /// Replaces the content with a fresh component for the current page.
    /// Called after every successful navigation.
    pub fn set_page(&mut self, app: &mut App) {
        self.content_view = page_component(app.page());
        tracing::debug!(path = app.current_path(), page = app.page().kind(), "content replaced");
    }

    pub fn restore_focus(&mut self, app: &mut App) {
        app.focus_sidebar();
    }

    fn global_key(&mut self, app: &mut App, key: KeyEvent) -> Option<Vec<Effect>> {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let effects = match key.code {
            KeyCode::Char('b') if control => self.handle_message(app, &Msg::ToggleSidebar),
            KeyCode::Char('l') if control => self.handle_message(app, &Msg::ToggleLogs),
            KeyCode::Left if alt => vec![Effect::NavigateBack],
            KeyCode::Right if alt => vec![Effect::NavigateForward],
            KeyCode::Tab => {
                app.focus.next();
                Vec::new()
            }
            KeyCode::BackTab => {
                app.focus.prev();
                Vec::new()
            }
            _ => return None,
        };
        Some(effects)
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        let mut effects = app.update(msg);
        effects.extend(self.content_view.handle_message(app, msg));
        effects
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if let Some(effects) = self.global_key(app, key) {
            return effects;
        }
        if app.sidebar_focused() {
            return self.sidebar_view.handle_key_events(app, key);
        }
        self.content_view.handle_key_events(app, key)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let position = Position::new(mouse.column, mouse.row);
        if app.sidebar.last_area.contains(position) {
            return self.sidebar_view.handle_mouse_events(app, mouse);
        }
        if app.content_area.contains(position) {
            if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                app.focus_content();
            }
            return self.content_view.handle_mouse_events(app, mouse);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        frame.render_widget(
            Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background)),
            area,
        );

        let layout = self.get_preferred_layout(app, area);
        self.sidebar_view.render(frame, layout[0], app);
        app.content_area = layout[1];
        self.content_view.render(frame, layout[1], app);
        if app.logs.is_visible {
            self.logs_view.render(frame, layout[2], app);
        }

        let hints = Paragraph::new(Line::from(self.get_hint_spans(app))).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints, layout[3]);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut spans = if app.sidebar_focused() {
            self.sidebar_view.get_hint_spans(app)
        } else {
            self.content_view.get_hint_spans(app)
        };
        spans.extend(th::build_hint_spans(&*app.ctx.theme, GLOBAL_HINTS));
        spans
    }

    /// `[sidebar, content, logs, hints]`; the logs area is empty while the
    /// panel is hidden.
    fn get_preferred_layout(&self, app: &App, area: Rect) -> Vec<Rect> {
        let [main_area, hints_area] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
        let sidebar_width = app.sidebar.view(app.current_path()).width;
        let [sidebar_area, right_area] = Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(1)]).areas(main_area);
        let logs_constraint = if app.logs.is_visible {
            Constraint::Percentage(30)
        } else {
            Constraint::Length(0)
        };
        let [content_area, logs_area] = Layout::vertical([Constraint::Min(1), logs_constraint]).areas(right_area);
        vec![sidebar_area, content_area, logs_area, hints_area]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::sidebar::{COLLAPSED_WIDTH, EXPANDED_WIDTH};
    use crate::ui::theme;
    use ratatui::{Terminal, backend::TestBackend};

    fn app_at(path: &str) -> App {
        App::new(path, theme::load(Some("docubuilder"))).expect("route table")
    }

    fn draw(app: &mut App, view: &mut MainView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 32)).expect("terminal");
        terminal.draw(|frame| view.render(frame, frame.area(), app)).expect("draw");
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn renders_sidebar_and_home_page() {
        let mut app = app_at("/");
        let mut view = MainView::new(&app);
        let screen = draw(&mut app, &mut view);
        assert!(screen.contains("DocuBuilder"));
        assert!(screen.contains("Neu erstellen..."));
        assert!(screen.contains("Willkommen zurück"));
        assert!(screen.contains("Einstellungen"));
    }

    #[test]
    fn ctrl_b_collapses_sidebar_to_icons() {
        let mut app = app_at("/");
        let mut view = MainView::new(&app);
        let area = Rect::new(0, 0, 120, 32);
        assert_eq!(view.get_preferred_layout(&app, area)[0].width, EXPANDED_WIDTH);

        view.handle_key_events(&mut app, key(KeyCode::Char('b'), KeyModifiers::CONTROL));
        assert_eq!(view.get_preferred_layout(&app, area)[0].width, COLLAPSED_WIDTH);
        let screen = draw(&mut app, &mut view);
        assert!(!screen.contains("Einstellungen"));
        assert!(screen.contains("Willkommen zurück"));
    }

    #[test]
    fn placeholder_page_shows_title_and_notice() {
        let mut app = app_at("/settings");
        let mut view = MainView::new(&app);
        let screen = draw(&mut app, &mut view);
        assert!(screen.contains("Diese Seite ist noch in Entwicklung."));
    }

    #[test]
    fn editor_route_prefills_title() {
        let mut app = app_at("/editor/42");
        let mut view = MainView::new(&app);
        let screen = draw(&mut app, &mut view);
        assert!(screen.contains("Dokument 42"));
        assert!(screen.contains("Editor-Bereich"));
    }

    #[test]
    fn sidebar_enter_emits_navigation() {
        let mut app = app_at("/");
        let mut view = MainView::new(&app);
        assert!(app.sidebar_focused());
        app.sidebar.set_cursor_to_path("/documents");
        let effects = view.handle_key_events(&mut app, key(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(effects, vec![Effect::Navigate("/documents".to_string())]);
    }

    #[test]
    fn alt_arrows_request_history_moves() {
        let mut app = app_at("/");
        let mut view = MainView::new(&app);
        assert_eq!(view.handle_key_events(&mut app, key(KeyCode::Left, KeyModifiers::ALT)), vec![Effect::NavigateBack]);
        assert_eq!(view.handle_key_events(&mut app, key(KeyCode::Right, KeyModifiers::ALT)), vec![Effect::NavigateForward]);
    }

    #[test]
    fn ctrl_l_shows_activity_log() {
        let mut app = app_at("/");
        let mut view = MainView::new(&app);
        view.handle_key_events(&mut app, key(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert!(app.logs.is_visible);
        let screen = draw(&mut app, &mut view);
        assert!(screen.contains("Protokoll"));
        assert!(screen.contains("DocuBuilder gestartet"));
    }
}
