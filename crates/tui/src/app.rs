//! Application state for the DocuBuilder shell.
//!
//! `App` owns everything that outlives a single page: the router and its
//! history, the current resolution, the sidebar, the activity log, and the
//! focus tree. Page-local state lives on the page components instead.

use std::rc::Rc;

use anyhow::Result;
use docubuilder_router::{NavigationHistory, Resolution, Router};
use docubuilder_types::{Effect, Msg, NavModel, Page};
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::ui::components::logs::LogsState;
use crate::ui::components::sidebar::SidebarState;
use crate::ui::theme::{LoadedTheme, Theme};

/// Cross-cutting context shared by all components.
#[derive(Debug)]
pub struct SharedCtx {
    pub theme: Box<dyn Theme>,
    pub theme_id: &'static str,
}

impl SharedCtx {
    pub fn new(theme: LoadedTheme) -> Self {
        Self {
            theme_id: theme.definition.id,
            theme: theme.theme,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub ctx: SharedCtx,
    pub router: Router,
    pub history: NavigationHistory,
    /// What the router selected for the current path.
    pub resolution: Resolution,
    pub sidebar: SidebarState,
    pub logs: LogsState,
    /// Focus flag of the content region; pages handle their own cursor.
    pub content_focus: FocusFlag,
    pub content_area: Rect,
    pub focus: Rc<Focus>,
    container_focus: FocusFlag,
}

impl App {
    pub fn new(start_path: &str, theme: LoadedTheme) -> Result<Self> {
        Ok(Self::with_router(Router::new()?, start_path, theme))
    }

    pub fn with_router(router: Router, start_path: &str, theme: LoadedTheme) -> Self {
        let resolution = router.resolve(start_path);
        let mut app = Self {
            ctx: SharedCtx::new(theme),
            history: NavigationHistory::new(resolution.path.as_str()),
            resolution,
            router,
            sidebar: SidebarState::new(NavModel::standard()),
            logs: LogsState::default(),
            content_focus: FocusFlag::named("content"),
            content_area: Rect::default(),
            focus: Rc::new(Focus::default()),
            container_focus: FocusFlag::named("app"),
        };
        app.focus = Rc::new(FocusBuilder::build_for(&app));
        app.focus.focus(&app.sidebar);

        let start = app.current_path().to_string();
        app.sidebar.set_cursor_to_path(&start);
        app.logs.info(format!("DocuBuilder gestartet: {start} ({})", app.page().heading()));
        app
    }

    pub fn current_path(&self) -> &str {
        self.resolution.path.as_str()
    }

    pub fn page(&self) -> &Page {
        &self.resolution.page
    }

    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick | Msg::Resize(..) => {}
            Msg::ToggleSidebar => {
                self.sidebar.toggle_collapse();
                let mode = if self.sidebar.is_collapsed() { "eingeklappt" } else { "ausgeklappt" };
                self.logs.info(format!("Sidebar {mode}"));
            }
            Msg::ToggleLogs => self.logs.toggle_visible(),
        }
        Vec::new()
    }

    /// Resolves `raw` and makes it the current location. Returns `false`
    /// when it canonicalizes to the path already shown.
    pub fn navigate(&mut self, raw: &str) -> bool {
        let resolution = self.router.resolve(raw);
        if !self.history.push(resolution.path.as_str()) {
            return false;
        }
        self.show(resolution);
        true
    }

    pub fn go_back(&mut self) -> bool {
        let Some(path) = self.history.back().map(str::to_string) else {
            return false;
        };
        let resolution = self.router.resolve(&path);
        self.show(resolution);
        true
    }

    pub fn go_forward(&mut self) -> bool {
        let Some(path) = self.history.forward().map(str::to_string) else {
            return false;
        };
        let resolution = self.router.resolve(&path);
        self.show(resolution);
        true
    }

    fn show(&mut self, resolution: Resolution) {
        match &resolution.page {
            Page::NotFound { path } => self.logs.warn(format!("Keine Seite für {path}")),
            page => self.logs.info(format!("{} → {}", resolution.path, page.heading())),
        }
        self.resolution = resolution;
        let path = self.current_path().to_string();
        self.sidebar.set_cursor_to_path(&path);
    }

    pub fn sidebar_focused(&self) -> bool {
        self.sidebar.focus.get()
    }

    pub fn focus_sidebar(&mut self) {
        self.focus.focus(&self.sidebar);
    }

    pub fn focus_content(&mut self) {
        self.focus.focus(&self.content_focus);
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.widget(&self.sidebar);
        builder.leaf_widget(&self.content_focus);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::logs::LogLevel;
    use crate::ui::theme;

    fn app_at(path: &str) -> App {
        App::new(path, theme::load(None)).expect("route table")
    }

    #[test]
    fn starts_on_canonical_path_with_sidebar_focused() {
        let app = app_at("documents/");
        assert_eq!(app.current_path(), "/documents");
        assert_eq!(app.page(), &Page::Documents);
        assert!(app.sidebar_focused());
        assert_eq!(app.logs.entries().len(), 1);
    }

    #[test]
    fn navigating_to_current_path_is_ignored() {
        let mut app = app_at("/contacts");
        assert!(!app.navigate("/contacts/"));
        assert!(!app.history.can_go_back());
    }

    #[test]
    fn history_moves_back_and_forward() {
        let mut app = app_at("/");
        assert!(app.navigate("/documents"));
        assert!(app.navigate("/editor/7"));
        assert_eq!(app.page(), &Page::Editor { id: Some("7".into()) });

        assert!(app.go_back());
        assert_eq!(app.page(), &Page::Documents);
        assert!(app.go_back());
        assert_eq!(app.page(), &Page::Home);
        assert!(!app.go_back());

        assert!(app.go_forward());
        assert_eq!(app.current_path(), "/documents");
    }

    #[test]
    fn navigation_after_back_drops_forward_entries() {
        let mut app = app_at("/");
        app.navigate("/documents");
        app.go_back();
        app.navigate("/contacts");
        assert!(!app.go_forward());
    }

    #[test]
    fn unknown_path_shows_not_found_and_warns() {
        let mut app = app_at("/");
        assert!(app.navigate("/nirgendwo"));
        assert_eq!(app.page(), &Page::NotFound { path: "/nirgendwo".into() });
        let last = app.logs.entries().back().expect("log entry");
        assert_eq!(last.level, LogLevel::Warn);
    }

    #[test]
    fn toggle_sidebar_flips_collapse_and_logs_it() {
        let mut app = app_at("/");
        assert!(!app.sidebar.is_collapsed());
        assert!(app.update(&Msg::ToggleSidebar).is_empty());
        assert!(app.sidebar.is_collapsed());
        app.update(&Msg::ToggleSidebar);
        assert!(!app.sidebar.is_collapsed());
        assert_eq!(app.logs.entries().len(), 3);
    }

    #[test]
    fn focus_moves_between_sidebar_and_content() {
        let mut app = app_at("/");
        app.focus_content();
        assert!(!app.sidebar_focused());
        assert!(app.content_focus.get());
        app.focus_sidebar();
        assert!(app.sidebar_focused());
    }
}
