use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use docubuilder_types::{Effect, Icon};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::widgets::{
    ActionList, ActionTarget, Activation, PageAction, SearchBox, page_frame, render_empty_state, render_header, render_search_field,
};
use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::theme::theme_helpers as th;

pub const SEARCH_PLACEHOLDER: &str = "Vorlagen durchsuchen...";

/// Template categories with their template counts.
pub const CATEGORIES: &[(&str, usize)] = &[("Verträge", 0), ("Angebote", 0), ("Rechnungen", 0), ("Briefe", 0)];

const CATEGORY_IDS: [&str; 4] = ["category.0", "category.1", "category.2", "category.3"];

const ACTIONS: &[PageAction] = &[
    PageAction::primary("new", Icon::Plus, "Neue Vorlage", ActionTarget::Inert),
    PageAction::secondary("search", None, SEARCH_PLACEHOLDER, ActionTarget::Local),
    PageAction::secondary(CATEGORY_IDS[0], None, "Verträge", ActionTarget::Local),
    PageAction::secondary(CATEGORY_IDS[1], None, "Angebote", ActionTarget::Local),
    PageAction::secondary(CATEGORY_IDS[2], None, "Rechnungen", ActionTarget::Local),
    PageAction::secondary(CATEGORY_IDS[3], None, "Briefe", ActionTarget::Local),
    PageAction::primary("first_template", Icon::Plus, "Erste Vorlage erstellen", ActionTarget::Inert),
];

/// Template library with category tiles. Serves both template paths.
#[derive(Debug)]
pub struct TemplatesPage {
    actions: ActionList,
    search: SearchBox,
    /// Category tile last picked; picking it again clears it.
    category: Option<usize>,
}

impl Default for TemplatesPage {
    fn default() -> Self {
        Self {
            actions: ActionList::new(ACTIONS),
            search: SearchBox::default(),
            category: None,
        }
    }
}

impl TemplatesPage {
    #[cfg(test)]
    pub fn category(&self) -> Option<&'static str> {
        self.category.map(|index| CATEGORIES[index].0)
    }

    fn apply(&mut self, activation: Activation) -> Vec<Effect> {
        match activation {
            Activation::Local("search") => self.search.start_editing(),
            Activation::Local(id) => {
                if let Some(index) = CATEGORY_IDS.iter().position(|candidate| *candidate == id) {
                    self.category = if self.category == Some(index) { None } else { Some(index) };
                }
            }
            other => return other.into_effects(),
        }
        Vec::new()
    }
}

impl Component for TemplatesPage {
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

        let [header_area, _, search_area, _, tiles_area, _, body_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        render_header(frame, header_area, theme, "Vorlagen", None);
        self.actions.render_row(frame, header_area, theme, focused, &["new"], Alignment::Right);

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

        let tile_areas = Layout::horizontal([Constraint::Fill(1); 4]).spacing(2).split(tiles_area);
        for (index, ((name, count), tile)) in CATEGORIES.iter().zip(tile_areas.iter()).enumerate() {
            let under_cursor = focused && self.actions.is_selected(CATEGORY_IDS[index]);
            let picked = self.category == Some(index);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.border_style(under_cursor || picked));
            let name_style = if picked {
                theme.accent_primary_style().add_modifier(Modifier::BOLD)
            } else {
                theme.heading_style()
            };
            let lines = vec![
                Line::from(Span::styled(*name, name_style)),
                Line::from(Span::styled(format!("{count} Vorlagen"), theme.text_secondary_style())),
            ];
            frame.render_widget(Paragraph::new(lines).block(block), *tile);
            self.actions.set_area(CATEGORY_IDS[index], *tile);
        }

        let buttons = render_empty_state(
            frame,
            body_area,
            theme,
            Icon::LayoutTemplate,
            "Keine Vorlagen",
            "Erstelle Vorlagen um Dokumente schneller zu erstellen und einen einheitlichen Look zu gewährleisten.",
        );
        self.actions.render_row(frame, buttons, theme, focused, &["first_template"], Alignment::Center);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picking_a_category_twice_clears_it() {
        let mut page = TemplatesPage::default();
        page.apply(Activation::Local("category.2"));
        assert_eq!(page.category(), Some("Rechnungen"));
        page.apply(Activation::Local("category.1"));
        assert_eq!(page.category(), Some("Angebote"));
        page.apply(Activation::Local("category.1"));
        assert_eq!(page.category(), None);
    }

    #[test]
    fn every_category_starts_empty() {
        assert_eq!(CATEGORIES.len(), CATEGORY_IDS.len());
        assert!(CATEGORIES.iter().all(|(_, count)| *count == 0));
    }
}
