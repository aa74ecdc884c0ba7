//! Building blocks shared by the pages: page frame and header, action
//! buttons with a keyboard selection, search fields, and empty states.

use crossterm::event::{KeyCode, KeyEvent};
use docubuilder_types::{Effect, Icon};
use docubuilder_util::display_width;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::ui::components::common::TextInputState;
use crate::ui::components::find_target_index_by_mouse_position;
use crate::ui::components::sidebar::icons::glyph;
use crate::ui::theme::{
    Theme,
    theme_helpers::{self as th, ButtonRenderOptions, ButtonType, render_button},
};

/// What activating a page action does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTarget {
    Navigate(&'static str),
    /// Handled by the page itself, identified by the action id.
    Local,
    /// Shown but without function yet.
    Inert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAction {
    pub id: &'static str,
    pub icon: Option<Icon>,
    pub label: &'static str,
    pub button_type: ButtonType,
    pub target: ActionTarget,
}

impl PageAction {
    pub const fn primary(id: &'static str, icon: Icon, label: &'static str, target: ActionTarget) -> Self {
        Self {
            id,
            icon: Some(icon),
            label,
            button_type: ButtonType::Primary,
            target,
        }
    }

    pub const fn secondary(id: &'static str, icon: Option<Icon>, label: &'static str, target: ActionTarget) -> Self {
        Self {
            id,
            icon,
            label,
            button_type: ButtonType::Secondary,
            target,
        }
    }

    pub fn caption(&self) -> String {
        match self.icon {
            Some(icon) if self.label.is_empty() => glyph(icon).to_string(),
            Some(icon) => format!("{} {}", glyph(icon), self.label),
            None => self.label.to_string(),
        }
    }

    /// Columns the rendered button occupies.
    pub fn width(&self) -> u16 {
        display_width(&self.caption()) as u16 + 2
    }
}

/// Result of activating an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Nothing,
    Effects(Vec<Effect>),
    /// The page should handle the action with this id.
    Local(&'static str),
}

impl Activation {
    /// Effects for the runtime; local activations carry none.
    pub fn into_effects(self) -> Vec<Effect> {
        match self {
            Activation::Effects(effects) => effects,
            Activation::Nothing | Activation::Local(_) => Vec::new(),
        }
    }
}

/// Ordered, keyboard-selectable actions of a page plus their last rendered
/// areas for mouse hit testing.
#[derive(Debug, Clone)]
pub struct ActionList {
    actions: Vec<PageAction>,
    selected: usize,
    areas: Vec<Rect>,
    last_area: Rect,
}

impl ActionList {
    pub fn new(actions: &[PageAction]) -> Self {
        Self {
            actions: actions.to_vec(),
            selected: 0,
            areas: vec![Rect::default(); actions.len()],
            last_area: Rect::default(),
        }
    }

    pub fn selected(&self) -> Option<&PageAction> {
        self.actions.get(self.selected)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected().is_some_and(|action| action.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&PageAction> {
        self.actions.iter().find(|action| action.id == id)
    }

    pub fn select(&mut self, id: &str) {
        if let Some(index) = self.actions.iter().position(|action| action.id == id) {
            self.selected = index;
        }
    }

    pub fn select_next(&mut self) {
        if !self.actions.is_empty() {
            self.selected = (self.selected + 1) % self.actions.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.actions.is_empty() {
            self.selected = (self.selected + self.actions.len() - 1) % self.actions.len();
        }
    }

    /// Arrow keys move the selection. Returns whether the key was used.
    pub fn handle_nav_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => self.select_next(),
            _ => return false,
        }
        true
    }

    pub fn activate_selected(&self, app: &mut App) -> Activation {
        match self.selected() {
            Some(action) => activate(app, action),
            None => Activation::Nothing,
        }
    }

    /// Selects and activates the action under a click.
    pub fn activate_at(&mut self, app: &mut App, column: u16, row: u16) -> Activation {
        let Some(index) = find_target_index_by_mouse_position(&self.last_area, &self.areas, column, row) else {
            return Activation::Nothing;
        };
        self.selected = index;
        self.activate_selected(app)
    }

    /// Clears recorded areas before a render pass.
    pub fn begin_render(&mut self, area: Rect) {
        self.last_area = area;
        self.areas.iter_mut().for_each(|rect| *rect = Rect::default());
    }

    pub fn set_area(&mut self, id: &str, area: Rect) {
        if let Some(index) = self.actions.iter().position(|action| action.id == id) {
            self.areas[index] = area;
        }
    }

    /// Renders the actions named in `ids` as a button row aligned inside
    /// `area`, recording their areas.
    pub fn render_row(&mut self, frame: &mut Frame, area: Rect, theme: &dyn Theme, focused: bool, ids: &[&str], alignment: Alignment) {
        let actions: Vec<PageAction> = ids.iter().filter_map(|id| self.get(id).copied()).collect();
        let widths: Vec<u16> = actions.iter().map(PageAction::width).collect();
        for (action, rect) in actions.iter().zip(button_row(area, &widths, alignment)) {
            render_action(frame, rect, theme, action, focused && self.is_selected(action.id));
            self.set_area(action.id, rect);
        }
    }
}

fn activate(app: &mut App, action: &PageAction) -> Activation {
    match action.target {
        ActionTarget::Navigate(path) => Activation::Effects(vec![Effect::Navigate(path.to_string())]),
        ActionTarget::Local => Activation::Local(action.id),
        ActionTarget::Inert => {
            app.logs.info(format!("\u{201e}{}\u{201c} ist noch nicht verfügbar", action.caption()));
            Activation::Nothing
        }
    }
}

/// Splits `area` into one-line slots of `widths`, one column apart.
pub fn button_row(area: Rect, widths: &[u16], alignment: Alignment) -> Vec<Rect> {
    let total: u16 = widths.iter().sum::<u16>() + widths.len().saturating_sub(1) as u16;
    let start = match alignment {
        Alignment::Left => area.x,
        Alignment::Center => area.x + area.width.saturating_sub(total) / 2,
        Alignment::Right => area.x + area.width.saturating_sub(total),
    };
    let mut x = start;
    widths
        .iter()
        .map(|width| {
            let width = (*width).min(area.right().saturating_sub(x));
            let rect = Rect::new(x, area.y, width, area.height.min(1));
            x = x.saturating_add(width + 1).min(area.right());
            rect
        })
        .collect()
}

pub fn render_action(frame: &mut Frame, area: Rect, theme: &dyn Theme, action: &PageAction, selected: bool) {
    render_button(
        frame,
        area,
        &action.caption(),
        theme,
        ButtonRenderOptions::new(selected, selected, Borders::NONE, action.button_type),
    );
}

/// Draws the page container and returns the padded area inside it.
pub fn page_frame(frame: &mut Frame, area: Rect, theme: &dyn Theme, focused: bool) -> Rect {
    let block = th::block(theme, None, focused).padding(Padding::new(2, 2, 1, 0));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Title line plus an optional muted subtitle. Returns the area left below.
pub fn render_header(frame: &mut Frame, area: Rect, theme: &dyn Theme, title: &str, subtitle: Option<&str>) -> Rect {
    let [title_area, subtitle_area, rest] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(if subtitle.is_some() { 1 } else { 0 }),
        Constraint::Min(0),
    ])
    .areas(area);
    frame.render_widget(Paragraph::new(Span::styled(title.to_string(), theme.heading_style())), title_area);
    if let Some(subtitle) = subtitle {
        frame.render_widget(Paragraph::new(Span::styled(subtitle.to_string(), theme.text_secondary_style())), subtitle_area);
    }
    rest
}

/// Search box text plus whether it currently receives keystrokes.
///
/// Typing only edits the field; there is nothing to filter yet.
#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    pub input: TextInputState,
    pub editing: bool,
}

impl SearchBox {
    pub fn start_editing(&mut self) {
        self.editing = true;
    }

    /// Consumes every key while editing; Esc and Enter stop editing.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.editing {
            return false;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.editing = false,
            _ => {
                self.input.handle_key(key);
            }
        }
        true
    }
}

/// Bordered one-line search box. Places the terminal cursor while editing.
pub fn render_search_field(
    frame: &mut Frame,
    area: Rect,
    theme: &dyn Theme,
    placeholder: &str,
    input: &TextInputState,
    selected: bool,
    editing: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(selected || editing));
    let inner = block.inner(area);
    let prefix = format!("{} ", glyph(Icon::Search));
    let text = if input.input().is_empty() {
        Span::styled(placeholder.to_string(), theme.text_muted_style())
    } else {
        Span::styled(input.input().to_string(), theme.text_primary_style())
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(prefix.clone(), theme.text_muted_style()), text])).block(block),
        area,
    );
    if editing && inner.width > 0 {
        let column = inner.x + display_width(&prefix) as u16 + input.cursor_column();
        frame.set_cursor_position(Position::new(column.min(inner.right().saturating_sub(1)), inner.y));
    }
}

/// Centered icon, title and explanation inside a bordered panel. Returns the
/// one-line area below the text for the state's buttons.
pub fn render_empty_state(frame: &mut Frame, area: Rect, theme: &dyn Theme, icon: Icon, title: &str, text: &str) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [_, icon_area, title_area, text_area, _, buttons_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(if title.is_empty() { 0 } else { 1 }),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(glyph(icon), theme.text_muted_style().add_modifier(Modifier::BOLD))).centered(),
        icon_area,
    );
    frame.render_widget(Paragraph::new(Span::styled(title.to_string(), theme.heading_style())).centered(), title_area);
    frame.render_widget(
        Paragraph::new(Span::styled(text.to_string(), theme.text_secondary_style()))
            .centered()
            .wrap(Wrap { trim: true }),
        text_area,
    );
    buttons_area
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTIONS: &[PageAction] = &[
        PageAction::primary("new", Icon::Plus, "Neu", ActionTarget::Navigate("/editor")),
        PageAction::secondary("filter", Some(Icon::Filter), "Filter", ActionTarget::Inert),
        PageAction::secondary("search", None, "Suche", ActionTarget::Local),
    ];

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut list = ActionList::new(ACTIONS);
        list.select_prev();
        assert!(list.is_selected("search"));
        list.select_next();
        assert!(list.is_selected("new"));
        list.select("filter");
        assert_eq!(list.selected().map(|action| action.label), Some("Filter"));
    }

    #[test]
    fn button_row_aligns_within_area() {
        let area = Rect::new(10, 3, 40, 1);
        let right = button_row(area, &[6, 8], Alignment::Right);
        assert_eq!(right[1].right(), area.right());
        assert_eq!(right[0].x + 7, right[1].x);

        let left = button_row(area, &[6, 8], Alignment::Left);
        assert_eq!(left[0].x, 10);

        let centered = button_row(area, &[10], Alignment::Center);
        assert_eq!(centered[0].x, 25);
    }

    #[test]
    fn search_box_captures_keys_only_while_editing() {
        let mut search = SearchBox::default();
        let key = |code| KeyEvent::new(code, crossterm::event::KeyModifiers::NONE);
        assert!(!search.handle_key(key(KeyCode::Char('a'))));

        search.start_editing();
        assert!(search.handle_key(key(KeyCode::Char('q'))));
        assert!(search.handle_key(key(KeyCode::Esc)));
        assert!(!search.editing);
        assert_eq!(search.input.input(), "q");
    }

    #[test]
    fn caption_combines_glyph_and_label() {
        assert_eq!(ACTIONS[0].caption(), "+ Neu");
        assert_eq!(ACTIONS[2].caption(), "Suche");
        assert_eq!(ACTIONS[0].width(), 7);
    }
}
