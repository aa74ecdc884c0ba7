//! Component system for the DocuBuilder shell.
//!
//! Components are self-contained UI elements: they own local UI state, handle
//! input routed to them, render into a given `Rect`, and report anything that
//! reaches beyond themselves back to the runtime as [`Effect`]s.

use crossterm::event::{KeyEvent, MouseEvent};
use docubuilder_types::{Effect, Msg};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;

/// A UI component with its own state and behavior.
///
/// State that must outlive the component (the sidebar, the log buffer) lives
/// on [`App`]; state local to one page lives on the component itself and is
/// dropped with it when the route changes.
pub(crate) trait Component: std::fmt::Debug {
    /// Handle an application-level message the component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle key events while this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events. Components hit test against their last render.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render into `rect`. May record layout for later hit testing.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hints bar while the component has focus.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }

    /// Sub-areas the component would render into for `area`.
    fn get_preferred_layout(&self, _app: &App, _area: Rect) -> Vec<Rect> {
        Vec::new()
    }
}

/// Finds which of `areas` contains the position, given the container's
/// last rendered `area`.
pub fn find_target_index_by_mouse_position(area: &Rect, areas: &[Rect], column: u16, row: u16) -> Option<usize> {
    let position = ratatui::layout::Position::new(column, row);
    if !area.contains(position) {
        return None;
    }
    areas.iter().position(|candidate| candidate.contains(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_item_under_cursor() {
        let container = Rect::new(0, 0, 10, 10);
        let items = [Rect::new(1, 1, 8, 1), Rect::new(1, 2, 8, 1)];
        assert_eq!(find_target_index_by_mouse_position(&container, &items, 3, 2), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&container, &items, 3, 5), None);
        assert_eq!(find_target_index_by_mouse_position(&container, &items, 30, 1), None);
    }

    #[test]
    fn clipped_rows_are_never_hit() {
        let container = Rect::new(0, 0, 10, 10);
        let items = [Rect::default(), Rect::new(0, 0, 10, 1)];
        assert_eq!(find_target_index_by_mouse_position(&container, &items, 0, 0), Some(1));
    }
}
