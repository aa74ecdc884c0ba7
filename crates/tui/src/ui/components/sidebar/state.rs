use docubuilder_types::NavModel;
use indexmap::IndexSet;
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use super::view::{RowKind, SidebarAction, SidebarView, sidebar_view};

/// Collapse flag and open groups of the sidebar.
///
/// Starts expanded with every group closed. Collapsing never clears the set
/// of open groups; it only hides them until the sidebar expands again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    collapsed: bool,
    expanded_groups: IndexSet<String>,
}

impl NavState {
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn toggle_collapse(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn is_expanded(&self, label: &str) -> bool {
        self.expanded_groups.contains(label)
    }

    /// Opens `label` if closed, closes it otherwise. Labels are not checked
    /// against the model.
    pub fn toggle_group(&mut self, label: &str) {
        if !self.expanded_groups.shift_remove(label) {
            self.expanded_groups.insert(label.to_string());
        }
    }

    /// Open groups in the order they were opened.
    #[cfg(test)]
    pub fn expanded_groups(&self) -> &IndexSet<String> {
        &self.expanded_groups
    }
}

/// Sidebar state owned by the app: navigation state, keyboard cursor, focus,
/// and the areas of the last render for mouse hit testing.
#[derive(Debug, Clone)]
pub struct SidebarState {
    model: NavModel,
    nav: NavState,
    /// Index into [`SidebarView::rows`].
    cursor: usize,
    pub focus: FocusFlag,
    pub last_area: Rect,
    /// One entry per row of the last rendered view; empty rects were clipped.
    pub row_areas: Vec<Rect>,
}

impl SidebarState {
    pub fn new(model: NavModel) -> Self {
        Self {
            model,
            nav: NavState::default(),
            cursor: 0,
            focus: FocusFlag::named("sidebar"),
            last_area: Rect::default(),
            row_areas: Vec::new(),
        }
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn is_collapsed(&self) -> bool {
        self.nav.is_collapsed()
    }

    pub fn view(&self, current_path: &str) -> SidebarView {
        sidebar_view(&self.model, &self.nav, current_path)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn toggle_collapse(&mut self) {
        self.restructure(NavState::toggle_collapse);
    }

    pub fn toggle_group(&mut self, label: &str) {
        self.restructure(|nav| nav.toggle_group(label));
    }

    /// Moves the cursor by `delta` rows, clamped to the visible rows.
    pub fn move_cursor(&mut self, delta: isize) {
        let row_count = self.structure().rows.len();
        if row_count == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(row_count - 1);
    }

    pub fn cursor_to_first(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_last(&mut self) {
        self.cursor = self.structure().rows.len().saturating_sub(1);
    }

    /// Places the cursor on the row with `action`, if visible.
    pub fn set_cursor_to(&mut self, action: SidebarAction) {
        if let Some(index) = self.structure().position(action) {
            self.cursor = index;
        }
    }

    /// Places the cursor on the visible link to `path`, if any.
    pub fn set_cursor_to_path(&mut self, path: &str) {
        let structure = self.structure();
        let index = structure
            .rows
            .iter()
            .position(|row| matches!(row.action, SidebarAction::Navigate(target) if target == path));
        if let Some(index) = index {
            self.cursor = index;
        }
    }

    pub fn cursor_action(&self) -> Option<SidebarAction> {
        self.structure().rows.get(self.cursor).map(|row| row.action)
    }

    /// Row index under a mouse position from the last render.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        crate::ui::components::find_target_index_by_mouse_position(&self.last_area, &self.row_areas, column, row)
    }

    pub fn action_at(&self, index: usize) -> Option<SidebarAction> {
        self.structure().rows.get(index).map(|row| row.action)
    }

    /// The view without any active path; enough for cursor bookkeeping since
    /// highlighting never changes which rows are visible.
    fn structure(&self) -> SidebarView {
        self.view("")
    }

    /// Applies a change that can add or remove rows and keeps the cursor on
    /// the same row, or on its group when the row disappeared.
    fn restructure(&mut self, change: impl FnOnce(&mut NavState)) {
        let before = self.structure();
        let previous = before.rows.get(self.cursor).map(|row| (row.action, row.kind));
        change(&mut self.nav);

        let after = self.structure();
        let relocated = previous.and_then(|(action, kind)| {
            after.position(action).or_else(|| match kind {
                RowKind::Child { group } => after.position(SidebarAction::ToggleGroup(group)),
                _ => None,
            })
        });
        self.cursor = relocated.unwrap_or(self.cursor).min(after.rows.len().saturating_sub(1));
    }
}

impl HasFocus for SidebarState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_are_involutions() {
        let mut state = NavState::default();
        state.toggle_collapse();
        state.toggle_collapse();
        assert_eq!(state, NavState::default());

        state.toggle_group("Vorlagen");
        assert!(state.is_expanded("Vorlagen"));
        state.toggle_group("Vorlagen");
        assert_eq!(state, NavState::default());
    }

    #[test]
    fn groups_toggle_independently_and_keep_order() {
        let mut state = NavState::default();
        state.toggle_group("Vorlagen");
        state.toggle_group("Unbekannt");
        state.toggle_group("Extra");
        state.toggle_group("Unbekannt");
        let open: Vec<_> = state.expanded_groups().iter().map(String::as_str).collect();
        assert_eq!(open, ["Vorlagen", "Extra"]);
    }

    #[test]
    fn collapse_preserves_open_groups() {
        let mut state = NavState::default();
        state.toggle_group("Vorlagen");
        state.toggle_collapse();
        assert!(state.is_collapsed());
        assert!(state.is_expanded("Vorlagen"));
    }

    #[test]
    fn cursor_moves_within_visible_rows() {
        let mut sidebar = SidebarState::new(NavModel::standard());
        sidebar.move_cursor(-3);
        assert_eq!(sidebar.cursor(), 0);
        assert_eq!(sidebar.cursor_action(), Some(SidebarAction::ToggleCollapse));

        sidebar.cursor_to_last();
        assert_eq!(sidebar.cursor_action(), Some(SidebarAction::Navigate("/settings")));
        sidebar.move_cursor(5);
        assert_eq!(sidebar.cursor_action(), Some(SidebarAction::Navigate("/settings")));
    }

    #[test]
    fn cursor_follows_row_when_group_opens() {
        let mut sidebar = SidebarState::new(NavModel::standard());
        sidebar.set_cursor_to(SidebarAction::Navigate("/contacts"));
        sidebar.toggle_group("Vorlagen");
        assert_eq!(sidebar.cursor_action(), Some(SidebarAction::Navigate("/contacts")));
    }

    #[test]
    fn cursor_falls_back_to_group_when_child_hides() {
        let mut sidebar = SidebarState::new(NavModel::standard());
        sidebar.toggle_group("Vorlagen");
        sidebar.set_cursor_to(SidebarAction::Navigate("/templates/gallery"));
        sidebar.toggle_collapse();
        assert_eq!(sidebar.cursor_action(), Some(SidebarAction::ToggleGroup("Vorlagen")));
    }
}
