//! Pure description of what the sidebar shows.
//!
//! [`sidebar_view`] turns the navigation model, the sidebar's [`NavState`] and
//! the current path into a flat list of rows. Drawing, hit testing and the
//! keyboard cursor all work on this list, so the visibility and highlighting
//! rules live in exactly one place.

use docubuilder_types::{Icon, NavEntry, NavModel, NavSection, NavTarget};

use super::state::NavState;

/// Total sidebar width (including borders) in full mode.
pub const EXPANDED_WIDTH: u16 = 30;
/// Total sidebar width (including borders) in icon-only mode.
pub const COLLAPSED_WIDTH: u16 = 7;

pub const BRAND_NAME: &str = "DocuBuilder";
pub const CREATE_LABEL: &str = "Neu erstellen...";
/// Where the create button leads.
pub const CREATE_PATH: &str = "/editor";

/// What activating a row does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    ToggleCollapse,
    Create,
    Navigate(&'static str),
    ToggleGroup(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Brand plus collapse toggle.
    Header,
    /// The "create" button below the header.
    Create,
    Link,
    Group,
    /// Link nested under the group named here.
    Child { group: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarRow {
    pub kind: RowKind,
    /// Section the row belongs to; `None` for header and create rows.
    pub section: Option<NavSection>,
    pub icon: Option<Icon>,
    /// `None` when labels are hidden (collapsed mode).
    pub label: Option<&'static str>,
    /// Row path equals the current path.
    pub active: bool,
    /// Group row whose child is active.
    pub contains_active: bool,
    /// Disclosure state of a group; `None` when no affordance is shown.
    pub expanded: Option<bool>,
    pub action: SidebarAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarView {
    pub collapsed: bool,
    pub width: u16,
    /// Rows in display order: header, create, primary, secondary, footer.
    pub rows: Vec<SidebarRow>,
}

impl SidebarView {
    #[cfg(test)]
    pub fn rows_in(&self, section: NavSection) -> impl Iterator<Item = (usize, &SidebarRow)> {
        self.rows.iter().enumerate().filter(move |(_, row)| row.section == Some(section))
    }

    pub fn position(&self, action: SidebarAction) -> Option<usize> {
        self.rows.iter().position(|row| row.action == action)
    }

    /// The row marked active, if the current path is in the sidebar.
    #[cfg(test)]
    pub fn active_row(&self) -> Option<&SidebarRow> {
        self.rows.iter().find(|row| row.active)
    }

    #[cfg(test)]
    pub fn row_by_label(&self, label: &str) -> Option<&SidebarRow> {
        self.rows.iter().find(|row| row.label == Some(label))
    }
}

/// Builds the visual tree for `current_path`. Paths compare exactly.
pub fn sidebar_view(model: &NavModel, state: &NavState, current_path: &str) -> SidebarView {
    let collapsed = state.is_collapsed();
    let label = |text: &'static str| if collapsed { None } else { Some(text) };

    let mut rows = vec![
        SidebarRow {
            kind: RowKind::Header,
            section: None,
            icon: Some(if collapsed { Icon::PanelLeft } else { Icon::PanelLeftClose }),
            label: label(BRAND_NAME),
            active: false,
            contains_active: false,
            expanded: None,
            action: SidebarAction::ToggleCollapse,
        },
        SidebarRow {
            kind: RowKind::Create,
            section: None,
            icon: Some(Icon::Plus),
            label: label(CREATE_LABEL),
            active: false,
            contains_active: false,
            expanded: None,
            action: SidebarAction::Create,
        },
    ];

    for (section, entries) in model.sections() {
        for entry in entries {
            push_entry_rows(&mut rows, section, entry, state, current_path);
        }
    }

    SidebarView {
        collapsed,
        width: if collapsed { COLLAPSED_WIDTH } else { EXPANDED_WIDTH },
        rows,
    }
}

fn push_entry_rows(rows: &mut Vec<SidebarRow>, section: NavSection, entry: &NavEntry, state: &NavState, current_path: &str) {
    let collapsed = state.is_collapsed();
    match entry.target {
        NavTarget::Link(path) => rows.push(SidebarRow {
            kind: RowKind::Link,
            section: Some(section),
            icon: Some(entry.icon),
            label: (!collapsed).then_some(entry.label),
            active: path == current_path,
            contains_active: false,
            expanded: None,
            action: SidebarAction::Navigate(path),
        }),
        NavTarget::Group(children) => {
            let is_expanded = state.is_expanded(entry.label);
            rows.push(SidebarRow {
                kind: RowKind::Group,
                section: Some(section),
                icon: Some(entry.icon),
                label: (!collapsed).then_some(entry.label),
                active: false,
                contains_active: children.iter().any(|child| child.path == current_path),
                expanded: (!collapsed).then_some(is_expanded),
                action: SidebarAction::ToggleGroup(entry.label),
            });
            if collapsed || !is_expanded {
                return;
            }
            for child in children {
                rows.push(SidebarRow {
                    kind: RowKind::Child { group: entry.label },
                    section: Some(section),
                    icon: None,
                    label: Some(child.label),
                    active: child.path == current_path,
                    contains_active: false,
                    expanded: None,
                    action: SidebarAction::Navigate(child.path),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docubuilder_types::NavChild;

    fn expanded_templates() -> NavState {
        let mut state = NavState::default();
        state.toggle_group("Vorlagen");
        state
    }

    #[test]
    fn direct_link_is_active_only_on_exact_path() {
        let view = sidebar_view(&NavModel::standard(), &NavState::default(), "/documents");
        let active = view.active_row().expect("active row");
        assert_eq!(active.label, Some("Dokumente"));

        let view = sidebar_view(&NavModel::standard(), &NavState::default(), "/documents/42");
        assert!(view.active_row().is_none());
    }

    #[test]
    fn gallery_child_is_active_and_group_contains_it() {
        let view = sidebar_view(&NavModel::standard(), &expanded_templates(), "/templates/gallery");

        let active = view.active_row().expect("active row");
        assert_eq!(active.label, Some("Vorlagen-Galerie"));
        assert_eq!(active.kind, RowKind::Child { group: "Vorlagen" });

        let group = view.row_by_label("Vorlagen").expect("group row");
        assert!(group.contains_active);
        assert!(!group.active);
        assert_eq!(group.expanded, Some(true));

        let my_templates = view.row_by_label("Meine Vorlagen").expect("child row");
        assert!(!my_templates.active);
    }

    #[test]
    fn group_marks_active_child_even_when_closed() {
        let view = sidebar_view(&NavModel::standard(), &NavState::default(), "/templates/gallery");
        let group = view.row_by_label("Vorlagen").expect("group row");
        assert!(group.contains_active);
        assert_eq!(group.expanded, Some(false));
        assert!(view.active_row().is_none(), "hidden children cannot be the active row");
    }

    #[test]
    fn collapsed_mode_hides_labels_children_and_disclosure() {
        let mut state = expanded_templates();
        state.toggle_collapse();
        let view = sidebar_view(&NavModel::standard(), &state, "/templates");

        assert_eq!(view.width, COLLAPSED_WIDTH);
        assert!(view.rows.iter().all(|row| row.label.is_none()));
        assert!(view.rows.iter().all(|row| row.icon.is_some()));
        assert!(view.rows.iter().all(|row| !matches!(row.kind, RowKind::Child { .. })));
        let group = view.position(SidebarAction::ToggleGroup("Vorlagen")).expect("group row");
        assert_eq!(view.rows[group].expanded, None);
        assert!(state.is_expanded("Vorlagen"), "collapse keeps the expanded set");
    }

    #[test]
    fn expanding_again_restores_disclosure() {
        let mut state = expanded_templates();
        state.toggle_collapse();
        state.toggle_collapse();
        let view = sidebar_view(&NavModel::standard(), &state, "/");
        assert!(view.row_by_label("Vorlagen-Galerie").is_some());
        assert_eq!(view.width, EXPANDED_WIDTH);
    }

    #[test]
    fn rows_follow_section_order() {
        let view = sidebar_view(&NavModel::standard(), &NavState::default(), "/");
        assert_eq!(view.rows[0].kind, RowKind::Header);
        assert_eq!(view.rows[1].kind, RowKind::Create);
        assert_eq!(view.rows[2].label, Some("Home"));
        assert_eq!(view.rows_in(NavSection::Secondary).count(), 7);
        let footer: Vec<_> = view.rows_in(NavSection::Footer).map(|(_, row)| row.label).collect();
        assert_eq!(footer, [Some("Entdecken"), Some("Benutzer einladen"), Some("Einstellungen")]);
    }

    #[test]
    fn empty_group_still_toggles_and_discloses_nothing() {
        const EMPTY: &[NavEntry] = &[NavEntry::group(Icon::Zap, "Leer", &[] as &[NavChild])];
        let model = NavModel {
            primary: EMPTY,
            secondary: &[],
            footer: &[],
        };
        let mut state = NavState::default();
        state.toggle_group("Leer");
        let view = sidebar_view(&model, &state, "/");
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.rows[2].expanded, Some(true));
    }
}
