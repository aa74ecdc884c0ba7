//! Declarative navigation model for the sidebar.
//!
//! The model is static data: three ordered sections of [`NavEntry`] values.
//! An entry either links directly to a path or groups child links; the
//! [`NavTarget`] enum makes "both" and "neither" unrepresentable, and
//! [`NavModel::validate`] rejects the remaining invalid shape (an empty group).

use std::collections::HashSet;

use thiserror::Error;

/// Symbolic reference to a visual glyph. Opaque to navigation logic; the
/// renderer decides what each icon looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Home,
    FileText,
    LayoutTemplate,
    Users,
    DollarSign,
    ShoppingBag,
    FileSpreadsheet,
    Zap,
    BarChart3,
    Code2,
    Puzzle,
    GraduationCap,
    UserPlus,
    Settings,
    Plus,
    PanelLeft,
    PanelLeftClose,
    ChevronDown,
    ChevronRight,
    Search,
    Filter,
    List,
    LayoutGrid,
    Upload,
    Save,
    Share,
    Download,
    MoreHorizontal,
    Type,
    Image,
    Table,
    Signature,
}

/// A link nested inside a group entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavChild {
    pub label: &'static str,
    pub path: &'static str,
}

/// What activating an entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// Navigates directly to the path.
    Link(&'static str),
    /// Expands to reveal the child links.
    Group(&'static [NavChild]),
}

/// A single sidebar item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub icon: Icon,
    pub label: &'static str,
    pub target: NavTarget,
}

impl NavEntry {
    pub const fn link(icon: Icon, label: &'static str, path: &'static str) -> Self {
        Self {
            icon,
            label,
            target: NavTarget::Link(path),
        }
    }

    pub const fn group(icon: Icon, label: &'static str, children: &'static [NavChild]) -> Self {
        Self {
            icon,
            label,
            target: NavTarget::Group(children),
        }
    }

    /// Path of a directly navigable entry, `None` for groups.
    pub fn path(&self) -> Option<&'static str> {
        match self.target {
            NavTarget::Link(path) => Some(path),
            NavTarget::Group(_) => None,
        }
    }

    /// Children of a group entry, `None` for direct links.
    pub fn children(&self) -> Option<&'static [NavChild]> {
        match self.target {
            NavTarget::Link(_) => None,
            NavTarget::Group(children) => Some(children),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.target, NavTarget::Group(_))
    }
}

/// The three visual sections of the sidebar, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavSection {
    Primary,
    Secondary,
    Footer,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavModelError {
    #[error("navigation group '{label}' has no children")]
    EmptyGroup { label: &'static str },
    #[error("navigation group label '{label}' is used more than once")]
    DuplicateGroupLabel { label: &'static str },
}

/// Ordered navigation sections consumed by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavModel {
    pub primary: &'static [NavEntry],
    pub secondary: &'static [NavEntry],
    pub footer: &'static [NavEntry],
}

const TEMPLATE_CHILDREN: &[NavChild] = &[
    NavChild {
        label: "Meine Vorlagen",
        path: "/templates",
    },
    NavChild {
        label: "Vorlagen-Galerie",
        path: "/templates/gallery",
    },
];

const PRIMARY: &[NavEntry] = &[
    NavEntry::link(Icon::Home, "Home", "/"),
    NavEntry::link(Icon::FileText, "Dokumente", "/documents"),
    NavEntry::group(Icon::LayoutTemplate, "Vorlagen", TEMPLATE_CHILDREN),
    NavEntry::link(Icon::Users, "Kontakte", "/contacts"),
];

const SECONDARY: &[NavEntry] = &[
    NavEntry::link(Icon::DollarSign, "Zahlungen", "/payments"),
    NavEntry::link(Icon::ShoppingBag, "Katalog", "/catalog"),
    NavEntry::link(Icon::FileSpreadsheet, "Formulare", "/forms"),
    NavEntry::link(Icon::Zap, "Automatisierungen", "/automations"),
    NavEntry::link(Icon::BarChart3, "Berichte", "/reports"),
    NavEntry::link(Icon::Code2, "Entwickler-Center", "/developer"),
    NavEntry::link(Icon::Puzzle, "Erweiterungen", "/extensions"),
];

const FOOTER: &[NavEntry] = &[
    NavEntry::link(Icon::GraduationCap, "Entdecken", "/discover"),
    NavEntry::link(Icon::UserPlus, "Benutzer einladen", "/invite"),
    NavEntry::link(Icon::Settings, "Einstellungen", "/settings"),
];

impl NavModel {
    /// The application's navigation.
    pub const fn standard() -> Self {
        Self {
            primary: PRIMARY,
            secondary: SECONDARY,
            footer: FOOTER,
        }
    }

    /// Sections in display order.
    pub fn sections(&self) -> [(NavSection, &'static [NavEntry]); 3] {
        [
            (NavSection::Primary, self.primary),
            (NavSection::Secondary, self.secondary),
            (NavSection::Footer, self.footer),
        ]
    }

    /// All entries across sections, in display order.
    pub fn entries(&self) -> impl Iterator<Item = &'static NavEntry> {
        self.sections().into_iter().flat_map(|(_, entries)| entries.iter())
    }

    pub fn find_group(&self, label: &str) -> Option<&'static NavEntry> {
        self.entries().find(|entry| entry.is_group() && entry.label == label)
    }

    /// Every path reachable from the sidebar, in display order.
    pub fn paths(&self) -> Vec<&'static str> {
        self.entries()
            .flat_map(|entry| match entry.target {
                NavTarget::Link(path) => vec![path],
                NavTarget::Group(children) => children.iter().map(|child| child.path).collect(),
            })
            .collect()
    }

    /// Checks that every group has children and group labels are unique.
    /// Group labels key the expanded-groups set, so duplicates would expand
    /// together.
    pub fn validate(&self) -> Result<(), NavModelError> {
        let mut seen = HashSet::new();
        for entry in self.entries() {
            if let NavTarget::Group(children) = entry.target {
                if children.is_empty() {
                    return Err(NavModelError::EmptyGroup { label: entry.label });
                }
                if !seen.insert(entry.label) {
                    return Err(NavModelError::DuplicateGroupLabel { label: entry.label });
                }
            }
        }
        Ok(())
    }
}

impl Default for NavModel {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_is_either_link_or_non_empty_group() {
        let model = NavModel::standard();
        for entry in model.entries() {
            let has_path = entry.path().is_some();
            let has_children = entry.children().is_some_and(|children| !children.is_empty());
            assert!(has_path ^ has_children, "entry '{}' breaks the link/group invariant", entry.label);
        }
        assert_eq!(model.validate(), Ok(()));
    }

    #[test]
    fn sections_keep_display_order() {
        let model = NavModel::standard();
        let labels: Vec<_> = model.primary.iter().map(|entry| entry.label).collect();
        assert_eq!(labels, ["Home", "Dokumente", "Vorlagen", "Kontakte"]);
        assert_eq!(model.secondary.len(), 7);
        assert_eq!(model.footer.last().map(|entry| entry.label), Some("Einstellungen"));
    }

    #[test]
    fn templates_group_lists_gallery_second() {
        let group = NavModel::standard().find_group("Vorlagen").expect("templates group");
        let children = group.children().expect("group children");
        assert_eq!(children[1].label, "Vorlagen-Galerie");
        assert_eq!(children[1].path, "/templates/gallery");
        assert!(NavModel::standard().find_group("Home").is_none());
    }

    #[test]
    fn validate_rejects_empty_and_duplicate_groups() {
        const EMPTY: &[NavEntry] = &[NavEntry::group(Icon::Zap, "Leer", &[])];
        let model = NavModel {
            primary: EMPTY,
            secondary: &[],
            footer: &[],
        };
        assert_eq!(model.validate(), Err(NavModelError::EmptyGroup { label: "Leer" }));

        const DUPLICATE: &[NavEntry] = &[
            NavEntry::group(Icon::Zap, "Gruppe", TEMPLATE_CHILDREN),
            NavEntry::group(Icon::Puzzle, "Gruppe", TEMPLATE_CHILDREN),
        ];
        let model = NavModel {
            primary: DUPLICATE,
            secondary: &[],
            footer: &[],
        };
        assert_eq!(
            model.validate(),
            Err(NavModelError::DuplicateGroupLabel { label: "Gruppe" })
        );
    }

    #[test]
    fn paths_include_group_children() {
        let paths = NavModel::standard().paths();
        assert!(paths.contains(&"/templates/gallery"));
        assert!(paths.contains(&"/settings"));
        assert_eq!(paths.len(), 15);
    }
}
