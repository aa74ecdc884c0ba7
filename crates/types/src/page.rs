use serde::Serialize;

/// Text shown on every placeholder page below its title.
pub const PLACEHOLDER_NOTICE: &str = "Diese Seite ist noch in Entwicklung.";

/// Title of the editor when no document id is present in the path.
pub const UNTITLED_DOCUMENT: &str = "Unbenanntes Dokument";

/// The page the router selected for the current path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Home,
    Documents,
    Templates,
    Contacts,
    /// The editor stub, optionally opened for a document id.
    Editor { id: Option<String> },
    /// A feature that is not implemented yet, shown with its display title.
    Placeholder { title: String },
    /// No route matched; carries the requested path.
    NotFound { path: String },
}

impl Page {
    pub fn placeholder(title: impl Into<String>) -> Self {
        Self::Placeholder { title: title.into() }
    }

    /// Heading rendered at the top of the page.
    pub fn heading(&self) -> String {
        match self {
            Page::Home => "Willkommen zurück".to_string(),
            Page::Documents => "Dokumente".to_string(),
            Page::Templates => "Vorlagen".to_string(),
            Page::Contacts => "Kontakte".to_string(),
            Page::Editor { id } => editor_title(id.as_deref()),
            Page::Placeholder { title } => title.clone(),
            Page::NotFound { .. } => "Seite nicht gefunden".to_string(),
        }
    }

    /// Stable identifier of the page kind, independent of parameters.
    pub fn kind(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Documents => "documents",
            Page::Templates => "templates",
            Page::Contacts => "contacts",
            Page::Editor { .. } => "editor",
            Page::Placeholder { .. } => "placeholder",
            Page::NotFound { .. } => "not_found",
        }
    }
}

/// Initial value of the editor's title field.
pub fn editor_title(id: Option<&str>) -> String {
    match id {
        Some(id) => format!("Dokument {id}"),
        None => UNTITLED_DOCUMENT.to_string(),
    }
}
